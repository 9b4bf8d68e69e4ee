//! Month-by-month debt payoff projection.
//!
//! The engine simulates four debt buckets and an emergency fund over a fixed
//! horizon under an avalanche-style allocation policy: whatever is left of
//! income after fixed outflows is split between extra credit-card payments and
//! savings.
//!
//! # Monthly Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Surplus: income − bills − minimums − BNPL payment − living, floored at 0 |
//! | 2    | Extra toward debt: surplus × debt share; the rest goes to savings |
//! | 3    | Credit cards: prev × (1 + APR/12) − extra toward debt, floored at 0 |
//! | 4    | Auto loans: prev × (1 + APR/12) − fixed payment, floored at 0 |
//! | 5    | Student loans: prev × (1 + APR/12) − fixed payment, floored at 0 |
//! | 6    | BNPL: prev − scheduled payment, floored at 0 (no interest) |
//! | 7    | Total debt: sum of the four buckets |
//! | 8    | Emergency fund: prev + extra toward savings, capped at the ceiling |
//!
//! # Month 1
//!
//! The first month is seeded from the starting balances rather than advanced
//! from a previous month. No interest accrues and no fixed installment is
//! taken. The extra toward debt is applied to credit cards, and any part of it
//! larger than the credit-card balance is taken off the auto loans instead.
//! Student loans keep their starting balance.
//!
//! # Precision
//!
//! Balances carry full [`Decimal`] precision from one month into the next, so
//! every month is exactly the recurrence applied to the previous one. Nothing
//! here rounds to cents; renderers do that for display.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use payoff_core::calculations::{
//!     AllocationPolicy, EmergencyFundGoal, InstallmentTerms, ProjectionConfig, ProjectionEngine,
//!     RevolvingTerms,
//! };
//! use payoff_core::{BucketBalances, CashFlowAssumptions, MinimumsSchedule};
//!
//! let config = ProjectionConfig {
//!     horizon_months: 3,
//!     start_month: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!     starting_balances: BucketBalances {
//!         credit_card: dec!(5000.00),
//!         auto_loan: dec!(10000.00),
//!         student_loan: dec!(0.00),
//!         bnpl: dec!(0.00),
//!     },
//!     credit_card: RevolvingTerms { apr: dec!(0.24) },
//!     auto_loan: InstallmentTerms { apr: dec!(0.06), fixed_payment: dec!(300.00) },
//!     student_loan: InstallmentTerms { apr: dec!(0.00), fixed_payment: dec!(0.00) },
//!     cash_flow: CashFlowAssumptions {
//!         monthly_income: dec!(4000.00),
//!         monthly_fixed_bills: dec!(1000.00),
//!         monthly_living_expenses: dec!(1000.00),
//!         bnpl_scheduled_payments: vec![],
//!         debt_minimums: MinimumsSchedule::flat(dec!(1000.00)),
//!     },
//!     allocation: AllocationPolicy { debt_share: dec!(0.8) },
//!     emergency_fund: EmergencyFundGoal { starting_balance: dec!(0.00), ceiling: dec!(1000.00) },
//! };
//!
//! let snapshots = ProjectionEngine::new(&config).project().unwrap();
//!
//! assert_eq!(snapshots.len(), 3);
//! assert_eq!(snapshots[0].extra_toward_debt, dec!(800.00));
//! assert_eq!(snapshots[0].credit_card_balance, dec!(4200.00));
//! // 4200.00 × 1.02 − 800.00
//! assert_eq!(snapshots[1].credit_card_balance, dec!(3484.00));
//! // 10000.00 × 1.005 − 300.00, not rounded
//! assert_eq!(snapshots[1].auto_loan_balance, dec!(9750.000));
//! ```

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::calculations::common::{floor_at_zero, monthly_growth_factor};
use crate::{BucketBalances, CashFlowAssumptions, MonthlySnapshot};

/// Longest projection a configuration may ask for: one hundred years.
pub const MAX_HORIZON_MONTHS: u32 = 1200;

/// Problems with a [`ProjectionConfig`] found before any month is projected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("projection horizon must be at least one month")]
    ZeroHorizon,

    #[error("projection horizon of {months} months exceeds the maximum of {max}")]
    HorizonTooLong { months: u32, max: u32 },

    #[error("{bucket} starting balance must be non-negative, got {value}")]
    NegativeStartingBalance { bucket: &'static str, value: Decimal },

    #[error("starting balances are too large to add up")]
    StartingDebtOverflow,

    #[error("{bucket} APR must be non-negative, got {value}")]
    NegativeRate { bucket: &'static str, value: Decimal },

    #[error("{bucket} fixed payment must be non-negative, got {value}")]
    NegativeFixedPayment { bucket: &'static str, value: Decimal },

    #[error("{field} must be non-negative, got {value}")]
    NegativeCashFlow { field: &'static str, value: Decimal },

    #[error("debt minimums for month {month} must be non-negative, got {value}")]
    NegativeMinimum { month: u32, value: Decimal },

    #[error("debt minimums for month {month} are too large to add up")]
    MinimumsOverflow { month: u32 },

    #[error("scheduled BNPL payment for month {month} must be non-negative, got {value}")]
    NegativeScheduledPayment { month: u32, value: Decimal },

    #[error("debt share must be between 0 and 1, got {0}")]
    InvalidDebtShare(Decimal),

    #[error("emergency fund ceiling must be non-negative, got {0}")]
    NegativeEmergencyFundCeiling(Decimal),

    #[error("emergency fund must start between 0 and its ceiling {ceiling}, got {starting_balance}")]
    InvalidEmergencyFundStart {
        starting_balance: Decimal,
        ceiling: Decimal,
    },
}

/// Errors that can occur while running a projection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("invalid projection configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("arithmetic overflow while projecting month {month}")]
    ArithmeticOverflow { month: u32 },
}

/// Interest terms for the revolving credit-card bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevolvingTerms {
    pub apr: Decimal,
}

/// Interest and fixed monthly payment for an installment-loan bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentTerms {
    pub apr: Decimal,
    pub fixed_payment: Decimal,
}

/// How the monthly surplus is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPolicy {
    /// Fraction of the surplus sent to debt; the remainder is saved.
    pub debt_share: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyFundGoal {
    pub starting_balance: Decimal,
    /// Savings beyond this are discarded.
    pub ceiling: Decimal,
}

/// Full input of one projection run. Immutable for the life of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub horizon_months: u32,
    /// Calendar month of month 1; only year and month are used.
    pub start_month: NaiveDate,
    pub starting_balances: BucketBalances,
    pub credit_card: RevolvingTerms,
    pub auto_loan: InstallmentTerms,
    pub student_loan: InstallmentTerms,
    pub cash_flow: CashFlowAssumptions,
    pub allocation: AllocationPolicy,
    pub emergency_fund: EmergencyFundGoal,
}

impl ProjectionConfig {
    /// Validates every input before a projection starts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - the horizon is zero or longer than [`MAX_HORIZON_MONTHS`]
    /// - any starting balance, APR, fixed payment or cash-flow figure is negative
    /// - the starting balances or any month's debt minimums overflow when summed
    /// - the debt minimums or a scheduled BNPL payment are negative for any month
    /// - `debt_share` is outside [0, 1]
    /// - the emergency fund ceiling is negative, or the fund starts outside
    ///   [0, ceiling]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_months == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(ConfigError::HorizonTooLong {
                months: self.horizon_months,
                max: MAX_HORIZON_MONTHS,
            });
        }

        let balances = [
            ("credit card", self.starting_balances.credit_card),
            ("auto loan", self.starting_balances.auto_loan),
            ("student loan", self.starting_balances.student_loan),
            ("BNPL", self.starting_balances.bnpl),
        ];
        if let Some(&(bucket, value)) = balances.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(ConfigError::NegativeStartingBalance { bucket, value });
        }
        self.starting_total_debt()?;

        let rates = [
            ("credit card", self.credit_card.apr),
            ("auto loan", self.auto_loan.apr),
            ("student loan", self.student_loan.apr),
        ];
        if let Some(&(bucket, value)) = rates.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(ConfigError::NegativeRate { bucket, value });
        }

        let payments = [
            ("auto loan", self.auto_loan.fixed_payment),
            ("student loan", self.student_loan.fixed_payment),
        ];
        if let Some(&(bucket, value)) = payments.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(ConfigError::NegativeFixedPayment { bucket, value });
        }

        let cash_flow = [
            ("monthly income", self.cash_flow.monthly_income),
            ("monthly fixed bills", self.cash_flow.monthly_fixed_bills),
            ("monthly living expenses", self.cash_flow.monthly_living_expenses),
        ];
        if let Some(&(field, value)) = cash_flow.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(ConfigError::NegativeCashFlow { field, value });
        }

        for month in 1..=self.horizon_months {
            let value = self
                .cash_flow
                .debt_minimum(month)
                .ok_or(ConfigError::MinimumsOverflow { month })?;
            if value < Decimal::ZERO {
                return Err(ConfigError::NegativeMinimum { month, value });
            }
        }

        for (month, &value) in (1u32..).zip(self.cash_flow.bnpl_scheduled_payments.iter()) {
            if value < Decimal::ZERO {
                return Err(ConfigError::NegativeScheduledPayment { month, value });
            }
        }

        let share = self.allocation.debt_share;
        if share < Decimal::ZERO || share > Decimal::ONE {
            return Err(ConfigError::InvalidDebtShare(share));
        }

        let fund = &self.emergency_fund;
        if fund.ceiling < Decimal::ZERO {
            return Err(ConfigError::NegativeEmergencyFundCeiling(fund.ceiling));
        }
        if fund.starting_balance < Decimal::ZERO || fund.starting_balance > fund.ceiling {
            return Err(ConfigError::InvalidEmergencyFundStart {
                starting_balance: fund.starting_balance,
                ceiling: fund.ceiling,
            });
        }

        Ok(())
    }

    /// Sum of the four starting balances.
    pub fn starting_total_debt(&self) -> Result<Decimal, ConfigError> {
        self.starting_balances.total().ok_or(ConfigError::StartingDebtOverflow)
    }
}

/// How one month's surplus was split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MonthAllocation {
    debt_minimums: Decimal,
    bnpl_payment: Decimal,
    extra_toward_debt: Decimal,
    extra_toward_savings: Decimal,
}

/// Checked decimal arithmetic that reports the month being projected.
#[derive(Debug, Clone, Copy)]
struct MonthMath {
    month: u32,
}

impl MonthMath {
    fn overflow(&self) -> ProjectionError {
        ProjectionError::ArithmeticOverflow { month: self.month }
    }

    fn add(
        &self,
        a: Decimal,
        b: Decimal,
    ) -> Result<Decimal, ProjectionError> {
        a.checked_add(b).ok_or_else(|| self.overflow())
    }

    fn sub(
        &self,
        a: Decimal,
        b: Decimal,
    ) -> Result<Decimal, ProjectionError> {
        a.checked_sub(b).ok_or_else(|| self.overflow())
    }

    fn mul(
        &self,
        a: Decimal,
        b: Decimal,
    ) -> Result<Decimal, ProjectionError> {
        a.checked_mul(b).ok_or_else(|| self.overflow())
    }
}

/// Calculator producing the month-by-month projection for a configuration.
#[derive(Debug, Clone)]
pub struct ProjectionEngine<'a> {
    config: &'a ProjectionConfig,
}

impl<'a> ProjectionEngine<'a> {
    pub fn new(config: &'a ProjectionConfig) -> Self {
        Self { config }
    }

    /// Runs the projection, returning exactly `horizon_months` snapshots in
    /// month order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidConfiguration`] before producing
    /// anything if the configuration is invalid, and
    /// [`ProjectionError::ArithmeticOverflow`] if a balance leaves the range
    /// of [`Decimal`].
    pub fn project(&self) -> Result<Vec<MonthlySnapshot>, ProjectionError> {
        self.config.validate()?;

        let horizon = self.config.horizon_months;
        let starting_debt = self.config.starting_total_debt()?;
        let mut snapshots = Vec::with_capacity(horizon as usize);

        let mut previous = self.seed_first_month()?;
        for month in 2..=horizon {
            let next = self.advance(&previous, month)?;
            snapshots.push(previous);
            previous = next;
        }
        snapshots.push(previous);

        if let Some(last) = snapshots.last() {
            info!(
                months = horizon,
                starting_debt = %starting_debt,
                final_debt = %last.total_debt,
                emergency_fund = %last.emergency_fund_balance,
                "projection complete"
            );
        }

        Ok(snapshots)
    }

    /// Builds month 1 directly from the starting balances.
    fn seed_first_month(&self) -> Result<MonthlySnapshot, ProjectionError> {
        let math = MonthMath { month: 1 };
        let start = &self.config.starting_balances;
        let allocation = self.allocate(1)?;

        let credit_card_balance =
            floor_at_zero(math.sub(start.credit_card, allocation.extra_toward_debt)?);
        let overflow = floor_at_zero(math.sub(allocation.extra_toward_debt, start.credit_card)?);
        let auto_loan_balance = floor_at_zero(math.sub(start.auto_loan, overflow)?);
        let student_loan_balance = start.student_loan;
        let bnpl_balance = self.bnpl_balance(&math, start.bnpl, allocation.bnpl_payment)?;
        let emergency_fund_balance = self.emergency_fund(
            &math,
            self.config.emergency_fund.starting_balance,
            allocation.extra_toward_savings,
        )?;

        self.snapshot(
            &math,
            allocation,
            BucketBalances {
                credit_card: credit_card_balance,
                auto_loan: auto_loan_balance,
                student_loan: student_loan_balance,
                bnpl: bnpl_balance,
            },
            emergency_fund_balance,
        )
    }

    /// Derives `month` from the previous month's snapshot.
    fn advance(
        &self,
        previous: &MonthlySnapshot,
        month: u32,
    ) -> Result<MonthlySnapshot, ProjectionError> {
        let math = MonthMath { month };
        let allocation = self.allocate(month)?;

        let credit_card_balance = self.accrue_and_pay(
            &math,
            previous.credit_card_balance,
            self.config.credit_card.apr,
            allocation.extra_toward_debt,
        )?;
        let auto_loan_balance = self.accrue_and_pay(
            &math,
            previous.auto_loan_balance,
            self.config.auto_loan.apr,
            self.config.auto_loan.fixed_payment,
        )?;
        let student_loan_balance = self.accrue_and_pay(
            &math,
            previous.student_loan_balance,
            self.config.student_loan.apr,
            self.config.student_loan.fixed_payment,
        )?;
        let bnpl_balance = self.bnpl_balance(&math, previous.bnpl_balance, allocation.bnpl_payment)?;
        let emergency_fund_balance = self.emergency_fund(
            &math,
            previous.emergency_fund_balance,
            allocation.extra_toward_savings,
        )?;

        self.snapshot(
            &math,
            allocation,
            BucketBalances {
                credit_card: credit_card_balance,
                auto_loan: auto_loan_balance,
                student_loan: student_loan_balance,
                bnpl: bnpl_balance,
            },
            emergency_fund_balance,
        )
    }

    /// Splits the month's surplus between debt and savings.
    ///
    /// Savings receive the surplus minus the debt share, so the two always add
    /// back up to the surplus.
    fn allocate(
        &self,
        month: u32,
    ) -> Result<MonthAllocation, ProjectionError> {
        let math = MonthMath { month };
        let cash_flow: &CashFlowAssumptions = &self.config.cash_flow;
        let debt_minimums = cash_flow.debt_minimum(month).ok_or_else(|| math.overflow())?;
        let bnpl_payment = cash_flow.bnpl_payment(month);

        let mut raw_surplus = cash_flow.monthly_income;
        for outflow in [
            cash_flow.monthly_fixed_bills,
            debt_minimums,
            bnpl_payment,
            cash_flow.monthly_living_expenses,
        ] {
            raw_surplus = math.sub(raw_surplus, outflow)?;
        }
        let surplus = floor_at_zero(raw_surplus);

        let extra_toward_debt = math.mul(surplus, self.config.allocation.debt_share)?;
        let extra_toward_savings = floor_at_zero(math.sub(surplus, extra_toward_debt)?);

        Ok(MonthAllocation {
            debt_minimums,
            bnpl_payment,
            extra_toward_debt,
            extra_toward_savings,
        })
    }

    /// `max(0, balance × (1 + apr/12) − payment)`
    fn accrue_and_pay(
        &self,
        math: &MonthMath,
        balance: Decimal,
        apr: Decimal,
        payment: Decimal,
    ) -> Result<Decimal, ProjectionError> {
        let grown = math.mul(balance, monthly_growth_factor(apr))?;
        Ok(floor_at_zero(math.sub(grown, payment)?))
    }

    fn bnpl_balance(
        &self,
        math: &MonthMath,
        balance: Decimal,
        payment: Decimal,
    ) -> Result<Decimal, ProjectionError> {
        Ok(floor_at_zero(math.sub(balance, payment)?))
    }

    fn emergency_fund(
        &self,
        math: &MonthMath,
        balance: Decimal,
        deposit: Decimal,
    ) -> Result<Decimal, ProjectionError> {
        let ceiling = self.config.emergency_fund.ceiling;
        let funded = math.add(balance, deposit)?;
        Ok(if funded > ceiling { ceiling } else { funded })
    }

    fn snapshot(
        &self,
        math: &MonthMath,
        allocation: MonthAllocation,
        balances: BucketBalances,
        emergency_fund_balance: Decimal,
    ) -> Result<MonthlySnapshot, ProjectionError> {
        let mut total_debt = Decimal::ZERO;
        for balance in [
            balances.credit_card,
            balances.auto_loan,
            balances.student_loan,
            balances.bnpl,
        ] {
            total_debt = math.add(total_debt, balance)?;
        }

        let cash_flow = &self.config.cash_flow;
        let snapshot = MonthlySnapshot {
            month_index: math.month,
            calendar_label: self.calendar_label(math)?,
            income: cash_flow.monthly_income,
            bills: cash_flow.monthly_fixed_bills,
            debt_minimums: allocation.debt_minimums,
            bnpl_payment: allocation.bnpl_payment,
            living_expenses: cash_flow.monthly_living_expenses,
            extra_toward_debt: allocation.extra_toward_debt,
            extra_toward_savings: allocation.extra_toward_savings,
            credit_card_balance: balances.credit_card,
            auto_loan_balance: balances.auto_loan,
            student_loan_balance: balances.student_loan,
            bnpl_balance: balances.bnpl,
            total_debt,
            emergency_fund_balance,
        };

        debug!(
            month = snapshot.month_index,
            label = %snapshot.calendar_label,
            extra_toward_debt = %snapshot.extra_toward_debt,
            total_debt = %snapshot.total_debt,
            emergency_fund = %snapshot.emergency_fund_balance,
            "projected month"
        );

        Ok(snapshot)
    }

    fn calendar_label(
        &self,
        math: &MonthMath,
    ) -> Result<String, ProjectionError> {
        let date = self
            .config
            .start_month
            .checked_add_months(Months::new(math.month - 1))
            .ok_or_else(|| math.overflow())?;
        Ok(date.format("%b %Y").to_string())
    }
}

/// Runs [`ProjectionEngine::project`] for `config`.
pub fn project(config: &ProjectionConfig) -> Result<Vec<MonthlySnapshot>, ProjectionError> {
    ProjectionEngine::new(config).project()
}
