use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DebtAccount, DebtCategory};
use crate::calculations::common::checked_sum;

/// Balance held in each projection bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketBalances {
    pub credit_card: Decimal,
    pub auto_loan: Decimal,
    pub student_loan: Decimal,
    pub bnpl: Decimal,
}

impl BucketBalances {
    /// Sum of the four buckets, or `None` if it overflows.
    pub fn total(&self) -> Option<Decimal> {
        checked_sum([self.credit_card, self.auto_loan, self.student_loan, self.bnpl])
    }

    pub fn get(
        &self,
        category: DebtCategory,
    ) -> Decimal {
        match category {
            DebtCategory::CreditCard => self.credit_card,
            DebtCategory::AutoLoan => self.auto_loan,
            DebtCategory::StudentLoan => self.student_loan,
            DebtCategory::BuyNowPayLater => self.bnpl,
        }
    }

    fn checked_add(
        &mut self,
        category: DebtCategory,
        amount: Decimal,
    ) -> Option<()> {
        let bucket = match category {
            DebtCategory::CreditCard => &mut self.credit_card,
            DebtCategory::AutoLoan => &mut self.auto_loan,
            DebtCategory::StudentLoan => &mut self.student_loan,
            DebtCategory::BuyNowPayLater => &mut self.bnpl,
        };
        *bucket = bucket.checked_add(amount)?;
        Some(())
    }
}

/// Presentation overrides for one category on the snapshot sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub category: DebtCategory,
    pub label: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub high_priority: bool,
}

/// Per-category totals shown in the debt snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: DebtCategory,
    pub label: String,
    pub balance: Decimal,
    pub minimum_payment: Decimal,
    pub note: String,
    /// Set when the category is marked high priority or holds a past-due account.
    pub alert: bool,
}

/// Every debt account the household carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtInventory {
    pub accounts: Vec<DebtAccount>,
    #[serde(default)]
    pub profiles: Vec<CategoryProfile>,
}

impl DebtInventory {
    pub fn new(accounts: Vec<DebtAccount>) -> Self {
        Self {
            accounts,
            profiles: Vec::new(),
        }
    }

    pub fn with_profiles(
        mut self,
        profiles: Vec<CategoryProfile>,
    ) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    // Totals below return `None` when a sum leaves the range of `Decimal`.

    pub fn total_balance(&self) -> Option<Decimal> {
        checked_sum(self.accounts.iter().map(|a| a.balance))
    }

    pub fn total_minimum_payment(&self) -> Option<Decimal> {
        checked_sum(self.accounts.iter().map(|a| a.minimum_payment))
    }

    /// Sums balances into the four projection buckets.
    pub fn bucket_balances(&self) -> Option<BucketBalances> {
        let mut buckets = BucketBalances::default();
        for account in &self.accounts {
            buckets.checked_add(account.category, account.balance)?;
        }
        Some(buckets)
    }

    /// One summary per category, in [`DebtCategory::ALL`] order, including
    /// categories with no accounts.
    pub fn category_summaries(&self) -> Option<Vec<CategorySummary>> {
        DebtCategory::ALL
            .iter()
            .map(|&category| {
                let mut accounts = self.accounts.iter().filter(|a| a.category == category);
                let (balance, minimum_payment, past_due) = accounts.try_fold(
                    (Decimal::ZERO, Decimal::ZERO, false),
                    |(balance, minimum, past_due), a| {
                        Some((
                            balance.checked_add(a.balance)?,
                            minimum.checked_add(a.minimum_payment)?,
                            past_due || a.is_past_due(),
                        ))
                    },
                )?;
                let profile = self.profiles.iter().find(|p| p.category == category);

                Some(CategorySummary {
                    category,
                    label: profile
                        .and_then(|p| p.label.clone())
                        .unwrap_or_else(|| category.default_label().to_string()),
                    balance,
                    minimum_payment,
                    note: profile.and_then(|p| p.note.clone()).unwrap_or_default(),
                    alert: past_due || profile.is_some_and(|p| p.high_priority),
                })
            })
            .collect()
    }

    /// Accounts in avalanche order, ties broken by name.
    pub fn by_priority(&self) -> Vec<&DebtAccount> {
        let mut accounts: Vec<&DebtAccount> = self.accounts.iter().collect();
        accounts.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));
        accounts
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::AccountStatus;

    fn account(
        name: &str,
        category: DebtCategory,
        balance: Decimal,
        minimum_payment: Decimal,
        status: AccountStatus,
        priority: u32,
    ) -> DebtAccount {
        DebtAccount {
            name: name.to_string(),
            category,
            balance,
            apr: dec!(0.10),
            minimum_payment,
            due_day: 1,
            status,
            status_note: None,
            priority,
        }
    }

    fn inventory() -> DebtInventory {
        DebtInventory::new(vec![
            account("Best Buy", DebtCategory::CreditCard, dec!(7000.00), dec!(230.00), AccountStatus::Current, 1),
            account("Amex", DebtCategory::CreditCard, dec!(3000.00), dec!(170.00), AccountStatus::Current, 3),
            account("BMW", DebtCategory::AutoLoan, dec!(17624.30), dec!(437.37), AccountStatus::PastDue, 13),
            account("Nelnet", DebtCategory::StudentLoan, dec!(22203.57), dec!(0.00), AccountStatus::Deferred, 14),
            account("Affirm", DebtCategory::BuyNowPayLater, dec!(215.40), dec!(71.80), AccountStatus::Current, 3),
        ])
    }

    #[test]
    fn bucket_balances_sum_by_category() {
        let buckets = inventory().bucket_balances();

        assert_eq!(
            buckets,
            Some(BucketBalances {
                credit_card: dec!(10000.00),
                auto_loan: dec!(17624.30),
                student_loan: dec!(22203.57),
                bnpl: dec!(215.40),
            })
        );
        assert_eq!(buckets.and_then(|b| b.total()), inventory().total_balance());
    }

    #[test]
    fn totals_cover_every_account() {
        let inventory = inventory();

        assert_eq!(inventory.total_balance(), Some(dec!(50043.27)));
        assert_eq!(inventory.total_minimum_payment(), Some(dec!(909.17)));
    }

    #[test]
    fn overflowing_totals_are_none() {
        let inventory = DebtInventory::new(vec![
            account("Visa", DebtCategory::CreditCard, Decimal::MAX, dec!(25.00), AccountStatus::Current, 1),
            account("Amex", DebtCategory::CreditCard, dec!(1.00), Decimal::MAX, AccountStatus::Current, 2),
            account("Chase", DebtCategory::CreditCard, dec!(1.00), dec!(1.00), AccountStatus::Current, 3),
        ]);

        assert_eq!(inventory.total_balance(), None);
        assert_eq!(inventory.total_minimum_payment(), None);
        assert_eq!(inventory.bucket_balances(), None);
        assert_eq!(inventory.category_summaries(), None);
    }

    #[test]
    fn summaries_use_default_labels_without_profiles() {
        let summaries = inventory().category_summaries().unwrap();
        let labels: Vec<&str> = summaries.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(
            labels,
            vec!["Credit Cards", "Auto Loans", "Student Loans", "BNPL (Buy Now Pay Later)"]
        );
    }

    #[test]
    fn summaries_alert_on_past_due_or_profile_flag() {
        let inventory = inventory().with_profiles(vec![CategoryProfile {
            category: DebtCategory::CreditCard,
            label: Some("Credit Cards (4)".to_string()),
            note: Some("HIGH PRIORITY - 22-29% APR".to_string()),
            high_priority: true,
        }]);

        let summaries = inventory.category_summaries().unwrap();

        assert_eq!(summaries[0].label, "Credit Cards (4)");
        assert_eq!(summaries[0].note, "HIGH PRIORITY - 22-29% APR");
        assert!(summaries[0].alert);
        assert!(summaries[1].alert);
        assert!(!summaries[2].alert);
        assert!(!summaries[3].alert);
    }

    #[test]
    fn summaries_include_empty_categories() {
        let inventory = DebtInventory::new(vec![]);

        let summaries = inventory.category_summaries().unwrap();

        assert_eq!(summaries.len(), 4);
        assert!(summaries.iter().all(|s| s.balance == Decimal::ZERO));
    }

    #[test]
    fn by_priority_breaks_ties_by_name() {
        let inventory = inventory();

        let names: Vec<&str> = inventory.by_priority().iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, vec!["Best Buy", "Affirm", "Amex", "BMW", "Nelnet"]);
    }
}
