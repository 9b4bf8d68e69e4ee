use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bucket a debt account is grouped into when the projection is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtCategory {
    CreditCard,
    AutoLoan,
    StudentLoan,
    #[serde(rename = "bnpl")]
    BuyNowPayLater,
}

impl DebtCategory {
    /// Every category, in the order reports list them.
    pub const ALL: [DebtCategory; 4] = [
        Self::CreditCard,
        Self::AutoLoan,
        Self::StudentLoan,
        Self::BuyNowPayLater,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::AutoLoan => "auto_loan",
            Self::StudentLoan => "student_loan",
            Self::BuyNowPayLater => "bnpl",
        }
    }

    /// Human-readable name used when no profile overrides it.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Cards",
            Self::AutoLoan => "Auto Loans",
            Self::StudentLoan => "Student Loans",
            Self::BuyNowPayLater => "BNPL (Buy Now Pay Later)",
        }
    }

    /// Accepts the snake_case code, or the same words separated by spaces or
    /// hyphens, in any case.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "credit_card" | "credit_cards" => Some(Self::CreditCard),
            "auto_loan" | "auto_loans" | "auto" => Some(Self::AutoLoan),
            "student_loan" | "student_loans" | "student" => Some(Self::StudentLoan),
            "bnpl" | "buy_now_pay_later" => Some(Self::BuyNowPayLater),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Current,
    PastDue,
    Deferred,
}

impl AccountStatus {
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "current" => Some(Self::Current),
            "past_due" => Some(Self::PastDue),
            "deferred" => Some(Self::Deferred),
            _ => None,
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let label = match self {
            Self::Current => "CURRENT",
            Self::PastDue => "PAST DUE",
            Self::Deferred => "DEFERRED",
        };
        f.write_str(label)
    }
}

/// Accounts ranked this high or higher (lower number) are highlighted in reports.
pub const HIGH_PRIORITY_THRESHOLD: u32 = 4;

/// A single debt as it appears in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtAccount {
    pub name: String,
    pub category: DebtCategory,
    pub balance: Decimal,
    /// Annual percentage rate as a fraction (0.2999 = 29.99%).
    pub apr: Decimal,
    pub minimum_payment: Decimal,
    pub due_day: u8,
    pub status: AccountStatus,
    /// Free-form detail shown next to the status, e.g. "PAST DUE - $1,204".
    pub status_note: Option<String>,
    /// Avalanche order; 1 is attacked first.
    pub priority: u32,
}

impl DebtAccount {
    pub fn is_past_due(&self) -> bool {
        self.status == AccountStatus::PastDue
    }

    pub fn is_high_priority(
        &self,
        threshold: u32,
    ) -> bool {
        self.priority <= threshold
    }

    /// The note when one was given, otherwise the bare status.
    pub fn status_label(&self) -> String {
        match &self.status_note {
            Some(note) if !note.trim().is_empty() => note.clone(),
            _ => self.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bmw() -> DebtAccount {
        DebtAccount {
            name: "BMW Financial Services".to_string(),
            category: DebtCategory::AutoLoan,
            balance: dec!(17624.30),
            apr: dec!(0.0898),
            minimum_payment: dec!(437.37),
            due_day: 4,
            status: AccountStatus::PastDue,
            status_note: Some("PAST DUE - $1,204".to_string()),
            priority: 13,
        }
    }

    #[test]
    fn category_parse_accepts_codes_and_words() {
        assert_eq!(DebtCategory::parse("credit_card"), Some(DebtCategory::CreditCard));
        assert_eq!(DebtCategory::parse("Auto Loans"), Some(DebtCategory::AutoLoan));
        assert_eq!(DebtCategory::parse("student-loan"), Some(DebtCategory::StudentLoan));
        assert_eq!(DebtCategory::parse("BNPL"), Some(DebtCategory::BuyNowPayLater));
        assert_eq!(DebtCategory::parse("mortgage"), None);
    }

    #[test]
    fn category_parse_round_trips_as_str() {
        for category in DebtCategory::ALL {
            assert_eq!(DebtCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(AccountStatus::parse("CURRENT"), Some(AccountStatus::Current));
        assert_eq!(AccountStatus::parse("past due"), Some(AccountStatus::PastDue));
        assert_eq!(AccountStatus::parse("Past_Due"), Some(AccountStatus::PastDue));
        assert_eq!(AccountStatus::parse("deferred"), Some(AccountStatus::Deferred));
        assert_eq!(AccountStatus::parse("closed"), None);
    }

    #[test]
    fn status_displays_in_upper_case() {
        assert_eq!(AccountStatus::PastDue.to_string(), "PAST DUE");
    }

    #[test]
    fn status_label_prefers_note() {
        assert_eq!(bmw().status_label(), "PAST DUE - $1,204");
    }

    #[test]
    fn status_label_falls_back_to_status() {
        let account = DebtAccount {
            status_note: Some("   ".to_string()),
            ..bmw()
        };

        assert_eq!(account.status_label(), "PAST DUE");
    }

    #[test]
    fn flags_follow_status_and_priority() {
        let account = bmw();

        assert!(account.is_past_due());
        assert!(!account.is_high_priority(4));
        assert!(account.is_high_priority(13));
    }
}
