use payoff_core::{AccountStatus, DebtAccount, DebtCategory};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// A debt account as written in a plan file or inventory CSV.
///
/// `category` and `status` are kept as text so that a bad value can be
/// reported against the account or row it came from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DebtRecord {
    pub name: String,
    pub category: String,
    pub balance: Decimal,
    pub apr: Decimal,
    pub minimum_payment: Decimal,
    pub due_day: u8,
    pub status: String,
    #[serde(default)]
    pub status_note: Option<String>,
    pub priority: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DebtRecordError {
    #[error("unrecognised category '{0}'")]
    InvalidCategory(String),

    #[error("unrecognised status '{0}'")]
    InvalidStatus(String),

    #[error("due day must be between 1 and 31, got {0}")]
    InvalidDueDay(u8),
}

impl DebtRecord {
    pub fn into_account(self) -> Result<DebtAccount, DebtRecordError> {
        let category =
            DebtCategory::parse(&self.category).ok_or(DebtRecordError::InvalidCategory(self.category))?;
        let status = AccountStatus::parse(&self.status).ok_or(DebtRecordError::InvalidStatus(self.status))?;
        if !(1..=31).contains(&self.due_day) {
            return Err(DebtRecordError::InvalidDueDay(self.due_day));
        }

        Ok(DebtAccount {
            name: self.name,
            category,
            balance: self.balance,
            apr: self.apr,
            minimum_payment: self.minimum_payment,
            due_day: self.due_day,
            status,
            status_note: self.status_note.filter(|note| !note.trim().is_empty()),
            priority: self.priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn record() -> DebtRecord {
        DebtRecord {
            name: "LendKey Student Loan".to_string(),
            category: "student_loan".to_string(),
            balance: dec!(6214.58),
            apr: dec!(0.1120),
            minimum_payment: dec!(110.69),
            due_day: 1,
            status: "past_due".to_string(),
            status_note: Some("PAST DUE - $111".to_string()),
            priority: 12,
        }
    }

    #[test]
    fn converts_valid_record() {
        let account = record().into_account().unwrap();

        assert_eq!(account.category, DebtCategory::StudentLoan);
        assert_eq!(account.status, AccountStatus::PastDue);
        assert_eq!(account.status_label(), "PAST DUE - $111");
        assert_eq!(account.balance, dec!(6214.58));
    }

    #[test]
    fn blank_note_becomes_none() {
        let record = DebtRecord {
            status_note: Some("  ".to_string()),
            ..record()
        };

        assert_eq!(record.into_account().unwrap().status_note, None);
    }

    #[test]
    fn rejects_unknown_category() {
        let record = DebtRecord {
            category: "mortgage".to_string(),
            ..record()
        };

        assert_eq!(
            record.into_account(),
            Err(DebtRecordError::InvalidCategory("mortgage".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_status() {
        let record = DebtRecord {
            status: "closed".to_string(),
            ..record()
        };

        assert_eq!(
            record.into_account(),
            Err(DebtRecordError::InvalidStatus("closed".to_string()))
        );
    }

    #[test]
    fn rejects_out_of_range_due_day() {
        let record = DebtRecord {
            due_day: 0,
            ..record()
        };

        assert_eq!(record.into_account(), Err(DebtRecordError::InvalidDueDay(0)));
    }
}
