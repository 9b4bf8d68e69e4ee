//! CSV loader for the debt inventory.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Header names
//! are case-sensitive.
//!
//! | Column            | Required | Type    | Notes |
//! |-------------------|----------|---------|-------|
//! | `name`            | yes      | string  | |
//! | `category`        | yes      | string  | `credit_card`, `auto_loan`, `student_loan` or `bnpl` |
//! | `balance`         | yes      | decimal | e.g. `6352.18` |
//! | `apr`             | yes      | decimal | fraction, e.g. `0.2999` for 29.99% |
//! | `minimum_payment` | yes      | decimal | monthly |
//! | `due_day`         | yes      | integer | 1 to 31 |
//! | `status`          | yes      | string  | `current`, `past_due` or `deferred` |
//! | `status_note`     | no       | string  | Leave cell empty for none |
//! | `priority`        | yes      | integer | avalanche order, 1 first |
//!
//! ### Example
//!
//! ```csv
//! name,category,balance,apr,minimum_payment,due_day,status,status_note,priority
//! Best Buy Credit Card,credit_card,6352.18,0.2999,230.00,8,current,,1
//! BMW Financial Services,auto_loan,17624.30,0.0898,437.37,4,past_due,"PAST DUE - $1,204",13
//! ```
use std::path::{Path, PathBuf};

use payoff_core::DebtAccount;
use tracing::info;

use crate::debt_record::{DebtRecord, DebtRecordError};

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum InventoryCsvError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is structurally invalid, a required column is missing or a
    /// value has the wrong type.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row parsed but holds a value the inventory does not accept. `row` is
    /// 1-based, not counting the header.
    #[error("invalid debt on row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: DebtRecordError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse inventory CSV text into accounts, in file order.
///
/// # Errors
///
/// * [InventoryCsvError::Parse] if the CSV is malformed.
/// * [InventoryCsvError::InvalidRecord] if a row has an unknown category or
///   status, or a due day outside 1 to 31.
pub fn load_from_str(input: &str) -> Result<Vec<DebtAccount>, InventoryCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<DebtRecord>()
        .enumerate()
        .map(|(idx, result)| {
            let record = result?;
            record
                .into_account()
                .map_err(|source| InventoryCsvError::InvalidRecord { row: idx + 1, source })
        })
        .collect()
}

/// Read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<DebtAccount>, InventoryCsvError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InventoryCsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let accounts = load_from_str(&contents)?;
    info!(path = %path.display(), accounts = accounts.len(), "loaded debt inventory");
    Ok(accounts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
