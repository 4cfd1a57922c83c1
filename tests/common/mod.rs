#![allow(dead_code)]

use chrono::NaiveDate;
use homebudget_core::{
    ledger::{LedgerEntry, PaymentMethod},
    storage::JsonStore,
};
use tempfile::TempDir;
use uuid::Uuid;

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds a stored entry directly, bypassing the creation rules.
pub fn entry(method: PaymentMethod, amount: f64, yp_cash_in: f64, is_withdrawal: bool) -> LedgerEntry {
    LedgerEntry {
        id: Uuid::new_v4(),
        date: sample_date(2025, 1, 8),
        description: String::new(),
        method,
        amount,
        yp_cash_in,
        is_withdrawal,
    }
}

/// Creates a store in a fresh temporary directory; keep the guard alive.
pub fn temp_store() -> (TempDir, JsonStore) {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("create json store");
    (temp, store)
}
