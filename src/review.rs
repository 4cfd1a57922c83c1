//! Company-wide review of home ledgers.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    auth::AuthContext,
    errors::{LedgerError, Result},
    ledger::{Totals, WeeklyLedger},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeReviewRow {
    pub home_id: Uuid,
    pub week_start: NaiveDate,
    pub entry_count: usize,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReview {
    /// `None` when no ledgers were given.
    pub week_start: Option<NaiveDate>,
    pub rows: Vec<HomeReviewRow>,
    pub grand_total: Totals,
}

/// Rounded totals per home for one week, plus their sum.
///
/// Balances are point-in-time figures, so the ledgers must all cover the same
/// week and each home may appear only once.
pub fn company_review(auth: &AuthContext, ledgers: &[WeeklyLedger]) -> Result<CompanyReview> {
    auth.require_company_review()?;

    let week_start = ledgers.first().map(|ledger| ledger.week_start);
    let mut seen = HashSet::new();
    for ledger in ledgers {
        if Some(ledger.week_start) != week_start {
            return Err(LedgerError::InvalidInput(format!(
                "company review covers one week; got {} and {}",
                ledger.week_start,
                week_start.unwrap_or(ledger.week_start)
            )));
        }
        if !seen.insert(ledger.home_id) {
            return Err(LedgerError::InvalidInput(format!(
                "home {} appears more than once",
                ledger.home_id
            )));
        }
    }

    let mut rows: Vec<HomeReviewRow> = ledgers
        .iter()
        .map(|ledger| HomeReviewRow {
            home_id: ledger.home_id,
            week_start: ledger.week_start,
            entry_count: ledger.entries.len(),
            totals: ledger.totals().rounded(),
        })
        .collect();
    rows.sort_by_key(|row| row.home_id);

    let grand_total = rows
        .iter()
        .fold(Totals::default(), |acc, row| acc.combine(&row.totals))
        .rounded();

    tracing::debug!(homes = rows.len(), "built company review");
    Ok(CompanyReview {
        week_start,
        rows,
        grand_total,
    })
}
