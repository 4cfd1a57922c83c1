use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    entry::{check_amount, LedgerEntry},
    totals::{compute_totals, Totals},
};
use crate::{
    currency::round2,
    errors::{LedgerError, Result},
};

/// Monday of the ISO week containing `date`.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// One home's budget ledger for one ISO week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyLedger {
    pub home_id: Uuid,
    pub week_start: NaiveDate,
    #[serde(default)]
    pub cash_carried_forward: f64,
    #[serde(default)]
    pub card_carried_forward: f64,
    #[serde(default)]
    pub budget_issued: f64,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
}

impl WeeklyLedger {
    pub fn new(home_id: Uuid, date: NaiveDate) -> Self {
        Self {
            home_id,
            week_start: week_start_for(date),
            cash_carried_forward: 0.0,
            card_carried_forward: 0.0,
            budget_issued: 0.0,
            entries: Vec::new(),
        }
    }

    pub fn with_opening(mut self, cash_carried_forward: f64, card_carried_forward: f64) -> Self {
        self.cash_carried_forward = cash_carried_forward;
        self.card_carried_forward = card_carried_forward;
        self
    }

    pub fn with_budget_issued(mut self, budget_issued: f64) -> Self {
        self.budget_issued = budget_issued;
        self
    }

    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Duration::days(6)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end()
    }

    /// Rejects entries dated outside this week.
    pub fn add_entry(&mut self, entry: LedgerEntry) -> Result<Uuid> {
        if !self.contains(entry.date) {
            return Err(LedgerError::InvalidInput(format!(
                "entry dated {} is outside the week {}..={}",
                entry.date,
                self.week_start,
                self.week_end()
            )));
        }
        let id = entry.id;
        self.entries.push(entry);
        Ok(id)
    }

    pub fn set_budget_issued(&mut self, budget_issued: f64) -> Result<()> {
        check_amount("budget_issued", budget_issued)?;
        self.budget_issued = budget_issued;
        Ok(())
    }

    /// Every stored figure must be finite; JSON has no NaN or infinity.
    pub fn ensure_finite(&self) -> Result<()> {
        let opening = [
            ("cash_carried_forward", self.cash_carried_forward),
            ("card_carried_forward", self.card_carried_forward),
            ("budget_issued", self.budget_issued),
        ];
        let entries = self.entries.iter().flat_map(|entry| {
            [
                ("amount", entry.amount),
                ("yp_cash_in", entry.yp_cash_in),
            ]
        });
        match opening.into_iter().chain(entries).find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(LedgerError::InvalidInput(format!(
                "{field} must be a finite number (got {value})"
            ))),
            None => Ok(()),
        }
    }

    pub fn remove_entry(&mut self, id: Uuid) -> Result<LedgerEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(LedgerError::EntryNotFound(id))?;
        Ok(self.entries.remove(index))
    }

    /// Entries ordered by date; same-day entries keep insertion order.
    pub fn entries_sorted(&self) -> Vec<&LedgerEntry> {
        let mut sorted: Vec<&LedgerEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|entry| entry.date);
        sorted
    }

    pub fn totals(&self) -> Totals {
        compute_totals(
            &self.entries,
            self.cash_carried_forward,
            self.card_carried_forward,
            self.budget_issued,
        )
    }

    /// The following week, opened with this week's closing balances.
    pub fn next_week(&self) -> WeeklyLedger {
        let totals = self.totals();
        WeeklyLedger {
            home_id: self.home_id,
            week_start: self.week_start + Duration::days(7),
            cash_carried_forward: round2(totals.total_petty_cash_balance),
            card_carried_forward: round2(totals.total_card_balance),
            budget_issued: 0.0,
            entries: Vec::new(),
        }
    }
}
