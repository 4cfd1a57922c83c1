use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, Result};

/// How a ledger line was paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
}

/// A single line in a home's weekly ledger.
///
/// Entries are built through [`EntryDraft::build`], which applies the
/// withdrawal rules once at creation time. Values read back from storage are
/// trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub method: PaymentMethod,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub yp_cash_in: f64,
    #[serde(default)]
    pub is_withdrawal: bool,
}

impl LedgerEntry {
    /// Withdrawals always behave as card movements.
    pub fn effective_method(&self) -> PaymentMethod {
        if self.is_withdrawal {
            PaymentMethod::Card
        } else {
            self.method
        }
    }
}

/// Caller-side values for a new entry, before the creation rules run.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub description: String,
    pub method: PaymentMethod,
    pub amount: f64,
    pub yp_cash_in: f64,
    pub is_withdrawal: bool,
}

impl EntryDraft {
    pub fn card(date: NaiveDate, amount: f64) -> Self {
        Self::spend(date, PaymentMethod::Card, amount)
    }

    pub fn cash(date: NaiveDate, amount: f64) -> Self {
        Self::spend(date, PaymentMethod::Cash, amount)
    }

    pub fn withdrawal(date: NaiveDate, amount: f64) -> Self {
        Self {
            is_withdrawal: true,
            ..Self::spend(date, PaymentMethod::Card, amount)
        }
    }

    fn spend(date: NaiveDate, method: PaymentMethod, amount: f64) -> Self {
        Self {
            date,
            description: String::new(),
            method,
            amount,
            yp_cash_in: 0.0,
            is_withdrawal: false,
        }
    }

    pub fn with_yp_cash_in(mut self, yp_cash_in: f64) -> Self {
        self.yp_cash_in = yp_cash_in;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validates the draft and produces a stored entry.
    ///
    /// A withdrawal is forced to `Card` with no young-person cash attached.
    pub fn build(self) -> Result<LedgerEntry> {
        check_amount("amount", self.amount)?;
        check_amount("yp_cash_in", self.yp_cash_in)?;

        let (method, yp_cash_in) = if self.is_withdrawal {
            (PaymentMethod::Card, 0.0)
        } else {
            (self.method, self.yp_cash_in)
        };

        Ok(LedgerEntry {
            id: Uuid::new_v4(),
            date: self.date,
            description: self.description.trim().to_string(),
            method,
            amount: self.amount,
            yp_cash_in,
            is_withdrawal: self.is_withdrawal,
        })
    }
}

pub(crate) fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LedgerError::InvalidInput(format!(
            "{field} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(LedgerError::InvalidInput(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    Ok(())
}
