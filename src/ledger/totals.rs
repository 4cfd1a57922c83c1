use serde::{Deserialize, Serialize};

use super::entry::{LedgerEntry, PaymentMethod};
use crate::currency::round2;

/// Aggregate figures for one week of a home's ledger.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub card_spend: f64,
    pub cash_spend: f64,
    pub cash_withdrawn: f64,
    pub yp_in: f64,
    pub total_card_balance: f64,
    pub total_petty_cash_balance: f64,
    pub total_brought_forward: f64,
}

impl Totals {
    /// Copy with every figure rounded to two decimals for display.
    pub fn rounded(&self) -> Self {
        Self {
            card_spend: round2(self.card_spend),
            cash_spend: round2(self.cash_spend),
            cash_withdrawn: round2(self.cash_withdrawn),
            yp_in: round2(self.yp_in),
            total_card_balance: round2(self.total_card_balance),
            total_petty_cash_balance: round2(self.total_petty_cash_balance),
            total_brought_forward: round2(self.total_brought_forward),
        }
    }

    /// Field-wise sum.
    pub fn combine(&self, other: &Totals) -> Self {
        Self {
            card_spend: self.card_spend + other.card_spend,
            cash_spend: self.cash_spend + other.cash_spend,
            cash_withdrawn: self.cash_withdrawn + other.cash_withdrawn,
            yp_in: self.yp_in + other.yp_in,
            total_card_balance: self.total_card_balance + other.total_card_balance,
            total_petty_cash_balance: self.total_petty_cash_balance
                + other.total_petty_cash_balance,
            total_brought_forward: self.total_brought_forward + other.total_brought_forward,
        }
    }
}

/// Computes the week's totals from its entries and opening balances.
///
/// A withdrawal moves money from the card balance into petty cash, so it is
/// subtracted on the card side and added on the cash side. The stored
/// `method` of a withdrawal is ignored. No rounding happens here and
/// non-finite inputs propagate.
pub fn compute_totals(
    entries: &[LedgerEntry],
    cash_carried_forward: f64,
    card_carried_forward: f64,
    budget_issued: f64,
) -> Totals {
    let mut card_spend = 0.0;
    let mut cash_spend = 0.0;
    let mut cash_withdrawn = 0.0;
    let mut yp_in = 0.0;

    for entry in entries {
        if entry.is_withdrawal {
            cash_withdrawn += entry.amount;
        } else {
            match entry.method {
                PaymentMethod::Card => card_spend += entry.amount,
                PaymentMethod::Cash => cash_spend += entry.amount,
            }
        }
        yp_in += entry.yp_cash_in;
    }

    Totals {
        card_spend,
        cash_spend,
        cash_withdrawn,
        yp_in,
        total_card_balance: card_carried_forward + budget_issued - card_spend - cash_withdrawn,
        total_petty_cash_balance: cash_carried_forward + yp_in + cash_withdrawn - cash_spend,
        total_brought_forward: cash_carried_forward + card_carried_forward,
    }
}
