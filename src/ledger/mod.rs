//! Weekly home ledger: entries, totals and opening-balance rollover.

pub mod entry;
pub mod totals;
pub mod week;

pub use entry::{EntryDraft, LedgerEntry, PaymentMethod};
pub use totals::{compute_totals, Totals};
pub use week::{week_start_for, WeeklyLedger};
