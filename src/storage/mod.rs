pub mod json_backend;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    errors::{LedgerError, Result},
    ledger::{week_start_for, WeeklyLedger},
};

/// Abstraction over persistence backends capable of storing weekly ledgers.
pub trait LedgerStore {
    fn save(&self, ledger: &WeeklyLedger) -> Result<()>;
    fn load(&self, home_id: Uuid, week_start: NaiveDate) -> Result<WeeklyLedger>;
    /// Week starts stored for a home, oldest first.
    fn list_weeks(&self, home_id: Uuid) -> Result<Vec<NaiveDate>>;

    fn exists(&self, home_id: Uuid, week_start: NaiveDate) -> Result<bool> {
        Ok(self.list_weeks(home_id)?.contains(&week_start))
    }

    /// Loads the week containing `date`, creating it on first use.
    ///
    /// A new week opens with the closing balances of the most recent earlier
    /// week on record, or with zero balances when there is none.
    fn open_week(&self, home_id: Uuid, date: NaiveDate) -> Result<WeeklyLedger> {
        let week_start = week_start_for(date);
        match self.load(home_id, week_start) {
            Ok(ledger) => return Ok(ledger),
            Err(LedgerError::WeekNotFound { .. }) => {}
            Err(err) => return Err(err),
        }

        let previous = self
            .list_weeks(home_id)?
            .into_iter()
            .filter(|start| *start < week_start)
            .max();

        let ledger = match previous {
            Some(start) => {
                let prior = self.load(home_id, start)?;
                let mut seeded = prior.next_week();
                seeded.week_start = week_start;
                tracing::info!(%home_id, %week_start, from = %start, "seeded week from prior closing balances");
                seeded
            }
            None => {
                tracing::info!(%home_id, %week_start, "opened first week for home");
                WeeklyLedger::new(home_id, week_start)
            }
        };
        self.save(&ledger)?;
        Ok(ledger)
    }
}

pub use json_backend::JsonStore;
