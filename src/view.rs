//! Page-level state for screens that show a home's ledger.

use serde::Serialize;

use crate::{
    auth::AuthContext,
    errors::Result,
    ledger::{Totals, WeeklyLedger},
};

/// What a screen can show at any moment.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    SignedOut,
    Ready(T),
}

impl<T> ViewState<T> {
    /// Signed-out callers never reach the loader.
    pub fn resolve<F>(auth: Option<&AuthContext>, load: F) -> Result<Self>
    where
        F: FnOnce(&AuthContext) -> Result<T>,
    {
        match auth {
            None => Ok(Self::SignedOut),
            Some(auth) => load(auth).map(Self::Ready),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> ViewState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Loading => ViewState::Loading,
            Self::SignedOut => ViewState::SignedOut,
            Self::Ready(value) => ViewState::Ready(f(value)),
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// Payload of the home budget screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeBudgetView {
    pub ledger: WeeklyLedger,
    pub totals: Totals,
    pub can_edit: bool,
}

impl HomeBudgetView {
    pub fn build(auth: &AuthContext, ledger: WeeklyLedger) -> Result<Self> {
        auth.require_home_view(ledger.home_id)?;
        let can_edit = auth.require_ledger_write(ledger.home_id).is_ok();
        let totals = ledger.totals().rounded();
        Ok(Self {
            ledger,
            totals,
            can_edit,
        })
    }
}
