#![doc(test(attr(deny(warnings))))]

//! Weekly budget ledgers for care homes: entry rules, card and petty-cash
//! totals, opening-balance rollover, and the access checks around them.

pub mod auth;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod review;
pub mod storage;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("homebudget_core tracing initialized.");
    });
}
