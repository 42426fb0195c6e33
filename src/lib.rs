#![doc(test(attr(deny(warnings))))]

//! SpendWise Core turns a list of dated income and expense entries into
//! summary figures, a cumulative trend curve and a category pie chart.
//!
//! Aggregation lives in [`core::services`], plane geometry in [`chart`], and
//! [`state::AppState`] ties them to a single owned transaction set.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod state;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SpendWise Core tracing initialized.");
    });
}
