//! Aggregation engine: stateless services over a transaction snapshot.

pub mod services;
pub mod time;

pub use time::{Clock, FixedClock, SystemClock};
