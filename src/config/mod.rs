//! User preferences: default budget, savings goal and chart dimensions.
//! Owns the Config data structure plus disk helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{ChartConfig, Config};
