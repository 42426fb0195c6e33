use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::chart::Viewport;
use crate::core::services::RangeSelector;
use crate::domain::{BudgetConfig, SavingsGoal, TransactionKind};

use super::ConfigError;

const APP_DIR_NAME: &str = "spendwise";

/// Stores user-configurable defaults for the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_monthly_limit")]
    pub monthly_limit: f64,
    #[serde(default)]
    pub savings_goal: SavingsGoal,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub default_range: RangeSelector,
    #[serde(default)]
    pub default_report_kind: TransactionKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            monthly_limit: Self::default_monthly_limit(),
            savings_goal: SavingsGoal::default(),
            chart: ChartConfig::default(),
            default_range: RangeSelector::default(),
            default_report_kind: TransactionKind::default(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-IN".into()
    }

    pub fn default_currency() -> String {
        "INR".into()
    }

    pub fn default_monthly_limit() -> f64 {
        BudgetConfig::default().monthly_limit
    }

    /// Budget settings after checking the stored limit.
    pub fn budget(&self) -> Result<BudgetConfig, ConfigError> {
        BudgetConfig::new(self.monthly_limit).map_err(|err| ConfigError::Invalid(err.to_string()))
    }

    /// Savings goal after checking the stored target.
    pub fn goal(&self) -> Result<SavingsGoal, ConfigError> {
        SavingsGoal::new(self.savings_goal.title.clone(), self.savings_goal.target)
            .map_err(|err| ConfigError::Invalid(err.to_string()))
    }

    /// Directory for the config file, `<config dir>/spendwise`.
    pub fn resolve_default_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }
}

/// Pixel dimensions of the trend chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "ChartConfig::default_width")]
    pub width: f64,
    #[serde(default = "ChartConfig::default_height")]
    pub height: f64,
    #[serde(default = "ChartConfig::default_padding")]
    pub padding: f64,
}

impl ChartConfig {
    pub fn default_width() -> f64 {
        800.0
    }

    pub fn default_height() -> f64 {
        300.0
    }

    pub fn default_padding() -> f64 {
        40.0
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.padding)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            padding: Self::default_padding(),
        }
    }
}
