//! Read-only inputs that tune the summary cards.

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Monthly spending ceiling used by the budget progress card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetConfig {
    pub monthly_limit: f64,
}

impl BudgetConfig {
    pub fn new(monthly_limit: f64) -> Result<Self, LedgerError> {
        Ok(Self {
            monthly_limit: non_negative(monthly_limit)?,
        })
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            monthly_limit: 50_000.0,
        }
    }
}

/// Named savings target tracked against net savings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub title: String,
    pub target: f64,
}

impl SavingsGoal {
    pub fn new(title: impl Into<String>, target: f64) -> Result<Self, LedgerError> {
        Ok(Self {
            title: title.into(),
            target: non_negative(target)?,
        })
    }
}

impl Default for SavingsGoal {
    fn default() -> Self {
        Self {
            title: "New Car".into(),
            target: 100_000.0,
        }
    }
}

fn non_negative(value: f64) -> Result<f64, LedgerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LedgerError::InvalidTarget(value))
    }
}
