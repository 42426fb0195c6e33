//! Ledger entries and the form boundary that produces them.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::errors::LedgerError;

/// Direction of money movement. The stored amount is always positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

impl TransactionKind {
    /// Contribution of `amount` to the net outflow: expenses add, income subtracts.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Expense => amount,
            TransactionKind::Income => -amount,
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" | "debit" => Some(TransactionKind::Expense),
            "income" | "credit" => Some(TransactionKind::Income),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        };
        f.write_str(label)
    }
}

/// A recorded income or expense. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl Transaction {
    /// Builds a transaction with a fresh identifier.
    ///
    /// Callers are expected to have validated `title` and `amount`; use
    /// [`TransactionDraft::into_transaction`] for unchecked user input.
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: Category,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            category,
            kind,
            date,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Expense amounts count positive, income amounts negative.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }
}

/// Raw values captured by the entry form before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: String,
    pub category: Category,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            category,
            kind,
            date,
        }
    }

    /// Validates the draft and turns it into a transaction with a new id.
    pub fn into_transaction(self) -> Result<Transaction, LedgerError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LedgerError::EmptyTitle);
        }
        let raw = self.amount.trim();
        let amount: f64 = raw
            .parse()
            .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))?;
        if !amount.is_finite() {
            return Err(LedgerError::InvalidAmount(raw.to_string()));
        }
        if amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        Ok(Transaction::new(
            title,
            amount,
            self.category,
            self.kind,
            self.date,
        ))
    }
}
