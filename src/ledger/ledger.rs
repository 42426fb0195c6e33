use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{Transaction, TransactionDraft};
use crate::errors::LedgerError;

/// The in-memory transaction set, newest entry first.
///
/// Entries are only ever added or removed; nothing here mutates a stored
/// transaction in place.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from existing transactions, keeping their order.
    ///
    /// Rejects blank titles, non-positive or non-finite amounts and repeated
    /// ids, so delete-by-id always removes the whole entry.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Result<Self, LedgerError> {
        let mut seen = HashSet::with_capacity(transactions.len());
        for txn in &transactions {
            if txn.title.trim().is_empty() {
                return Err(LedgerError::EmptyTitle);
            }
            if !txn.amount.is_finite() || txn.amount <= 0.0 {
                return Err(LedgerError::NonPositiveAmount(txn.amount));
            }
            if !seen.insert(txn.id) {
                return Err(LedgerError::DuplicateId(txn.id));
            }
        }
        Ok(Self { transactions })
    }

    /// Inserts a transaction at the front of the list.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        debug!(%id, amount = transaction.amount, kind = %transaction.kind, "transaction added");
        self.transactions.insert(0, transaction);
        id
    }

    /// Validates a form draft and records it.
    pub fn submit(&mut self, draft: TransactionDraft) -> Result<Uuid, LedgerError> {
        let transaction = draft.into_transaction()?;
        Ok(self.add_transaction(transaction))
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Result<Transaction, LedgerError> {
        let index = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        debug!(%id, "transaction removed");
        Ok(self.transactions.remove(index))
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        debug!(count = self.transactions.len(), "ledger cleared");
        self.transactions.clear();
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
