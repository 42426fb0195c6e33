use serde::Serialize;

use crate::domain::{Category, Transaction, TransactionKind};

/// Total amount recorded against one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryAmount {
    pub category: Category,
    pub amount: f64,
}

pub struct CategoryService;

impl CategoryService {
    /// Sums amounts per category for one kind, largest first.
    ///
    /// Categories with equal totals keep the order in which they were first
    /// seen in `transactions`.
    pub fn breakdown(transactions: &[Transaction], kind: TransactionKind) -> Vec<CategoryAmount> {
        let mut rows: Vec<CategoryAmount> = Vec::new();
        for txn in transactions.iter().filter(|txn| txn.kind == kind) {
            match rows.iter_mut().find(|row| row.category == txn.category) {
                Some(row) => row.amount += txn.amount,
                None => rows.push(CategoryAmount {
                    category: txn.category,
                    amount: txn.amount,
                }),
            }
        }
        // sort_by is stable
        rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        rows
    }
}
