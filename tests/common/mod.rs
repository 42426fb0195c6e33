#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use spendwise_core::{
    domain::{Category, Transaction, TransactionKind},
    ledger::Ledger,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Reference instant used by range filters in tests.
pub fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0)
        .single()
        .expect("valid instant")
}

pub fn expense(title: &str, amount: f64, category: Category, on: NaiveDate) -> Transaction {
    Transaction::new(title, amount, category, TransactionKind::Expense, on)
}

pub fn income(title: &str, amount: f64, category: Category, on: NaiveDate) -> Transaction {
    Transaction::new(title, amount, category, TransactionKind::Income, on)
}

/// A month of mixed entries, listed newest first the way the ledger keeps them.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        expense("Groceries", 1200.0, Category::Food, date(2024, 1, 30)),
        expense("Metro card", 500.0, Category::Transport, date(2024, 1, 28)),
        income("Freelance", 8000.0, Category::Other, date(2024, 1, 26)),
        expense("Dinner out", 900.0, Category::Food, date(2024, 1, 20)),
        expense("Rent", 15000.0, Category::Housing, date(2024, 1, 5)),
        income("Salary", 60000.0, Category::Salary, date(2024, 1, 1)),
        expense("Cinema", 400.0, Category::Entertainment, date(2024, 1, 1)),
    ]
}

pub fn sample_ledger() -> Ledger {
    Ledger::from_transactions(sample_transactions()).expect("valid fixture")
}
