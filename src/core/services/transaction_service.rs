//! Search, recency filtering and date grouping for the transaction list.

use std::{collections::HashMap, fmt};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Coarse recency filter applied relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeSelector {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
}

impl RangeSelector {
    pub fn days(self) -> Option<i64> {
        match self {
            RangeSelector::All => None,
            RangeSelector::Last7Days => Some(7),
            RangeSelector::Last30Days => Some(30),
        }
    }

    /// Earliest instant still inside the range.
    pub fn cutoff(self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|days| reference - Duration::days(days))
    }

    /// Whether a dated entry falls inside the range. Dates are taken at
    /// midnight UTC and compared against `reference - days`.
    pub fn contains(self, date: NaiveDate, reference: DateTime<Utc>) -> bool {
        match self.cutoff(reference) {
            None => true,
            Some(cutoff) => date.and_time(NaiveTime::MIN) >= cutoff.naive_utc(),
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(RangeSelector::All),
            "7d" | "last7days" | "last_7_days" => Some(RangeSelector::Last7Days),
            "30d" | "last30days" | "last_30_days" => Some(RangeSelector::Last30Days),
            _ => None,
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RangeSelector::All => "all",
            RangeSelector::Last7Days => "7d",
            RangeSelector::Last30Days => "30d",
        };
        f.write_str(label)
    }
}

/// Transactions sharing one calendar date, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
}

pub struct TransactionService;

impl TransactionService {
    /// Case-insensitive match of `query` against the title or category label.
    /// An empty query matches everything.
    pub fn matches_search(txn: &Transaction, query: &str) -> bool {
        let needle = query.to_lowercase();
        txn.title.to_lowercase().contains(&needle)
            || txn.category.label().to_lowercase().contains(&needle)
    }

    /// Applies search and range filters, most recent date first.
    pub fn filter_and_sort(
        transactions: &[Transaction],
        search: &str,
        range: RangeSelector,
        reference: DateTime<Utc>,
    ) -> Vec<Transaction> {
        let mut result: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| Self::matches_search(txn, search))
            .filter(|txn| range.contains(txn.date, reference))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        result
    }

    /// Buckets transactions by date. Groups appear in the order their date is
    /// first met, and members keep their input order.
    pub fn group_by_date(transactions: &[Transaction]) -> Vec<DateGroup> {
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();
        let mut groups: Vec<DateGroup> = Vec::new();
        for txn in transactions {
            let slot = *index.entry(txn.date).or_insert_with(|| {
                groups.push(DateGroup {
                    date: txn.date,
                    transactions: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].transactions.push(txn.clone());
        }
        groups
    }
}
