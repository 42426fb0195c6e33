use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Transaction;

/// Running net outflow at the end of one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

pub struct TrendService;

impl TrendService {
    /// Cumulative net outflow, one point per distinct date in ascending order.
    ///
    /// Expenses add their amount and income subtracts it. Same-day entries are
    /// summed before the running total moves on.
    pub fn cumulative_series(transactions: &[Transaction]) -> Vec<SeriesPoint> {
        let mut per_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for txn in transactions {
            *per_date.entry(txn.date).or_insert(0.0) += txn.signed_amount();
        }

        let mut running = 0.0;
        per_date
            .into_iter()
            .map(|(date, delta)| {
                running += delta;
                SeriesPoint {
                    date,
                    value: running,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, TransactionKind};

    fn txn(kind: TransactionKind, amount: f64, day: u32) -> Transaction {
        Transaction::new(
            "entry",
            amount,
            Category::Other,
            kind,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    #[test]
    fn empty_input_has_empty_series() {
        assert!(TrendService::cumulative_series(&[]).is_empty());
    }

    #[test]
    fn accumulates_across_dates_regardless_of_input_order() {
        let txns = vec![
            txn(TransactionKind::Income, 40.0, 2),
            txn(TransactionKind::Expense, 100.0, 1),
        ];
        let series = TrendService::cumulative_series(&txns);
        assert_eq!(
            series,
            vec![
                SeriesPoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    value: 100.0
                },
                SeriesPoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                    value: 60.0
                },
            ]
        );
    }

    #[test]
    fn same_date_entries_collapse_into_one_point() {
        let txns = vec![
            txn(TransactionKind::Expense, 100.0, 3),
            txn(TransactionKind::Income, 30.0, 3),
            txn(TransactionKind::Expense, 5.0, 3),
        ];
        let series = TrendService::cumulative_series(&txns);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 75.0);
    }
}
