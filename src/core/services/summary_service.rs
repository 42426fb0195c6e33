//! Totals, progress percentages and the combined summary view.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::trace;

use crate::domain::{BudgetConfig, SavingsGoal, Transaction, TransactionKind};

use super::{
    CategoryAmount, CategoryService, DateGroup, RangeSelector, SeriesPoint, TransactionService,
    TrendService,
};

/// Budget usage above this percentage is flagged on the budget card.
pub const BUDGET_WARNING_PERCENT: f64 = 90.0;

/// Income and expense sums for a transaction set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    /// Sum for one kind; the divisor used by the pie chart.
    pub fn for_kind(&self, kind: TransactionKind) -> f64 {
        match kind {
            TransactionKind::Expense => self.expense,
            TransactionKind::Income => self.income,
        }
    }
}

/// Label attached to the net balance card. A negative balance is a surplus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BalanceStatus {
    Surplus,
    Deficit,
}

/// Filters that shape the list and report portions of an [`AggregateView`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFilter {
    pub search: String,
    pub range: RangeSelector,
    pub report_kind: TransactionKind,
}

/// Everything the summary cards, report and list need, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateView {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
    pub balance_status: BalanceStatus,
    pub net_savings: f64,
    pub goal_progress_percent: f64,
    pub budget_progress_percent: f64,
    pub budget_remaining: f64,
    pub budget_warning: bool,
    pub report_kind: TransactionKind,
    pub category_breakdown: Vec<CategoryAmount>,
    pub cumulative_series: Vec<SeriesPoint>,
    pub visible: Vec<Transaction>,
    pub grouped: Vec<DateGroup>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals(transactions: &[Transaction]) -> Totals {
        transactions
            .iter()
            .fold(Totals::default(), |mut totals, txn| {
                match txn.kind {
                    TransactionKind::Income => totals.income += txn.amount,
                    TransactionKind::Expense => totals.expense += txn.amount,
                }
                totals
            })
    }

    /// `expense - income`; positive means spending exceeded income.
    pub fn net_balance(totals: &Totals) -> f64 {
        totals.expense - totals.income
    }

    /// `income - expense`, floored at zero.
    pub fn net_savings(totals: &Totals) -> f64 {
        (totals.income - totals.expense).max(0.0)
    }

    pub fn balance_status(net_balance: f64) -> BalanceStatus {
        if net_balance < 0.0 {
            BalanceStatus::Surplus
        } else {
            BalanceStatus::Deficit
        }
    }

    pub fn goal_progress_percent(net_savings: f64, goal_target: f64) -> f64 {
        capped_percent(net_savings, goal_target)
    }

    pub fn budget_progress_percent(total_expense: f64, monthly_limit: f64) -> f64 {
        capped_percent(total_expense, monthly_limit)
    }

    pub fn budget_remaining(total_expense: f64, monthly_limit: f64) -> f64 {
        (monthly_limit - total_expense).max(0.0)
    }

    /// Derives the full summary for one snapshot of inputs.
    pub fn aggregate(
        transactions: &[Transaction],
        budget: &BudgetConfig,
        goal: &SavingsGoal,
        filter: &ViewFilter,
        reference: DateTime<Utc>,
    ) -> AggregateView {
        let totals = Self::totals(transactions);
        let net_balance = Self::net_balance(&totals);
        let net_savings = Self::net_savings(&totals);
        let budget_progress_percent =
            Self::budget_progress_percent(totals.expense, budget.monthly_limit);
        let visible =
            TransactionService::filter_and_sort(transactions, &filter.search, filter.range, reference);
        let grouped = TransactionService::group_by_date(&visible);

        AggregateView {
            total_income: totals.income,
            total_expense: totals.expense,
            net_balance,
            balance_status: Self::balance_status(net_balance),
            net_savings,
            goal_progress_percent: Self::goal_progress_percent(net_savings, goal.target),
            budget_progress_percent,
            budget_remaining: Self::budget_remaining(totals.expense, budget.monthly_limit),
            budget_warning: budget_progress_percent > BUDGET_WARNING_PERCENT,
            report_kind: filter.report_kind,
            category_breakdown: CategoryService::breakdown(transactions, filter.report_kind),
            cumulative_series: TrendService::cumulative_series(transactions),
            visible,
            grouped,
        }
    }
}

// A zero (or negative) denominator yields 0 rather than an infinite ratio.
fn capped_percent(value: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        (value / denominator * 100.0).min(100.0)
    } else {
        trace!(value, denominator, "non-positive target, progress reported as 0");
        0.0
    }
}
