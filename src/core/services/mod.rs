pub mod category_service;
pub mod summary_service;
pub mod transaction_service;
pub mod trend_service;

pub use category_service::{CategoryAmount, CategoryService};
pub use summary_service::{
    AggregateView, BalanceStatus, SummaryService, Totals, ViewFilter, BUDGET_WARNING_PERCENT,
};
pub use transaction_service::{DateGroup, RangeSelector, TransactionService};
pub use trend_service::{SeriesPoint, TrendService};
