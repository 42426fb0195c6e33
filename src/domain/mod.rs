//! Pure data types: transactions, categories and summary settings.
//! No I/O and no derived state.

pub mod category;
pub mod settings;
pub mod transaction;

pub use category::Category;
pub use settings::{BudgetConfig, SavingsGoal};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
