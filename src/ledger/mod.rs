//! The owned transaction set and its create/delete operations.

#[allow(clippy::module_inception)]
pub mod ledger;

pub use ledger::Ledger;
