use std::{fs, path::Path};

use super::write_atomic;
use crate::{domain::Transaction, errors::LedgerError, ledger::Ledger};

/// Serializes the ledger as a pretty JSON array, newest entry first.
pub fn export_json(ledger: &Ledger) -> Result<String, LedgerError> {
    Ok(serde_json::to_string_pretty(ledger)?)
}

/// Writes the export to disk atomically by staging to a temporary file.
pub fn write_export(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    write_atomic(path, &export_json(ledger)?)?;
    Ok(())
}

/// Reads a JSON array of transactions, rejecting entries that break the
/// title, amount or unique-id invariants.
pub fn import_json(data: &str) -> Result<Ledger, LedgerError> {
    let transactions: Vec<Transaction> = serde_json::from_str(data)?;
    Ledger::from_transactions(transactions)
}

pub fn import_file(path: &Path) -> Result<Ledger, LedgerError> {
    let data = fs::read_to_string(path)?;
    import_json(&data)
}
