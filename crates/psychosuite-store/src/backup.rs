//! Full-database backup export and import.
//!
//! The backup document has exactly two top-level arrays, `clients` and
//! `results`. Import validates both arrays are present and well-formed
//! before touching the store; a rejected import leaves existing data
//! untouched. Legacy camelCase records from the prototype schemas
//! deserialize through the serde aliases on the core models and come back
//! out canonical.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::info;

use psychosuite_core::models::{Client, TestResult};

use crate::db::Database;
use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub clients: Vec<Client>,
    pub results: Vec<TestResult>,
}

/// Serialize the whole store as a pretty-printed backup document.
pub fn export_backup(db: &Database) -> Result<String, StoreError> {
    let backup = Backup {
        clients: db.clients(),
        results: db.results(),
    };
    Ok(serde_json::to_string_pretty(&backup)?)
}

/// Parse and validate a backup document without touching the store.
pub fn parse_backup(json: &str) -> Result<Backup, StoreError> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| StoreError::InvalidBackup(format!("not valid JSON: {e}")))?;
    for field in ["clients", "results"] {
        if !value.get(field).is_some_and(serde_json::Value::is_array) {
            return Err(StoreError::InvalidBackup(format!(
                "missing required array: {field}"
            )));
        }
    }
    serde_json::from_value(value)
        .map_err(|e| StoreError::InvalidBackup(format!("malformed record: {e}")))
}

/// Replace the entire store with the contents of a backup document.
/// The caller is responsible for user confirmation before calling this.
pub fn import_backup(db: &Database, json: &str) -> Result<Backup, StoreError> {
    let backup = parse_backup(json)?;
    db.replace_all(backup.clients.clone(), backup.results.clone())?;
    info!(
        clients = backup.clients.len(),
        results = backup.results.len(),
        "backup imported"
    );
    Ok(backup)
}

/// Suggested file name for a backup taken on `date`.
pub fn backup_filename(date: Date) -> String {
    format!("psychosuite_backup_{date}.json")
}
