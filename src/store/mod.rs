//! Remote tabular stores.
//!
//! Row numbers are 1-based over data rows: the row labelled `n` after a
//! fetch is row number `n + 1`.

pub mod csv_file;
pub mod memory;
pub mod sqlite;

use crate::config::{Config, StoreBackend};
use crate::errors::AppResult;
use crate::models::dataset::Dataset;

pub trait RemoteStore {
    /// Full snapshot, labels assigned 0..n in remote order.
    fn fetch_all(&mut self) -> AppResult<Dataset>;

    /// Text values of one row, ordered by the remote headers.
    fn fetch_row_values(&mut self, row_number: usize) -> AppResult<Vec<String>>;

    /// Replace the values of one existing row.
    fn write_row(&mut self, row_number: usize, values: &[String]) -> AppResult<()>;

    /// Replace the whole table (headers and rows).
    fn overwrite(&mut self, dataset: &Dataset) -> AppResult<()>;

    /// Append an audit line. Backends without an audit trail ignore it.
    fn record_audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Open the backend selected by the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn RemoteStore>> {
    let headers = cfg.columns.headers();
    match cfg.backend {
        StoreBackend::Sqlite => Ok(Box::new(sqlite::SqliteStore::open(&cfg.store, headers)?)),
        StoreBackend::Csv => Ok(Box::new(csv_file::CsvStore::open(&cfg.store, headers)?)),
    }
}
