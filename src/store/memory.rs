use super::RemoteStore;
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;

/// Store kept entirely in memory. Used by tests and by callers embedding
/// the edit engine without a backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    pub audit: Vec<(String, String, String)>,
    /// When set, every operation fails as if the remote were unreachable.
    pub offline: bool,
}

impl MemoryStore {
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            headers: dataset.headers().to_vec(),
            rows: dataset.to_records(),
            audit: Vec::new(),
            offline: false,
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn online(&self) -> AppResult<()> {
        if self.offline {
            return Err(AppError::RemoteUnavailable("memory store is offline".into()));
        }
        Ok(())
    }

    fn slot(&mut self, row_number: usize) -> AppResult<&mut Vec<String>> {
        row_number
            .checked_sub(1)
            .and_then(|i| self.rows.get_mut(i))
            .ok_or_else(|| AppError::NotFound(format!("row {}", row_number)))
    }
}

impl RemoteStore for MemoryStore {
    fn fetch_all(&mut self) -> AppResult<Dataset> {
        self.online()?;
        Ok(Dataset::from_records(self.headers.clone(), self.rows.clone()))
    }

    fn fetch_row_values(&mut self, row_number: usize) -> AppResult<Vec<String>> {
        self.online()?;
        self.slot(row_number).map(|r| r.clone())
    }

    fn write_row(&mut self, row_number: usize, values: &[String]) -> AppResult<()> {
        self.online()?;
        *self.slot(row_number)? = values.to_vec();
        Ok(())
    }

    fn overwrite(&mut self, dataset: &Dataset) -> AppResult<()> {
        self.online()?;
        self.headers = dataset.headers().to_vec();
        self.rows = dataset.to_records();
        Ok(())
    }

    fn record_audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.audit
            .push((operation.into(), target.into(), message.into()));
        Ok(())
    }
}
