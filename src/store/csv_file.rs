use super::RemoteStore;
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use csv::{ReaderBuilder, Writer};
use std::path::{Path, PathBuf};

/// Sheet stored as a CSV file with a header line.
/// Every write rewrites the whole file.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open the file at `path`, creating it with `headers` when missing.
    pub fn open(path: &str, headers: Vec<String>) -> AppResult<Self> {
        let store = Self {
            path: PathBuf::from(path),
        };
        if !store.path.exists() {
            write_csv(&store.path, &headers, &[])?;
        }
        Ok(store)
    }

    fn read(&self) -> AppResult<(Vec<String>, Vec<Vec<String>>)> {
        read_csv(&self.path).map_err(|e| match e {
            AppError::Csv(err) if err.is_io_error() => AppError::RemoteUnavailable(format!(
                "{}: {}",
                self.path.display(),
                err
            )),
            other => other,
        })
    }
}

/// Header line and records of a CSV file.
pub fn read_csv(path: &Path) -> AppResult<(Vec<String>, Vec<Vec<String>>)> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = rdr.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for rec in rdr.records() {
        records.push(rec?.iter().map(str::to_string).collect());
    }
    Ok((headers, records))
}

pub fn write_csv(path: &Path, headers: &[String], records: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(headers)?;
    for r in records {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

impl RemoteStore for CsvStore {
    fn fetch_all(&mut self) -> AppResult<Dataset> {
        let (headers, records) = self.read()?;
        Ok(Dataset::from_records(headers, records))
    }

    fn fetch_row_values(&mut self, row_number: usize) -> AppResult<Vec<String>> {
        let (_, records) = self.read()?;
        row_number
            .checked_sub(1)
            .and_then(|i| records.get(i).cloned())
            .ok_or_else(|| AppError::NotFound(format!("row {}", row_number)))
    }

    fn write_row(&mut self, row_number: usize, values: &[String]) -> AppResult<()> {
        let (headers, mut records) = self.read()?;
        let slot = row_number
            .checked_sub(1)
            .and_then(|i| records.get_mut(i))
            .ok_or_else(|| AppError::NotFound(format!("row {}", row_number)))?;
        *slot = values.to_vec();
        write_csv(&self.path, &headers, &records)
    }

    fn overwrite(&mut self, dataset: &Dataset) -> AppResult<()> {
        write_csv(&self.path, dataset.headers(), &dataset.to_records())
    }
}
