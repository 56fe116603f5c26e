//! SQLite-backed sheet mirror.
//!
//! Headers live in `sheet_header`, each data row is a JSON array of text
//! cells in `sheet_rows` keyed by its 1-based row number.

pub mod log;
pub mod migrate;

use super::RemoteStore;
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use migrate::run_pending_migrations;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    /// Open (and if needed initialize) the sheet at `path`.
    /// `headers` seeds the header row of a brand new sheet.
    pub fn open(path: &str, headers: Vec<String>) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))
            .map_err(|e| AppError::RemoteUnavailable(format!("{}: {}", path, e)))?;
        run_pending_migrations(&conn, &headers)?;
        Ok(Self { conn })
    }

    pub fn headers(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT name FROM sheet_header ORDER BY idx ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn decode(cells: &str) -> AppResult<Vec<String>> {
        Ok(serde_json::from_str(cells)?)
    }
}

impl RemoteStore for SqliteStore {
    fn fetch_all(&mut self) -> AppResult<Dataset> {
        let headers = self.headers()?;
        let mut stmt = self
            .conn
            .prepare_cached("SELECT cells FROM sheet_rows ORDER BY row_number ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for r in rows {
            records.push(Self::decode(&r?)?);
        }
        Ok(Dataset::from_records(headers, records))
    }

    fn fetch_row_values(&mut self, row_number: usize) -> AppResult<Vec<String>> {
        let cells: Option<String> = self
            .conn
            .query_row(
                "SELECT cells FROM sheet_rows WHERE row_number = ?1",
                params![row_number as i64],
                |row| row.get(0),
            )
            .optional()?;

        match cells {
            Some(c) => Self::decode(&c),
            None => Err(AppError::NotFound(format!("row {}", row_number))),
        }
    }

    fn write_row(&mut self, row_number: usize, values: &[String]) -> AppResult<()> {
        let cells = serde_json::to_string(values)?;
        let changed = self.conn.execute(
            "UPDATE sheet_rows SET cells = ?1 WHERE row_number = ?2",
            params![cells, row_number as i64],
        )?;

        if changed == 0 {
            return Err(AppError::NotFound(format!("row {}", row_number)));
        }
        Ok(())
    }

    fn overwrite(&mut self, dataset: &Dataset) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM sheet_header", [])?;
        tx.execute("DELETE FROM sheet_rows", [])?;

        {
            let mut hdr = tx.prepare("INSERT INTO sheet_header (idx, name) VALUES (?1, ?2)")?;
            for (i, h) in dataset.headers().iter().enumerate() {
                hdr.execute(params![i as i64, h])?;
            }

            let mut ins = tx.prepare("INSERT INTO sheet_rows (row_number, cells) VALUES (?1, ?2)")?;
            for (i, record) in dataset.to_records().iter().enumerate() {
                ins.execute(params![(i + 1) as i64, serde_json::to_string(record)?])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn record_audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::ttlog(&self.conn, operation, target, message)
    }
}
