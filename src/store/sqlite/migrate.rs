use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the header and row tables of the mirrored sheet.
fn ensure_sheet_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sheet_header (
            idx   INTEGER PRIMARY KEY,
            name  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sheet_rows (
            row_number  INTEGER PRIMARY KEY,
            cells       TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Seed the header row when the sheet has none yet.
fn ensure_headers(conn: &Connection, headers: &[String]) -> Result<()> {
    let existing: Option<i64> = conn
        .query_row("SELECT idx FROM sheet_header LIMIT 1", [], |row| row.get(0))
        .optional()?;

    if existing.is_some() {
        return Ok(());
    }

    let mut stmt = conn.prepare("INSERT INTO sheet_header (idx, name) VALUES (?1, ?2)")?;
    for (i, h) in headers.iter().enumerate() {
        stmt.execute(rusqlite::params![i as i64, h])?;
    }
    Ok(())
}

/// Idempotent schema setup, safe to run on every open.
pub fn run_pending_migrations(conn: &Connection, headers: &[String]) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_sheet_tables(conn)?;
    ensure_headers(conn, headers)?;
    Ok(())
}
