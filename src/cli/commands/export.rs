use crate::cli::parser::{Commands, ExportFormat};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use crate::store::{self, csv_file::write_csv};
use crate::ui::messages::{cancelled, success, warning};
use crate::ui::prompt::Prompter;
use crate::utils::path::expand_tilde;
use serde_json::{Map, Value};
use std::path::Path;

/// Whether `path` may be written: missing, forced, or confirmed.
fn ensure_writable(path: &Path, force: bool, prompter: &mut dyn Prompter) -> bool {
    if !path.exists() || force {
        return true;
    }
    warning(format!("The file '{}' already exists.", path.display()));
    prompter.confirm("Overwrite?")
}

/// Rows as JSON objects keyed by column name, in header order.
fn to_json(dataset: &Dataset) -> Value {
    let rows = dataset
        .rows()
        .iter()
        .map(|r| {
            let obj: Map<String, Value> = dataset
                .headers()
                .iter()
                .map(|h| {
                    let v = r.row.get(h).map(|s| Value::String(s.to_string()));
                    (h.clone(), v.unwrap_or(Value::Null))
                })
                .collect();
            Value::Object(obj)
        })
        .collect();
    Value::Array(rows)
}

pub fn handle(cmd: &Commands, cfg: &Config, prompter: &mut dyn Prompter) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = expand_tilde(file);

        if !ensure_writable(&path, *force, prompter) {
            cancelled("Export cancelled: existing file not overwritten.");
            return Ok(());
        }

        let mut remote = store::open(cfg)?;
        let dataset = remote.fetch_all()?;

        match format {
            ExportFormat::Csv => write_csv(&path, dataset.headers(), &dataset.to_records())?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&to_json(&dataset))?;
                std::fs::write(&path, json)
                    .map_err(|e| AppError::Export(format!("{}: {}", path.display(), e)))?;
            }
        }

        success(format!(
            "Exported {} row(s) to {}",
            dataset.len(),
            path.display()
        ));
    }
    Ok(())
}
