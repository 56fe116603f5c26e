use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use crate::store::{self, csv_file::read_csv};
use crate::ui::messages::{cancelled, success, warning};
use crate::ui::prompt::Prompter;
use crate::utils::path::expand_tilde;

/// Replace the store content with the rows of a CSV file.
pub fn handle(cmd: &Commands, cfg: &Config, prompter: &mut dyn Prompter) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let (headers, records) = read_csv(&path)?;

        let key = cfg.columns.primary_key();
        if !headers.iter().any(|h| h == key) {
            return Err(AppError::Validation(format!(
                "{} has no '{}' column",
                path.display(),
                key
            )));
        }

        let missing: Vec<String> = cfg
            .columns
            .headers()
            .into_iter()
            .filter(|h| !headers.contains(h))
            .collect();
        if !missing.is_empty() {
            warning(format!("Columns missing from the file: {}", missing.join(", ")));
        }

        let dataset = Dataset::from_records(headers, records);

        if !prompter.confirm(&format!(
            "Replace the store content with {} row(s) from {}?",
            dataset.len(),
            path.display()
        )) {
            cancelled("Import cancelled, store untouched.");
            return Ok(());
        }

        let mut remote = store::open(cfg)?;
        remote.overwrite(&dataset)?;
        remote.record_audit(
            "import",
            &path.display().to_string(),
            &format!("{} rows imported", dataset.len()),
        )?;

        success(format!("Imported {} row(s).", dataset.len()));
    }
    Ok(())
}
