use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::schema::Field;
use crate::models::status::ProgressState;
use crate::store;
use crate::ui::messages::{header, info};
use crate::ui::render::render_dataset;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { tier, progress } = cmd {
        let wanted_progress = match progress {
            Some(p) => Some(ProgressState::parse(p).ok_or_else(|| {
                AppError::Validation(format!(
                    "unknown status '{}' (expected one of {})",
                    p,
                    ProgressState::labels().join(", ")
                ))
            })?),
            None => None,
        };

        let mut remote = store::open(cfg)?;
        let mut dataset = remote.fetch_all()?;

        if let Some(t) = tier {
            dataset = dataset.filter_eq(cfg.columns.column(Field::Tier), t);
        }

        if let Some(p) = wanted_progress {
            let col = cfg.columns.column(Field::Progress);
            dataset = dataset.filter(|r| r.get(col).and_then(ProgressState::parse) == Some(p));
        }

        if dataset.is_empty() {
            info("No rows match.");
            return Ok(());
        }

        header(format!("{} row(s)", dataset.len()));
        print!("{}", render_dataset(&dataset, &cfg.columns));
    }
    Ok(())
}
