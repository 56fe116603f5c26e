use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::{Record, RowSelector};
use crate::store;
use crate::ui::messages::header;
use crate::ui::render::render_record;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { position } = cmd {
        let mut remote = store::open(cfg)?;
        let dataset = remote.fetch_all()?;

        let record = Record::materialize(
            &dataset,
            RowSelector::Key {
                column: cfg.columns.primary_key(),
                value: position,
            },
        )?;

        header(format!("{} {}", cfg.columns.primary_key(), position));
        print!(
            "{}",
            render_record(record.row(), record.headers(), &cfg.columns)
        );
    }
    Ok(())
}
