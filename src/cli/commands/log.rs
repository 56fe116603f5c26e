use crate::cli::parser::Commands;
use crate::config::{Config, StoreBackend};
use crate::errors::AppResult;
use crate::store::sqlite::SqliteStore;
use crate::store::sqlite::log::load_log;
use crate::ui::messages::{info, warning};
use crate::utils::colors::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Color for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "import" => Colour::Blue,
        "progress" => Colour::Green,
        other if other.starts_with("note") => Colour::Yellow,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Use --print to show the internal log.");
            return Ok(());
        }

        if cfg.backend != StoreBackend::Sqlite {
            warning("The audit log is only kept by the sqlite backend.");
            return Ok(());
        }

        let store = SqliteStore::open(&cfg.store, cfg.columns.headers())?;
        let entries = load_log(&store.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            let mut op_target = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                op_target.push_str(&format!(" ({})", e.target));
            }

            let visible = strip_ansi(&op_target);
            if visible.chars().count() > MAX_OP_WIDTH {
                let cut: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
                op_target = format!("{}...", cut);
            }

            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(strip_ansi(&op_target).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                op_target,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }
    }
    Ok(())
}
