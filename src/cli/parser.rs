use crate::config::StoreBackend;
use crate::core::commit::WriteMode;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rTracker
#[derive(Parser)]
#[command(
    name = "rtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse and edit project-tracking rows mirrored to a tabular store",
    long_about = None
)]
pub struct Cli {
    /// Override the store path (useful for tests or a custom sheet)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Override the store backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<StoreBackend>,

    /// Override the write-back mode used when saving an edit
    #[arg(global = true, long = "mode", value_enum)]
    pub mode: Option<WriteMode>,

    /// Answer yes to every confirmation (non-interactive)
    #[arg(global = true, long = "yes", short = 'y')]
    pub yes: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a note (appends when the row already has notes)
    Add {
        /// Note text
        text: String,
    },
    /// Append to existing notes, optionally revising the text
    Update {
        /// Note text
        text: String,
    },
    /// Clear the notes of the row
    Delete {
        /// Only strip the leading "Add a note" placeholder, keep the rest
        #[arg(long = "nodestroy")]
        nodestroy: bool,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the rows of the sheet
    List {
        /// Only rows of this tier
        #[arg(long)]
        tier: Option<String>,

        /// Only rows with this progress status (ToDo, WIP, Done, Missed)
        #[arg(long)]
        progress: Option<String>,
    },

    /// Show a single row
    Show {
        /// Value of the Position column
        position: String,
    },

    /// Add, update or delete the notes of a row
    Note {
        /// Value of the Position column
        position: String,

        #[command(subcommand)]
        action: NoteAction,
    },

    /// Set the progress status of a row (DoD follows)
    Progress {
        /// Value of the Position column
        position: String,

        /// New status: ToDo, WIP, Done or Missed
        status: String,
    },

    /// Replace the store content with a CSV file
    Import {
        /// CSV file with a header line
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the sheet
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
