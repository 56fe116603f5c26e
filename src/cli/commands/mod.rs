pub mod config;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod note;
pub mod progress;
pub mod show;
