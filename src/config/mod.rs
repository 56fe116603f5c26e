use crate::core::commit::WriteMode;
use crate::errors::{AppError, AppResult};
use crate::models::schema::ColumnSchema;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Storage backend holding the mirrored sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default)]
    pub write_mode: WriteMode,
    /// Keep note text after a leading placeholder when clearing notes.
    #[serde(default)]
    pub nodestroy: bool,
    #[serde(default)]
    pub columns: ColumnSchema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            backend: StoreBackend::default(),
            write_mode: WriteMode::default(),
            nodestroy: false,
            columns: ColumnSchema::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("rtracker")
        } else {
            base.join(".rtracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtracker.conf")
    }

    /// Return the default path of the SQLite sheet mirror
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("rtracker.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Column names must be non-empty and distinct.
    pub fn validate(&self) -> AppResult<()> {
        let headers = self.columns.headers();
        for (i, h) in headers.iter().enumerate() {
            if h.trim().is_empty() {
                return Err(AppError::Config("column names cannot be empty".into()));
            }
            if headers[..i].contains(h) {
                return Err(AppError::Config(format!("column '{}' is mapped twice", h)));
            }
        }
        Ok(())
    }

    /// Write this configuration to the standard config file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
