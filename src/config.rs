// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SheetError};
use crate::ingest::IngestOptions;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub ingest: IngestConfig,
    pub library: LibraryConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    pub default_series: u32,
    pub default_repetitions: String,
    /// Upper bound on rows accepted per import; 0 means unlimited.
    pub max_rows: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    pub root_dir: PathBuf,
    pub exercises_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub pretty: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TREINO_SHEETS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SheetError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SheetError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            ingest: IngestConfig {
                default_series: 1,
                default_repetitions: "10".to_string(),
                max_rows: 0,
            },
            library: LibraryConfig {
                root_dir: PathBuf::from("data/sheets"),
                exercises_file: PathBuf::from("data/exercises.json"),
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                pretty: true,
            },
        }
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            default_series: self.ingest.default_series,
            default_repetitions: self.ingest.default_repetitions.clone(),
            max_rows: self.ingest.max_rows,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.ingest.default_series == 0 {
            return Err(SheetError::Config(
                "default_series must be greater than 0".to_string(),
            ));
        }

        if self.ingest.default_repetitions.trim().is_empty() {
            return Err(SheetError::Config(
                "default_repetitions must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.ingest_options().default_repetitions, "10");
    }

    #[test]
    fn test_zero_series_rejected() {
        let mut config = Config::default_config();
        config.ingest.default_series = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_repetitions_rejected() {
        let mut config = Config::default_config();
        config.ingest.default_repetitions = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
