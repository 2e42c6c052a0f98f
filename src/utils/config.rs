// Configuration utilities
// Author: Gabriel Demetrios Lafis

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::processing::PipelineDefinition;
use super::{AppError, AppResult};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pipeline: Option<PipelineDefinition>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            _ => Err(AppError::Config(format!(
                "Unsupported config file format: {}",
                path.display()
            ))),
        }
    }

    /// Parse configuration from a JSON document
    pub fn from_json(contents: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(contents: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Get the log level filter
    pub fn log_level_filter(&self) -> log::LevelFilter {
        parse_level(&self.logging.level)
    }
}

/// Map a level name to a filter, defaulting to `Warn`
pub fn parse_level(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    }
}
