//! Configuration file support for failing-assets.
//!
//! Provides YAML-based configuration through `failing-assets.config.yml`
//! files, and the merge of command-line options, file values and defaults
//! into the effective [`Settings`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use failing_assets::adapters::outbound::network::DagsterGraphQlClient;
use failing_assets::application::dto::ReportFormat;
use failing_assets::application::use_cases::{DEFAULT_MAX_ATTEMPTS, MAX_BATCH_SIZE};
use failing_assets::shared::error::AssetError;
use failing_assets::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use failing_assets::shared::Result;

pub const CONFIG_FILENAME: &str = "failing-assets.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub ui_base_url: Option<String>,
    pub format: Option<String>,
    pub batch_size: Option<usize>,
    pub max_attempts: Option<u32>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).map_err(|e| {
        AssetError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes to unit, not to a map
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        format
            .parse::<ReportFormat>()
            .map_err(|message| AssetError::Validation { message })?;
    }
    if let Some(batch_size) = config.batch_size {
        validate_batch_size(batch_size)?;
    }
    if config.max_attempts == Some(0) {
        bail!(
            "Invalid config: max_attempts must be at least 1.\n\n\
             💡 Hint: Use 1 to disable retries."
        );
    }
    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be at least 1.");
    }
    for (name, value) in [
        ("endpoint", &config.endpoint),
        ("ui_base_url", &config.ui_base_url),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!("Invalid config: {} must not be empty.", name);
        }
    }
    Ok(())
}

fn validate_batch_size(batch_size: usize) -> Result<()> {
    if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
        return Err(AssetError::Validation {
            message: format!(
                "batch_size must be between 1 and {}, got {}",
                MAX_BATCH_SIZE, batch_size
            ),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings after merging CLI options, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub ui_base_url: Option<String>,
    pub format: ReportFormat,
    pub batch_size: usize,
    pub max_attempts: u32,
    pub timeout: Duration,
    pub output: Option<PathBuf>,
    pub fail_on_failing: bool,
}

impl Settings {
    /// Command-line options win over config values, which win over defaults
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => name
                .parse::<ReportFormat>()
                .map_err(|message| AssetError::Validation { message })?,
            (None, None) => ReportFormat::default(),
        };

        let batch_size = args
            .batch_size
            .or(config.batch_size)
            .unwrap_or(MAX_BATCH_SIZE);
        validate_batch_size(batch_size)?;

        Ok(Self {
            endpoint: args
                .url
                .clone()
                .or(config.endpoint)
                .unwrap_or_else(|| DagsterGraphQlClient::DEFAULT_ENDPOINT.to_string()),
            ui_base_url: args.ui_url.clone().or(config.ui_base_url),
            format,
            batch_size,
            max_attempts: config.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            timeout: Duration::from_secs(
                config
                    .timeout_secs
                    .unwrap_or(DagsterGraphQlClient::DEFAULT_TIMEOUT_SECONDS),
            ),
            output: args.output.clone(),
            fail_on_failing: args.fail_on_failing,
        })
    }
}

/// Loads the config named by `-c`, or discovers one in the current directory
pub fn load_for_args(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config {
        Some(ref path) => load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            discover_config(&cwd)
        }
    }
}
