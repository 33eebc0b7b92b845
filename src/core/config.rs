//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.easel/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolving happen before the file logger exists (the log file
//! path is itself a setting), so they do not log directly. Anything worth
//! logging is collected as a [`ConfigNote`] and written out by `main` once
//! the logger is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::currency::CurrencyFormat;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EaselConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_file: Option<String>,
    pub link_base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CurrencyConfig {
    pub locale: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_FILE: &str = "db_products.csv";
pub const DEFAULT_LINK_BASE_URL: &str = "https://shop.example.com/products/";
pub const DEFAULT_LOCALE: &str = "sv_SE";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Deferred Log Messages
// ============================================================================

/// A log line produced while the config was being read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNote {
    pub level: Level,
    pub message: String,
}

impl ConfigNote {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// The parsed config file plus what happened while finding it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: EaselConfig,
    pub notes: Vec<ConfigNote>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub link_base_url: String,
    pub currency: CurrencyFormat,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub notes: Vec<ConfigNote>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

fn easel_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".easel"))
}

/// Returns the path to `~/.easel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    easel_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.easel/config.toml`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: EaselConfig::default(),
            notes: vec![ConfigNote::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            )],
        }),
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EaselConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let mut notes = Vec::new();

    if !path.exists() {
        notes.push(ConfigNote::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        ));
        generate_default_config(path, &mut notes);
        return Ok(LoadedConfig {
            config: EaselConfig::default(),
            notes,
        });
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    notes.push(ConfigNote::new(
        Level::Info,
        format!("Loaded config from {}", path.display()),
    ));
    notes.push(ConfigNote::new(Level::Debug, format!("Config: {config:?}")));
    Ok(LoadedConfig { config, notes })
}

pub fn parse_config(contents: &str) -> Result<EaselConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut Vec<ConfigNote>) {
    let default_content = r#"# Easel Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "db_products.csv"                       # Or set EASEL_DATA_FILE, or pass --file
# link_base_url = "https://shop.example.com/products/" # Or set EASEL_LINK_BASE_URL

# [currency]
# locale = "sv_SE"                                     # Anything not Swedish prints "1234.50 kr"

# [logging]
# file = "~/.easel/easel.log"
# level = "info"                                       # Or set EASEL_LOG_LEVEL
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Failed to create config directory: {e}"),
            ));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.push(ConfigNote::new(
            Level::Warn,
            format!("Failed to write default config: {e}"),
        ));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_file` is the `--file` flag (None = not specified).
pub fn resolve(config: &EaselConfig, cli_file: Option<&Path>) -> ResolvedConfig {
    resolve_with_env(config, cli_file, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by `env`.
pub fn resolve_with_env(
    config: &EaselConfig,
    cli_file: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Data file: CLI → env → config → default
    let data_file = cli_file
        .map(Path::to_path_buf)
        .or_else(|| env("EASEL_DATA_FILE").map(PathBuf::from))
        .or_else(|| config.general.data_file.as_deref().map(expand_home))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    // Link base URL: env → config → default
    let link_base_url = env("EASEL_LINK_BASE_URL")
        .or_else(|| config.general.link_base_url.clone())
        .unwrap_or_else(|| DEFAULT_LINK_BASE_URL.to_string());

    let locale = config
        .currency
        .locale
        .as_deref()
        .unwrap_or(DEFAULT_LOCALE);

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(expand_home)
        .or_else(|| easel_dir().map(|d| d.join("easel.log")))
        .unwrap_or_else(|| PathBuf::from("easel.log"));

    let mut notes = Vec::new();

    // Log level: env → config → default
    let log_level = match env("EASEL_LOG_LEVEL").or_else(|| config.logging.level.clone()) {
        None => DEFAULT_LOG_LEVEL,
        Some(level) => parse_level(&level).unwrap_or_else(|| {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Unknown log level '{level}', using {DEFAULT_LOG_LEVEL}"),
            ));
            DEFAULT_LOG_LEVEL
        }),
    };

    ResolvedConfig {
        data_file,
        link_base_url,
        currency: CurrencyFormat::for_locale(locale),
        log_file,
        log_level,
        notes,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
