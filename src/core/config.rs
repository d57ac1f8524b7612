//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Profile TOML, relative to `~/.folio/` unless absolute.
    pub profile_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RelayConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub profile: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: Url,
    pub request_timeout: Duration,
    /// None = use the bundled sample profile.
    pub profile_path: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(
        "no relay endpoint configured: set [relay] endpoint in ~/.folio/config.toml, FOLIO_RELAY_ENDPOINT, or --endpoint"
    )]
    MissingEndpoint,
    #[error("invalid relay endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.folio/`.
pub fn folio_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio"))
}

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    folio_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(FolioConfig::default())
        }
    }
}

/// Load config from an explicit path, generating a default if it is missing.
pub fn load_config_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: FolioConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [relay]
# endpoint = "https://formspree.io/f/<form-id>"   # Or FOLIO_RELAY_ENDPOINT / --endpoint (required)
# timeout_secs = 30

# [general]
# profile_file = "portfolio.toml"   # Path relative to ~/.folio/ (or FOLIO_PROFILE / --profile)
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

pub const ENV_ENDPOINT: &str = "FOLIO_RELAY_ENDPOINT";
pub const ENV_PROFILE: &str = "FOLIO_PROFILE";

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment read through `env`.
pub fn resolve_with(
    config: &FolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Endpoint: CLI → env → config (no default)
    let raw_endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env(ENV_ENDPOINT))
        .or_else(|| config.relay.endpoint.clone())
        .ok_or(ConfigError::MissingEndpoint)?;
    let endpoint = parse_endpoint(&raw_endpoint)?;

    // Profile: CLI → env → config (relative to ~/.folio/) → bundled
    let profile_path = cli
        .profile
        .clone()
        .or_else(|| env(ENV_PROFILE).map(PathBuf::from))
        .or_else(|| {
            config.general.profile_file.as_ref().map(|file| {
                let path = PathBuf::from(file);
                match folio_dir() {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path,
                }
            })
        });

    let timeout_secs = config.relay.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(ResolvedConfig {
        endpoint,
        request_timeout: Duration::from_secs(timeout_secs),
        profile_path,
    })
}

/// The relay must be reachable over plain HTTP(S).
fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
