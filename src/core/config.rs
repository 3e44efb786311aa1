//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sirat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiratConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    pub stale_after_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub reorder_rtl: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STALE_AFTER_SECS: u64 = 300;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    /// `None` when `timeout_secs = 0`.
    pub timeout: Option<Duration>,
    pub stale_after: Duration,
    pub reorder_rtl: bool,
    pub log_level: String,
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

/// Returns the path to `~/.sirat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sirat").join("config.toml"))
}

/// Load config from `override_path`, or from `~/.sirat/config.toml`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `SiratConfig::default()`. An explicit path that doesn't exist is
/// an I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(override_path: Option<&Path>) -> Result<SiratConfig, ConfigError> {
    if let Some(path) = override_path {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SiratConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SiratConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<SiratConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SiratConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sirat Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"
                                     # Or set SIRAT_LOG_LEVEL env var

# [api]
# base_url = "https://api.alquran.cloud"   # Or SIRAT_BASE_URL env var, or --base-url
# timeout_secs = 30                  # 0 disables the request timeout

# [cache]
# stale_after_secs = 300             # Revisiting a view within this window reuses the response

# [display]
# reorder_rtl = false                # true for terminals without bidirectional text support
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &SiratConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_base_url, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment lookup supplied by the caller.
fn resolve_with_env(
    config: &SiratConfig,
    cli_base_url: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| env("SIRAT_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Log level: env → config → default
    let log_level = env("SIRAT_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let timeout_secs = config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

    ResolvedConfig {
        base_url,
        timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        stale_after: Duration::from_secs(
            config
                .cache
                .stale_after_secs
                .unwrap_or(DEFAULT_STALE_AFTER_SECS),
        ),
        reorder_rtl: config.display.reorder_rtl.unwrap_or(false),
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolves against an empty environment.
    fn resolve_clean(config: &SiratConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
        resolve_with_env(config, cli_base_url, |_| None)
    }

    #[test]
    fn test_default_config_parses() {
        let config = SiratConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.display.reorder_rtl.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = SiratConfig::default();
        let resolved = resolve_clean(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.timeout,
            Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        );
        assert_eq!(
            resolved.stale_after,
            Duration::from_secs(DEFAULT_STALE_AFTER_SECS)
        );
        assert!(!resolved.reorder_rtl);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SiratConfig {
            api: ApiConfig {
                base_url: None,
                timeout_secs: Some(5),
            },
            cache: CacheConfig {
                stale_after_secs: Some(0),
            },
            display: DisplayConfig {
                reorder_rtl: Some(true),
            },
            ..Default::default()
        };
        let resolved = resolve_clean(&config, None);
        assert_eq!(resolved.timeout, Some(Duration::from_secs(5)));
        assert_eq!(resolved.stale_after, Duration::ZERO);
        assert!(resolved.reorder_rtl);
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = SiratConfig {
            api: ApiConfig {
                base_url: None,
                timeout_secs: Some(0),
            },
            ..Default::default()
        };
        assert_eq!(resolve_clean(&config, None).timeout, None);
    }

    #[test]
    fn test_resolve_cli_base_url_wins() {
        let config = SiratConfig {
            api: ApiConfig {
                base_url: Some("http://mirror.example".to_string()),
                timeout_secs: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, Some("http://localhost:8080"), |_| {
            Some("http://from-env.example".to_string())
        });
        assert_eq!(resolved.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_resolve_env_beats_config_file() {
        let config = SiratConfig {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            api: ApiConfig {
                base_url: Some("http://mirror.example".to_string()),
                timeout_secs: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, |key| match key {
            "SIRAT_BASE_URL" => Some("http://from-env.example".to_string()),
            "SIRAT_LOG_LEVEL" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(resolved.base_url, "http://from-env.example");
        assert_eq!(resolved.log_level, "warn");
    }

    #[test]
    fn test_resolve_config_file_beats_default() {
        let config = SiratConfig {
            api: ApiConfig {
                base_url: Some("http://mirror.example".to_string()),
                timeout_secs: None,
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_clean(&config, None).base_url,
            "http://mirror.example"
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "info"

[api]
base_url = "http://127.0.0.1:9000"
timeout_secs = 10

[cache]
stale_after_secs = 60

[display]
reorder_rtl = true
"#;
        let config: SiratConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://127.0.0.1:9000")
        );
        assert_eq!(config.api.timeout_secs, Some(10));
        assert_eq!(config.cache.stale_after_secs, Some(60));
        assert_eq!(config.display.reorder_rtl, Some(true));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
reorder_rtl = true
"#;
        let config: SiratConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.reorder_rtl, Some(true));
        assert!(config.api.base_url.is_none());
        assert!(config.cache.stale_after_secs.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("sirat-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let path = std::env::temp_dir().join("sirat-definitely-missing/config.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Io(_))
        ));
    }
}
