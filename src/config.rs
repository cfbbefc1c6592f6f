use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

use crate::display::Locale;

const DEFAULT_BASE_URL: &str = "http://localhost:5077/";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";

/// Client configuration, layered from defaults, files and `APP__*` variables.
#[derive(Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Backend root, e.g. `https://api.example.com/`
    #[validate(custom = "validate_base_url")]
    pub base_url: String,

    /// Bearer token used when none is passed on the command line
    #[serde(default)]
    pub access_token: Option<String>,

    /// Per-request timeout; the HTTP client's default applies when unset
    #[serde(default)]
    #[validate(range(min = 1, max = 300, message = "request_timeout_secs must be 1-300"))]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_json: bool,

    #[serde(default)]
    pub locale: Locale,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Hand-written so the access token never reaches a log line.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .field("locale", &self.locale)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            request_timeout_secs: None,
            log_level: default_log_level(),
            log_json: false,
            locale: Locale::default(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_user_agent() -> String {
    format!("coffee-supply-client/{}", env!("CARGO_PKG_VERSION"))
}

fn validate_base_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => Ok(()),
        _ => {
            let mut err = ValidationError::new("base_url");
            err.message = Some("base_url must be an absolute http(s) URL".into());
            Err(err)
        }
    }
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter.
/// `RUST_LOG` wins when set.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("coffee_supply_client={},coffee_cli={}", level, level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);
    let filter = EnvFilter::new(filter_directive);

    // try_init: a second call (tests, embedding apps) keeps the first subscriber
    if json {
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Profile name from RUN_ENV or APP_ENV, `development` when neither is set.
pub fn run_env() -> String {
    env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string())
}

/// Loads configuration from `./config`.
pub fn load_config() -> Result<ClientConfig, AppConfigError> {
    load_config_from(CONFIG_DIR)
}

/// Loads client configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. `{dir}/default.toml`
/// 3. `{dir}/{env}.toml`, env from RUN_ENV or APP_ENV
/// 4. Environment variables (APP__*)
pub fn load_config_from(dir: impl AsRef<Path>) -> Result<ClientConfig, AppConfigError> {
    let dir = dir.as_ref();
    let run_env = run_env();
    info!("Loading configuration for environment: {}", run_env);

    if !dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            dir.display()
        );
    }

    let config = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::from(dir.join("default")).required(false))
        .add_source(File::from(dir.join(&run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let client_config: ClientConfig = config.try_deserialize()?;

    client_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(client_config)
}
