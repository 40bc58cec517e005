use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Identity provider settings
    pub identity: IdentityConfig,

    /// Weather upstream settings
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind the listener to
    pub host: String,

    /// Listener port
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// API key passed to the identity provider on every call
    pub api_key: String,

    /// Base URL of the identity provider's auth endpoints
    pub auth_url: String,

    /// Base URL of the provider's JSON database (profile mirror)
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API key for the weather upstream
    pub api_key: String,

    /// Base URL of the weather upstream
    pub base_url: String,

    /// Measurement units forwarded to the upstream
    /// ("standard", "metric", or "imperial")
    pub units: String,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org";
const DEFAULT_UNITS: &str = "metric";

const KNOWN_UNITS: &[&str] = &["standard", "metric", "imperial"];

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing optional variables fall back to defaults; required secrets
    /// (API keys, database URL) default to empty and are caught by
    /// `validate()`.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig {
                host: env_or("HOST", DEFAULT_HOST),
                port,
            },
            identity: IdentityConfig {
                api_key: env_or("IDENTITY_API_KEY", ""),
                auth_url: env_or("IDENTITY_AUTH_URL", DEFAULT_AUTH_URL),
                database_url: env_or("IDENTITY_DATABASE_URL", ""),
            },
            weather: WeatherConfig {
                api_key: env_or("WEATHER_API_KEY", ""),
                base_url: env_or("WEATHER_API_URL", DEFAULT_WEATHER_URL),
                units: env_or("WEATHER_UNITS", DEFAULT_UNITS),
            },
        })
    }

    /// Validate the configuration, collecting all problems at once.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.server.host.is_empty() {
            result.add_error("server.host", "bind host must not be empty");
        }

        if self.identity.api_key.is_empty() {
            result.add_error("identity.api_key", "IDENTITY_API_KEY is required");
        }
        check_base_url(&mut result, "identity.auth_url", &self.identity.auth_url);
        if self.identity.database_url.is_empty() {
            result.add_error("identity.database_url", "IDENTITY_DATABASE_URL is required");
        } else {
            check_base_url(&mut result, "identity.database_url", &self.identity.database_url);
        }

        if self.weather.api_key.is_empty() {
            result.add_error("weather.api_key", "WEATHER_API_KEY is required");
        }
        check_base_url(&mut result, "weather.base_url", &self.weather.base_url);
        if !KNOWN_UNITS.contains(&self.weather.units.as_str()) {
            result.add_warning(
                "weather.units",
                format!(
                    "unknown units {:?}, falling back to {DEFAULT_UNITS:?}",
                    self.weather.units
                ),
            );
        }

        result
    }
}

fn check_base_url(result: &mut ValidationResult, field: &str, value: &str) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => result.add_error(field, format!("unsupported URL scheme {:?}", url.scheme())),
        Err(e) => result.add_error(field, format!("not a valid URL: {e}")),
    }
}
