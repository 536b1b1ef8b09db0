use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::error::ExtractError;

pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o-mini";
pub const DEFAULT_API_VERSION: &str = "2024-08-01-preview";

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Completion API settings
    #[serde(default)]
    pub azure_openai: AzureOpenAiConfig,
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Configuration for the Azure OpenAI completion API
#[derive(Debug, Deserialize, Clone)]
pub struct AzureOpenAiConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: Option<String>,
    /// API key sent in the `api-key` header
    pub api_key: Option<String>,
    /// Deployment name, defaults to [`DEFAULT_DEPLOYMENT`]
    pub deployment: Option<String>,
    /// API version query parameter, defaults to [`DEFAULT_API_VERSION`]
    pub api_version: Option<String>,
    /// Sampling temperature.
    ///
    /// Left unset on purpose: `gpt-4o-mini` deployments only accept their default
    /// temperature and reject requests that carry any other value, so the field is
    /// only sent when configured explicitly.
    pub temperature: Option<f32>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts for transient failures
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Initial delay between retries in milliseconds (doubles each retry)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for AzureOpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            deployment: None,
            api_version: None,
            temperature: None,
            timeout_secs: default_timeout_secs(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Configuration for the HTTP listener
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// Default value functions
fn default_timeout_secs() -> u64 {
    60
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl AzureOpenAiConfig {
    pub fn deployment(&self) -> &str {
        self.deployment.as_deref().unwrap_or(DEFAULT_DEPLOYMENT)
    }

    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fill unset fields from the conventional `AZURE_OPENAI_*` variables.
    fn with_env_fallback(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.endpoint = self.endpoint.or_else(|| lookup("AZURE_OPENAI_ENDPOINT"));
        self.api_key = self.api_key.or_else(|| lookup("AZURE_OPENAI_API_KEY"));
        self.deployment = self
            .deployment
            .or_else(|| lookup("AZURE_OPENAI_DEPLOYMENT"));
        self.api_version = self
            .api_version
            .or_else(|| lookup("AZURE_OPENAI_API_VERSION"));
        self
    }

    /// Check that the settings needed to reach the API are present.
    ///
    /// Called once at startup so a misconfigured process never starts serving.
    pub fn validate(&self) -> Result<(), ExtractError> {
        let endpoint = non_blank(self.endpoint.as_deref()).ok_or_else(|| {
            ExtractError::Config(
                "Missing Azure OpenAI endpoint. Set AZURE_OPENAI_ENDPOINT".to_string(),
            )
        })?;
        url::Url::parse(endpoint).map_err(|e| {
            ExtractError::Config(format!("Invalid Azure OpenAI endpoint '{}': {}", endpoint, e))
        })?;

        non_blank(self.api_key.as_deref()).ok_or_else(|| {
            ExtractError::Config(
                "Missing Azure OpenAI API key. Set AZURE_OPENAI_API_KEY".to_string(),
            )
        })?;

        if self.retry_attempts == 0 {
            return Err(ExtractError::Config(
                "retry_attempts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_EXTRACTOR__ prefix
    /// 2. config.toml file in current directory
    /// 3. `AZURE_OPENAI_*` variables for completion API fields still unset
    /// 4. Default values
    ///
    /// Environment variable format: RECIPE_EXTRACTOR__AZURE_OPENAI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_EXTRACTOR__SERVER__PORT
        .add_source(
            Environment::with_prefix("RECIPE_EXTRACTOR")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;
    config.azure_openai = config
        .azure_openai
        .with_env_fallback(|key| env::var(key).ok());
    Ok(config)
}
