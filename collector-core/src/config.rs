use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::country::Language;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_GEOCODING_URL: &str = "http://api.openweathermap.org/geo/1.0/direct";

/// Environment variables that override the config file.
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_POSTGRES_DB: &str = "POSTGRES_DB";
pub const ENV_POSTGRES_USER: &str = "POSTGRES_USER";
pub const ENV_POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const ENV_POSTGRES_HOST: &str = "POSTGRES_HOST";
pub const ENV_POSTGRES_PORT: &str = "POSTGRES_PORT";

/// Access to the OpenWeather geocoding and current weather endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    pub geocoding_url: String,
    pub weather_url: String,
    /// Language of the weather description, e.g. "ru".
    pub language: String,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            language: "ru".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { host: "localhost".to_string(), port: 5432, name: None, user: None, password: None }
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new().host(&self.host).port(self.port);
        if let Some(name) = &self.name {
            options = options.database(name);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        options
    }
}

/// What a weather-phase failure for one location does to the rest of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Log the failure, skip the location and keep going.
    #[default]
    SkipLocation,
    /// Abort the pass; nothing collected so far is stored.
    AbortPass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    pub cities_file: PathBuf,
    /// Pause between geocoding and weather fetching.
    pub cooldown_secs: u64,
    /// Pause between cycles, whatever their outcome.
    pub retry_period_secs: u64,
    pub country_language: Language,
    pub weather_failure_policy: FailurePolicy,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            cities_file: PathBuf::from("city_list.txt"),
            cooldown_secs: 60,
            retry_period_secs: 3600,
            country_language: Language::Russian,
            weather_failure_policy: FailurePolicy::SkipLocation,
        }
    }
}

impl CollectorConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }
}

/// Top-level configuration.
///
/// Example TOML:
/// [api]
/// language = "ru"
///
/// [collector]
/// cities_file = "city_list.txt"
/// weather_failure_policy = "abort-pass"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub collector: CollectorConfig,
}

impl Config {
    /// Load config from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-collector")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `API_KEY` / `POSTGRES_*` overrides.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api.api_key = Some(key);
        }
        if let Some(name) = lookup(ENV_POSTGRES_DB) {
            self.database.name = Some(name);
        }
        if let Some(user) = lookup(ENV_POSTGRES_USER) {
            self.database.user = Some(user);
        }
        if let Some(password) = lookup(ENV_POSTGRES_PASSWORD) {
            self.database.password = Some(password);
        }
        if let Some(host) = lookup(ENV_POSTGRES_HOST) {
            self.database.host = host;
        }
        if let Some(port) = lookup(ENV_POSTGRES_PORT) {
            self.database.port = port
                .trim()
                .parse()
                .with_context(|| format!("{ENV_POSTGRES_PORT} is not a valid port: '{port}'"))?;
        }
        Ok(())
    }

    /// Checks that everything needed to start collecting is present.
    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.as_deref().is_none_or(str::is_empty) {
            bail!(
                "No API key configured.\n\
                 Hint: set {ENV_API_KEY} in the environment or `api_key` under [api]."
            );
        }
        if self.database.name.as_deref().is_none_or(str::is_empty) {
            bail!(
                "No database name configured.\n\
                 Hint: set {ENV_POSTGRES_DB} in the environment or `name` under [database]."
            );
        }
        Ok(())
    }
}
