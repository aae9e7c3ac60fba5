use crate::domain::error::FaqError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub database_path: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub youdao: YoudaoConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheConfig {
    /// Lifetime of both per-question and per-list entries
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// How often the server sweeps expired entries
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Youdao,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    #[serde(default = "default_provider")]
    pub provider: Provider,
    /// Upper bound for a single translation call made while saving
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub http_proxy: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct YoudaoConfig {
    pub api_id: Option<String>,
    pub api_key: Option<String>,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            key_prefix: default_key_prefix(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            timeout_secs: default_timeout_secs(),
            http_proxy: None,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            translation: TranslationConfig::default(),
            logging: Logging::default(),
            youdao: YoudaoConfig::default(),
        }
    }
}

// Defaults
fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_ttl_secs() -> u64 {
    3600
}
fn default_key_prefix() -> String {
    "faq".to_string()
}
fn default_sweep_interval_secs() -> u64 {
    60
}
fn default_provider() -> Provider {
    Provider::Google
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "INFO".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("faq").join("config.toml"))
}

/// Get database path (config override, else the config directory)
pub fn get_database_path(config: &Config) -> PathBuf {
    if let Some(path) = config.database_path.as_deref().filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    // ~/.config/faq/faq.db (Linux)
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("faq")
        .join("faq.db")
}

pub fn load_config() -> Result<Config, FaqError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Load a config file, falling back to defaults when it cannot be parsed
pub fn load_config_from(path: &Path) -> Result<Config, FaqError> {
    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, FaqError> {
    Ok(toml::from_str::<Config>(content)?)
}

pub fn generate_config_sample() -> Result<(), FaqError> {
    let path = get_config_path()
        .ok_or_else(|| FaqError::Config("Cannot determine config directory".to_string()))?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| FaqError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(&path, toml_content)
        .map_err(|e| FaqError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(())
}
