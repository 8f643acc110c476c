use crate::domain::error::OdlError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub deeplx: DeepLxConfig,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    #[serde(default = "default_max_content_length")]
    pub max_content_length: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeepLxConfig {
    #[serde(default = "default_deeplx_url")]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
            client: ClientConfig::default(),
            server: ServerConfig::default(),
            deeplx: DeepLxConfig::default(),
            logging: Logging::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cooldown_ms: default_cooldown_ms(),
            max_content_length: default_max_content_length(),
        }
    }
}

impl Default for DeepLxConfig {
    fn default() -> Self {
        Self {
            url: default_deeplx_url(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

// Defaults
fn default_color() -> bool {
    true
}
fn default_endpoint() -> String {
    "http://localhost:5000".to_string()
}
fn default_user_agent() -> String {
    format!("odl/{}", env!("CARGO_PKG_VERSION"))
}
fn default_port() -> u16 {
    5000
}
fn default_cooldown_ms() -> u64 {
    1500
}
fn default_max_content_length() -> usize {
    4900
}
fn default_deeplx_url() -> String {
    "http://localhost:1188/translate".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

impl Config {
    /// Apply `OPEN_DEEPL_ENDPOINT` from the process environment.
    pub fn apply_client_env(&mut self) {
        self.apply_client_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `PORT` and `COOLDOWN` from the process environment. Only `--serve` reads them.
    pub fn apply_server_env(&mut self) -> Result<(), OdlError> {
        self.apply_server_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_client_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("OPEN_DEEPL_ENDPOINT") {
            if !endpoint.is_empty() {
                self.client.endpoint = endpoint;
            }
        }
    }

    pub fn apply_server_overrides<F>(&mut self, lookup: F) -> Result<(), OdlError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| OdlError::Config(format!("Invalid PORT value: {}", port)))?;
        }
        if let Some(cooldown) = lookup("COOLDOWN") {
            self.server.cooldown_ms = cooldown
                .trim()
                .parse()
                .map_err(|_| OdlError::Config(format!("Invalid COOLDOWN value: {}", cooldown)))?;
        }
        Ok(())
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("open-deepl").join("config.toml"))
}

pub fn load_config_from(path: &Path) -> Result<Config, OdlError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str::<Config>(&content)?)
}

pub fn load_config() -> Result<Config, OdlError> {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match load_config_from(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), OdlError> {
    let path = get_config_path()
        .ok_or_else(|| OdlError::Config("Cannot determine config directory".to_string()))?;
    write_config_sample(&path)?;
    Ok(())
}

/// Write the default config to `path`. Returns `false` if a file is already there.
pub fn write_config_sample(path: &Path) -> Result<bool, OdlError> {
    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| OdlError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| OdlError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(true)
}
