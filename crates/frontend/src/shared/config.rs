use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

fn default_port() -> u16 {
    8000
}

fn default_level() -> String {
    "debug".to_string()
}

/// Configuration embedded in the wasm
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Parse the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Install the configuration used by the rest of the app.
///
/// Only the first call has an effect.
pub fn install(config: Config) {
    let _ = CONFIG.set(config);
}

/// Active configuration; defaults if nothing was installed
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
