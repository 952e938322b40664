//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Dataset configuration.
    #[serde(default)]
    pub data: DataConfig,
    /// Simulated advisory configuration.
    #[serde(default)]
    pub advisory: AdvisoryConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Dataset configuration.
///
/// The school collection ships with an embedded demo seed; a JSON snapshot
/// file can replace it at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Optional path to a JSON snapshot of school records.
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

/// Simulated advisory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisoryConfig {
    /// Artificial delay before advisory responses, in milliseconds.
    ///
    /// Purely cosmetic; set to 0 in tests.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    1500
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SISRC").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
