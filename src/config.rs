use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub fixture: FixtureConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

// Knobs for the fixture behavior itself. Defaults reproduce the
// original fixture exactly; overrides exist for test harnesses only.
#[derive(Debug, Deserialize, Clone)]
pub struct FixtureConfig {
    /// Artificial delay applied to page responses, in milliseconds.
    pub delay_ms: u64,
    /// Location of the binary asset served for the image routes.
    pub asset_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            // "__" separates nested keys, e.g. FIXTURE__FIXTURE__DELAY_MS
            .add_source(config::Environment::with_prefix("FIXTURE").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 80)?
            .set_default("logging.access_log", true)?
            .set_default("fixture.delay_ms", 100)?
            .set_default("fixture.asset_path", "test.png")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.fixture.delay_ms)
    }
}

pub struct AppState {
    pub config: Config,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
