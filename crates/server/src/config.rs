use shared_types::{AppConfig, FeatureFlags, ServerSettings};
use std::net::{IpAddr, SocketAddr};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
            AppConfig::default()
        }
    })
}

fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => {
            tracing::info!(features = ?config.features, "Loaded {CONFIG_PATH}");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}, using defaults");
            AppConfig::default()
        }
    }
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_config()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        cors: false,
    };
    CONFIG.get().map(|c| &c.features).unwrap_or(&DEFAULT)
}

/// Address to bind. `PORT` overrides the configured port.
pub fn listen_addr() -> Result<SocketAddr, std::net::AddrParseError> {
    let settings = CONFIG
        .get()
        .map(|c| c.server.clone())
        .unwrap_or_default();
    resolve_addr(&settings, std::env::var("PORT").ok().as_deref())
}

fn resolve_addr(
    settings: &ServerSettings,
    port_override: Option<&str>,
) -> Result<SocketAddr, std::net::AddrParseError> {
    let ip: IpAddr = settings.host.parse()?;
    let port = port_override
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(settings.port);
    Ok(SocketAddr::new(ip, port))
}
