use super::HotelSearchAppError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// prefix of environment variables that override configuration values,
/// e.g. `HOTEL_SEARCH__SERVER__PORT=9090`
pub const ENV_PREFIX: &str = "HOTEL_SEARCH";
const ENV_SEPARATOR: &str = "__";

const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8080
"#;

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
pub struct HotelSearchAppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
pub struct ServerConfig {
    /// interface to listen on
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    /// port to listen on
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
pub struct AssetsConfig {
    /// directory containing geo.json, hotels.json and inventory.json. when
    /// omitted, the data set compiled into the binary is served.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn default_host() -> String {
        String::from("0.0.0.0")
    }
    pub fn default_port() -> u16 {
        8080
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: ServerConfig::default_host(),
            port: ServerConfig::default_port(),
        }
    }
}

impl HotelSearchAppConfig {
    /// builds the configuration from the defaults, then the optional TOML
    /// file, then `HOTEL_SEARCH__*` environment variables, later sources
    /// taking precedence.
    pub fn load(config_file: Option<&Path>) -> Result<HotelSearchAppConfig, HotelSearchAppError> {
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));
        if let Some(path) = config_file {
            log::info!("reading configuration file {}", path.display());
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );
        let config = builder
            .build()
            .map_err(|e| HotelSearchAppError::ConfigFailure(e.to_string()))?;
        config
            .try_deserialize::<HotelSearchAppConfig>()
            .map_err(|e| HotelSearchAppError::ConfigFailure(e.to_string()))
    }
}
