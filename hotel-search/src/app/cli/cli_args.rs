use crate::app::hotel::HotelSearchAppConfig;
use clap::Parser;
use std::path::PathBuf;

/// command line arguments of the hotel search service. values given here
/// take precedence over the configuration file and environment.
#[derive(Parser, Debug, Default)]
#[command(name = "hotel-search")]
#[command(about = "Serves nearby hotels with availability as GeoJSON")]
pub struct CliArgs {
    /// The service port
    #[arg(long)]
    pub port: Option<u16>,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// directory containing geo.json, hotels.json and inventory.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply(&self, mut config: HotelSearchAppConfig) -> HotelSearchAppConfig {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(data_dir) = &self.data_dir {
            config.assets.data_dir = Some(data_dir.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_keeps_config() {
        let args = CliArgs::try_parse_from(["hotel-search"]).unwrap();
        let config = args.apply(HotelSearchAppConfig::default());
        assert_eq!(config.server.port, 8080);
        assert!(config.assets.data_dir.is_none());
    }

    #[test]
    fn test_args_override_config() {
        let args =
            CliArgs::try_parse_from(["hotel-search", "--port", "9000", "--data-dir", "/srv/hotels"])
                .unwrap();
        let config = args.apply(HotelSearchAppConfig::default());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.assets.data_dir, Some(PathBuf::from("/srv/hotels")));
    }

    #[test]
    fn test_invalid_port() {
        assert!(CliArgs::try_parse_from(["hotel-search", "--port", "http"]).is_err());
    }
}
