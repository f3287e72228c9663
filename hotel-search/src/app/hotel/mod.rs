mod hotel_search_app;
mod hotel_search_app_config;
mod hotel_search_app_error;

pub use hotel_search_app::HotelSearchApp;
pub use hotel_search_app_config::{AssetsConfig, HotelSearchAppConfig, ServerConfig};
pub use hotel_search_app_error::HotelSearchAppError;
