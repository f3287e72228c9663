use clap::Parser;
use hotel_search::app::cli::CliArgs;
use hotel_search::app::hotel::{HotelSearchApp, HotelSearchAppConfig, HotelSearchAppError};
use hotel_search::app::http;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HotelSearchAppError> {
    let args = CliArgs::parse();
    let config = HotelSearchAppConfig::load(args.config.as_deref())?;
    let config = args.apply(config);

    // all data is loaded before the listener is bound
    let app = HotelSearchApp::try_from(&config)?;
    http::serve(app, &config.server).await
}
