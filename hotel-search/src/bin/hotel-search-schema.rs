use hotel_search::app::hotel::HotelSearchAppConfig;

/// writes the JSON schema of the hotel search configuration to stdout
pub fn main() {
    let schema = schemars::schema_for!(HotelSearchAppConfig);
    match serde_json::to_string_pretty(&schema) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("failed to serialize configuration schema: {e}");
            std::process::exit(1);
        }
    }
}
