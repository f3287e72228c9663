#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("asset {name} not found in {location}")]
    NotFound { name: String, location: String },
    #[error("failure reading asset {name} from {location}: {message}")]
    ReadFailure {
        name: String,
        location: String,
        message: String,
    },
    #[error("failure decoding asset {name}: {message}")]
    DecodeFailure { name: String, message: String },
}
