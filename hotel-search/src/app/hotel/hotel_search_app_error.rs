use crate::app::assets::AssetError;

#[derive(thiserror::Error, Debug)]
pub enum HotelSearchAppError {
    #[error("failure loading configuration: {0}")]
    ConfigFailure(String),
    #[error(transparent)]
    AssetFailure(#[from] AssetError),
    #[error("failure binding server to {address}: {message}")]
    BindFailure { address: String, message: String },
    #[error("server failure: {0}")]
    ServerFailure(String),
    #[error("{0}")]
    ResponseSerialization(String),
}
