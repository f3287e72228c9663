use super::get_hotels;
use crate::app::hotel::HotelSearchApp;
use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

/// routes of the hotel search service. every response, including errors
/// and unknown paths, allows any origin.
pub fn build_router(app: Arc<HotelSearchApp>) -> Router {
    Router::new()
        .route("/hotels", get(get_hotels))
        .with_state(app)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
