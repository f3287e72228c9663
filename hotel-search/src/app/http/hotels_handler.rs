use super::HotelsRequest;
use crate::app::hotel::{HotelSearchApp, HotelSearchAppError};
use crate::app::response::hotels_feature_collection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// `GET /hotels?inDate=&outDate=&lat=&lon=`
///
/// responds with a GeoJSON feature collection of the hotels near the given
/// location that have a rate plan for the stay, nearest first.
pub async fn get_hotels(
    State(app): State<Arc<HotelSearchApp>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let request = match HotelsRequest::from_query(&params) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("rejecting hotels request {:?}: {}", params, e);
            return e.into_response();
        }
    };

    let hotels = app.search(&request.center(), &request.in_date, &request.out_date);
    let collection = hotels_feature_collection(&hotels);
    match serde_json::to_vec(&collection) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            log::error!("failed to serialize hotels response: {}", e);
            HotelSearchAppError::ResponseSerialization(e.to_string()).into_response()
        }
    }
}

impl IntoResponse for HotelSearchAppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
