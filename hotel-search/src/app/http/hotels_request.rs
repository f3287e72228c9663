use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// validated query parameters of `GET /hotels`.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelsRequest {
    pub in_date: String,
    pub out_date: String,
    pub lat: f64,
    pub lon: f64,
}

/// rejected query parameters. the messages are returned to the caller
/// verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HotelsRequestError {
    #[error("inDate/outDate params not specified")]
    MissingDates,
    #[error("lon/lat params not specified")]
    MissingCoordinates,
    #[error("invalid latitude")]
    InvalidLatitude,
    #[error("invalid longitude")]
    InvalidLongitude,
}

impl HotelsRequest {
    /// validates the raw query parameters, in query string order. checks run
    /// in a fixed order: dates, then presence of both coordinates, then
    /// latitude, then longitude. absent and empty parameters are treated the
    /// same, and only the first occurrence of a repeated key is read.
    pub fn from_query(params: &[(String, String)]) -> Result<HotelsRequest, HotelsRequestError> {
        let (in_date, out_date) = match (non_empty(params, "inDate"), non_empty(params, "outDate")) {
            (Some(in_date), Some(out_date)) => (in_date, out_date),
            _ => return Err(HotelsRequestError::MissingDates),
        };
        let (lat, lon) = match (non_empty(params, "lat"), non_empty(params, "lon")) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(HotelsRequestError::MissingCoordinates),
        };
        let lat = parse_coordinate(lat).ok_or(HotelsRequestError::InvalidLatitude)?;
        let lon = parse_coordinate(lon).ok_or(HotelsRequestError::InvalidLongitude)?;
        Ok(HotelsRequest {
            in_date: in_date.to_string(),
            out_date: out_date.to_string(),
            lat,
            lon,
        })
    }

    /// the query location, x = longitude, y = latitude
    pub fn center(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

/// value of the first occurrence of `key`, if it is non-empty
fn non_empty<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

/// parses a decimal coordinate after trimming surrounding whitespace.
/// finite literals too large for an f64 are rejected rather than rounded
/// to infinity; spelled-out infinities are accepted.
fn parse_coordinate(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let parsed = trimmed.parse::<f64>().ok()?;
    if parsed.is_infinite() && !is_infinity_literal(trimmed) {
        return None;
    }
    Some(parsed)
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value
        .strip_prefix(['+', '-'])
        .unwrap_or(value)
        .to_ascii_lowercase();
    unsigned == "inf" || unsigned == "infinity"
}

impl IntoResponse for HotelsRequestError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
