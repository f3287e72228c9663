use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct HotelImage {
    pub url: String,
    /// marks the image shown when only one is displayed
    pub default: bool,
}
