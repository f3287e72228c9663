use super::{Address, HotelImage};
use serde::{Deserialize, Serialize};

/// descriptive record for a hotel, keyed by its id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelProfile {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub description: String,
    pub address: Address,
    pub images: Vec<HotelImage>,
}
