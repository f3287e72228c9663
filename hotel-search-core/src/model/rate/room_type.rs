use serde::{Deserialize, Serialize};

/// pricing detail of the room offered by a rate plan.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomType {
    pub bookable_rate: f64,
    pub total_rate: f64,
    pub total_rate_inclusive: f64,
    pub code: String,
    pub currency: String,
    pub room_description: String,
}
