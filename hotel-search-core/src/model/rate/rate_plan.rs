use super::{RoomType, Stay};
use serde::{Deserialize, Serialize};

/// a row of the inventory feed: one bookable rate for one hotel and one stay.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RatePlan {
    pub hotel_id: String,
    pub code: String,
    pub in_date: String,
    pub out_date: String,
    pub room_type: RoomType,
}

impl RatePlan {
    /// the key this plan is stored under in a [`super::RateTable`]
    pub fn stay(&self) -> Stay {
        Stay::new(&self.hotel_id, &self.in_date, &self.out_date)
    }
}
