mod rate_plan;
mod rate_table;
mod room_type;
mod stay;

pub use rate_plan::RatePlan;
pub use rate_table::RateTable;
pub use room_type::RoomType;
pub use stay::Stay;
