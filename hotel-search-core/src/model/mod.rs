pub mod geo;
pub mod profile;
pub mod rate;
