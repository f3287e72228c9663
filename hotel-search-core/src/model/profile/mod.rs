mod address;
mod hotel_image;
mod hotel_profile;
mod profile_store;

pub use address::Address;
pub use hotel_image::HotelImage;
pub use hotel_profile::HotelProfile;
pub use profile_store::ProfileStore;
