mod hotels_handler;
mod hotels_request;
mod router;
mod server;

pub use hotels_handler::get_hotels;
pub use hotels_request::{HotelsRequest, HotelsRequestError};
pub use router::build_router;
pub use server::serve;
