pub mod assets;
pub mod cli;
pub mod hotel;
pub mod http;
pub mod response;
