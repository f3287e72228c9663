mod search_pipeline;
pub mod search_ops;

pub use search_pipeline::{SearchPipeline, MAX_SEARCH_RADIUS_KM, MAX_SEARCH_RESULTS};
