pub mod enrich_request;
pub mod enrich_response;

pub use enrich_request::EnrichRequest;
pub use enrich_response::{EnrichResponse, EnrichmentStats};
