/// Pure domain services: derivation rules with no I/O of their own
pub mod criticality;
pub mod derivation;
pub mod lifecycle;

pub use criticality::resolve_criticality;
pub use derivation::derive_properties;
pub use lifecycle::{candidate_slugs, matching_cycle};
