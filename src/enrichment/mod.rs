//! Enrichment domain: the BOM model, identifier resolution, provider
//! result bags, the fixed property set, and the pure derivation services.

pub mod domain;
pub mod services;
