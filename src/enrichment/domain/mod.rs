/// Domain model for the enrichment pipeline
pub mod component;
pub mod identifier;
pub mod property_set;
pub mod provider;
pub mod severity;

pub use component::{
    AffectedRef, Bom, Component, DeclaredVulnerability, ExternalReference, Property,
    SeverityRating,
};
pub use identifier::{Ecosystem, ResolvedIdentifier};
pub use property_set::{PropertyKey, PropertySet, NA};
pub use provider::{DateOrBool, LifecycleCycle, RegistryMetadata, RepoMetadata, VulnerabilityReport};
pub use severity::Severity;
