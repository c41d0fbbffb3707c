//! bom-enrich - SBOM component enrichment pipeline
//!
//! This library enriches software component records from a CycloneDX-style
//! bill of materials with a fixed set of regulatory metadata properties by
//! querying several independent, unreliable external data providers and
//! reconciling their answers into one deterministic result per property.
//!
//! # Architecture
//!
//! The library follows hexagonal architecture:
//!
//! - **Domain Layer** (`enrichment`): the BOM model, identifier resolution,
//!   provider result bags, the fixed property set, and pure derivation rules
//! - **Application Layer** (`application`): the reconciliation use case and
//!   its DTOs
//! - **Ports** (`ports`): interface definitions for the provider gateways
//!   and infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports (registry
//!   clients, caching decorators, file system, console)
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_enrich::prelude::*;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Read the document to enrich
//! let reader = BomFileReader::new();
//! let bom = reader.read_bom(Path::new("bom.json"))?;
//!
//! // Create the use case with injected provider adapters
//! let use_case = EnrichComponentsUseCase::new(
//!     CachingRegistryGateway::new(RegistryClient::new(RegistryEndpoints::default())?),
//!     CachingRepositorySignal::new(GitHubClient::new("https://api.github.com", None)?),
//!     OsvClient::new("https://api.osv.dev")?,
//!     EolClient::new("https://endoflife.date")?,
//!     FileOverrideSource::new(None),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute; provider failures degrade to "NA" values, never errors
//! let response = use_case.execute(EnrichRequest::new(bom)).await;
//! println!("{}", serde_json::to_string_pretty(&response.bom)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        BomFileReader, FileOverrideSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{
        CachingRegistryGateway, CachingRepositorySignal, EolClient, GitHubClient, OsvClient,
        RegistryClient, RegistryEndpoints,
    };
    pub use crate::application::dto::{EnrichRequest, EnrichResponse, EnrichmentStats};
    pub use crate::application::use_cases::EnrichComponentsUseCase;
    pub use crate::enrichment::domain::{
        AffectedRef, Bom, Component, DateOrBool, DeclaredVulnerability, Ecosystem,
        ExternalReference, LifecycleCycle, Property, PropertyKey, PropertySet, RegistryMetadata,
        RepoMetadata, ResolvedIdentifier, Severity, SeverityRating, VulnerabilityReport, NA,
    };
    pub use crate::ports::outbound::{
        BomReader, EolOverrideSource, LifecycleRegistry, OutputPresenter, ProgressReporter,
        RegistryGateway, RepositorySignal, VulnerabilitySignal,
    };
    pub use crate::shared::Result;
}
