use crate::enrichment::domain::{RegistryMetadata, ResolvedIdentifier};
use async_trait::async_trait;

/// RegistryGateway port for per-ecosystem package-registry lookups
///
/// Implementations dispatch on the identifier's ecosystem tag and perform
/// a single metadata request against the matching public registry.
///
/// # No-data semantics
/// `None` is the ordinary outcome for unknown ecosystems, transport
/// failures, non-success statuses, and malformed responses alike.
/// Implementations must never surface an error to the caller.
#[async_trait]
pub trait RegistryGateway: Send + Sync {
    /// Best-effort registry metadata for a resolved identifier, with all
    /// dates already normalized to `DD-MM-YYYY`.
    async fn fetch_metadata(&self, id: &ResolvedIdentifier) -> Option<RegistryMetadata>;
}
