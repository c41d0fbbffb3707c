use crate::enrichment::domain::{ResolvedIdentifier, VulnerabilityReport};
use async_trait::async_trait;

/// VulnerabilitySignal port - the external vulnerability collaborator
///
/// Given a resolved identifier, returns, best-effort: whether any
/// vulnerability exists, a count, a maximum severity score comparable
/// against the 9/7/4 criticality thresholds, a default classification,
/// and zero or more "fixed in" version strings ordered by preference
/// (first = most preferred recommendation).
///
/// # No-data semantics
/// `None` for unknown ecosystems and any request failure; no error ever
/// propagates to the reconciler.
#[async_trait]
pub trait VulnerabilitySignal: Send + Sync {
    async fn fetch_report(&self, id: &ResolvedIdentifier) -> Option<VulnerabilityReport>;
}
