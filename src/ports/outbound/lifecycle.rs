use crate::enrichment::domain::LifecycleCycle;
use async_trait::async_trait;

/// LifecycleRegistry port for the heuristic end-of-life lookup
///
/// An external registry keyed by product slug, returning release-cycle
/// rows whose `eol` field is a date or a boolean.
///
/// # No-data semantics
/// `None` for unknown products and any request failure.
#[async_trait]
pub trait LifecycleRegistry: Send + Sync {
    async fn product_cycles(&self, slug: &str) -> Option<Vec<LifecycleCycle>>;
}

/// EolOverrideSource port for the static end-of-life override table
///
/// An optional externally supplied mapping from normalized `group:name`
/// identifiers (lowercased) to `DD-MM-YYYY` dates, scoped to the maven
/// namespace. Absence of the resource is not an error; it degrades to an
/// empty mapping. Implementations load the table at most once per session,
/// caching the not-found case as well.
#[async_trait]
pub trait EolOverrideSource: Send + Sync {
    async fn maven_override(&self, key: &str) -> Option<String>;
}
