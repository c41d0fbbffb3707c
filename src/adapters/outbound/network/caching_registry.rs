use crate::enrichment::domain::{Ecosystem, RegistryMetadata, ResolvedIdentifier};
use crate::ports::outbound::RegistryGateway;
use async_trait::async_trait;
use dashmap::DashMap;

/// CachingRegistryGateway wraps a RegistryGateway and adds in-memory caching.
///
/// Decorator over any RegistryGateway implementation. Only successful
/// lookups are cached; a no-data outcome is retried on the next invocation.
/// Entries live for the application session, keyed `ecosystem:name`
/// (maven additionally by group), and are never invalidated or overwritten.
pub struct CachingRegistryGateway<G: RegistryGateway> {
    inner: G,
    cache: DashMap<String, RegistryMetadata>,
}

impl<G: RegistryGateway> CachingRegistryGateway<G> {
    /// Creates a new caching gateway wrapping the given inner gateway
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Cache key for a resolved identifier; `None` for identifiers that are
/// not meaningfully cacheable (unknown ecosystem, maven without a group).
fn cache_key(id: &ResolvedIdentifier) -> Option<String> {
    match id.ecosystem {
        Ecosystem::Unknown => None,
        Ecosystem::Maven => Some(format!("maven:{}:{}", id.group.as_deref()?, id.name)),
        ecosystem => Some(format!("{}:{}", ecosystem.as_str(), id.name)),
    }
}

#[async_trait]
impl<G: RegistryGateway> RegistryGateway for CachingRegistryGateway<G> {
    async fn fetch_metadata(&self, id: &ResolvedIdentifier) -> Option<RegistryMetadata> {
        let Some(key) = cache_key(id) else {
            return self.inner.fetch_metadata(id).await;
        };

        if let Some(cached) = self.cache.get(&key) {
            return Some(cached.clone());
        }

        let result = self.inner.fetch_metadata(id).await;
        if let Some(metadata) = &result {
            self.cache.insert(key, metadata.clone());
        }
        result
    }
}
