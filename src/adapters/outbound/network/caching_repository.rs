use super::github_client::normalize_repo_url;
use crate::enrichment::domain::RepoMetadata;
use crate::ports::outbound::RepositorySignal;
use async_trait::async_trait;
use dashmap::DashMap;

/// CachingRepositorySignal wraps a RepositorySignal and adds in-memory
/// caching keyed by the normalized owner/repo pair.
///
/// Different historical URL shapes for the same repository share a cache
/// entry. Only successful lookups are cached; no-data outcomes (including
/// fail-closed skips) are retried on the next invocation.
pub struct CachingRepositorySignal<S: RepositorySignal> {
    inner: S,
    cache: DashMap<String, RepoMetadata>,
}

impl<S: RepositorySignal> CachingRepositorySignal<S> {
    /// Creates a new caching signal wrapping the given inner signal
    pub fn new(inner: S) -> Self {
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

#[async_trait]
impl<S: RepositorySignal> RepositorySignal for CachingRepositorySignal<S> {
    async fn fetch_repo_metadata(&self, repo_url: &str) -> Option<RepoMetadata> {
        let Some((owner, repo)) = normalize_repo_url(repo_url) else {
            // Unextractable URLs are the inner signal's problem (it will
            // fail closed); there is nothing stable to key a cache on.
            return self.inner.fetch_repo_metadata(repo_url).await;
        };
        let key = format!("{}/{}", owner.to_lowercase(), repo.to_lowercase());

        if let Some(cached) = self.cache.get(&key) {
            return Some(cached.clone());
        }

        let result = self.inner.fetch_repo_metadata(repo_url).await;
        if let Some(metadata) = &result {
            self.cache.insert(key, metadata.clone());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockRepositorySignal {
        call_count: AtomicUsize,
        answer: Option<RepoMetadata>,
    }

    impl MockRepositorySignal {
        fn answering(stars: u64) -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                answer: Some(RepoMetadata {
                    stars,
                    ..Default::default()
                }),
            }
        }

        fn failing() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                answer: None,
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RepositorySignal for MockRepositorySignal {
        async fn fetch_repo_metadata(&self, _repo_url: &str) -> Option<RepoMetadata> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }

    #[tokio::test]
    async fn test_url_shapes_share_one_entry() {
        let caching = CachingRepositorySignal::new(MockRepositorySignal::answering(42));

        caching
            .fetch_repo_metadata("https://github.com/lodash/lodash")
            .await;
        caching
            .fetch_repo_metadata("git://github.com/lodash/lodash.git")
            .await;
        caching
            .fetch_repo_metadata("https://github.com/Lodash/Lodash")
            .await;

        assert_eq!(caching.inner.calls(), 1);
        assert_eq!(caching.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_retried() {
        let caching = CachingRepositorySignal::new(MockRepositorySignal::failing());

        caching
            .fetch_repo_metadata("https://github.com/ghost/ghost")
            .await;
        caching
            .fetch_repo_metadata("https://github.com/ghost/ghost")
            .await;

        assert_eq!(caching.inner.calls(), 2);
        assert_eq!(caching.cache_size(), 0);
    }
}
