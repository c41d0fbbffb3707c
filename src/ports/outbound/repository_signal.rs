use crate::enrichment::domain::RepoMetadata;
use async_trait::async_trait;

/// RepositorySignal port for best-effort source-hosting metadata
///
/// Keyed off a free-form repository URL found on the component; the URL
/// may be any of several historical shapes (`.git` suffixes, protocol
/// prefixes, `scm:` wrappers).
///
/// # No-data semantics
/// `None` covers unextractable owner/repo pairs, missing credentials
/// (implementations fail closed rather than making unauthenticated calls),
/// and request failures after the single bounded rate-limit retry.
#[async_trait]
pub trait RepositorySignal: Send + Sync {
    async fn fetch_repo_metadata(&self, repo_url: &str) -> Option<RepoMetadata>;
}
