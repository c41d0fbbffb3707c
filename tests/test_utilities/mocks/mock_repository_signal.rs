use async_trait::async_trait;
use bom_enrich::prelude::*;
use std::collections::HashMap;

/// Mock RepositorySignal for testing, keyed by the raw repository URL
pub struct MockRepositorySignal {
    pub answers: HashMap<String, RepoMetadata>,
    pub should_fail: bool,
}

impl MockRepositorySignal {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_repo(mut self, url: &str, stars: u64) -> Self {
        self.answers.insert(
            url.to_string(),
            RepoMetadata {
                stars,
                ..Default::default()
            },
        );
        self
    }

    pub fn with_metadata(mut self, url: &str, metadata: RepoMetadata) -> Self {
        self.answers.insert(url.to_string(), metadata);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            answers: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockRepositorySignal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositorySignal for MockRepositorySignal {
    async fn fetch_repo_metadata(&self, repo_url: &str) -> Option<RepoMetadata> {
        if self.should_fail {
            return None;
        }
        self.answers.get(repo_url).cloned()
    }
}
