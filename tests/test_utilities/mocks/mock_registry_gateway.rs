use async_trait::async_trait;
use bom_enrich::prelude::*;
use std::collections::HashMap;

/// Mock RegistryGateway for testing
pub struct MockRegistryGateway {
    pub answers: HashMap<String, RegistryMetadata>,
    pub should_fail: bool,
}

impl MockRegistryGateway {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_metadata(mut self, name: &str, metadata: RegistryMetadata) -> Self {
        self.answers.insert(name.to_string(), metadata);
        self
    }

    pub fn with_latest(self, name: &str, latest: &str) -> Self {
        self.with_metadata(
            name,
            RegistryMetadata {
                latest_version: Some(latest.to_string()),
                ..Default::default()
            },
        )
    }

    /// Simulates a provider whose every lookup fails (network down,
    /// non-success statuses): the gateway answers no-data for everything.
    pub fn with_failure() -> Self {
        Self {
            answers: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockRegistryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryGateway for MockRegistryGateway {
    async fn fetch_metadata(&self, id: &ResolvedIdentifier) -> Option<RegistryMetadata> {
        if self.should_fail {
            return None;
        }
        self.answers.get(&id.name).cloned()
    }
}
