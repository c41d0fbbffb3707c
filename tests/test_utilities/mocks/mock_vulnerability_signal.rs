use async_trait::async_trait;
use bom_enrich::prelude::*;
use std::collections::HashMap;

/// Mock VulnerabilitySignal for testing, keyed by package name
pub struct MockVulnerabilitySignal {
    pub answers: HashMap<String, VulnerabilityReport>,
    pub should_fail: bool,
}

impl MockVulnerabilitySignal {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_report(mut self, name: &str, report: VulnerabilityReport) -> Self {
        self.answers.insert(name.to_string(), report);
        self
    }

    pub fn with_vulnerabilities(self, name: &str, max_score: f64, fixed: &[&str]) -> Self {
        let count = fixed.len().max(1);
        self.with_report(
            name,
            VulnerabilityReport {
                has_vulnerabilities: true,
                total: count,
                max_score: Some(max_score),
                default_criticality: None,
                fixed_versions: fixed.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    pub fn with_failure() -> Self {
        Self {
            answers: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockVulnerabilitySignal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VulnerabilitySignal for MockVulnerabilitySignal {
    async fn fetch_report(&self, id: &ResolvedIdentifier) -> Option<VulnerabilityReport> {
        if self.should_fail {
            return None;
        }
        self.answers.get(&id.name).cloned()
    }
}
