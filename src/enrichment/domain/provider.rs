//! Provider result bags.
//!
//! Each provider returns an immutable bag of independently optional fields.
//! Absence, not error, is the default outcome of a failed or inconclusive
//! lookup: gateways hand back `Option<Bag>` and the bags themselves carry
//! `Option` fields throughout.

use serde::{Deserialize, Serialize};

/// Metadata from a public package registry (npm, PyPI, Maven Central).
/// All dates are already normalized to `DD-MM-YYYY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryMetadata {
    pub release_date: Option<String>,
    pub latest_version: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
}

/// Best-effort metadata from a source-hosting platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoMetadata {
    /// Repository creation date, `DD-MM-YYYY`.
    pub release_date: Option<String>,
    pub last_updated: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub license: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
}

/// Aggregated answer from the external vulnerability signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityReport {
    pub has_vulnerabilities: bool,
    pub total: usize,
    /// Maximum severity score across known vulnerabilities, comparable
    /// against the 9/7/4 criticality thresholds.
    pub max_score: Option<f64>,
    /// Provider-supplied default classification, opaque to the core.
    pub default_criticality: Option<String>,
    /// "Fixed in" version hints ordered by preference; the first entry is
    /// the most preferred recommendation.
    pub fixed_versions: Vec<String>,
}

/// A lifecycle-registry field that is either a date string or a boolean
/// ("already end-of-life" / "not yet end-of-life").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateOrBool {
    Date(String),
    Bool(bool),
}

impl DateOrBool {
    /// The value as a `DD-MM-YYYY` date, if it is a parsable date string.
    /// Boolean values carry no date and normalize to `None`.
    pub fn as_dd_mm_yyyy(&self) -> Option<String> {
        match self {
            DateOrBool::Date(s) => crate::shared::dates::to_dd_mm_yyyy(s),
            DateOrBool::Bool(_) => None,
        }
    }
}

/// One release cycle row from the lifecycle registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleCycle {
    /// Release cycle identifier (e.g. "3.11", "2.17")
    pub cycle: String,
    /// End-of-life status: a date, or a boolean when no date is published
    pub eol: DateOrBool,
}
