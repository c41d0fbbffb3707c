use crate::enrichment::domain::{Ecosystem, ResolvedIdentifier, Severity, VulnerabilityReport};
use crate::ports::outbound::VulnerabilitySignal;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// OsvClient adapter - the default vulnerability signal
///
/// Implements the VulnerabilitySignal port against the OSV.dev query API.
/// One query per identifier; the response is aggregated into the report
/// shape the reconciler consumes: count, maximum severity score, default
/// classification, and fixed-version hints in advisory order.
pub struct OsvClient {
    client: reqwest::Client,
    api_base: String,
}

impl OsvClient {
    /// Creates a new OSV API client
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bom-enrich/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }

    async fn query(&self, query: &OsvQuery) -> Result<OsvQueryResponse> {
        let url = format!("{}/v1/query", self.api_base);
        let response = self.client.post(&url).json(query).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("OSV API returned status code {}", response.status());
        }

        let parsed: OsvQueryResponse = response.json().await?;
        Ok(parsed)
    }
}

#[async_trait]
impl VulnerabilitySignal for OsvClient {
    async fn fetch_report(&self, id: &ResolvedIdentifier) -> Option<VulnerabilityReport> {
        let query = build_query(id)?;

        match self.query(&query).await {
            Ok(response) => Some(build_report(response.vulns)),
            Err(error) => {
                tracing::debug!(name = %id.name, %error, "vulnerability lookup yielded no data");
                None
            }
        }
    }
}

/// Map a resolved identifier to OSV query coordinates. Maven packages are
/// addressed as `group:name`; unknown ecosystems have no OSV namespace.
fn build_query(id: &ResolvedIdentifier) -> Option<OsvQuery> {
    let (ecosystem, name) = match id.ecosystem {
        Ecosystem::Npm => ("npm", id.name.clone()),
        Ecosystem::PyPi => ("PyPI", id.name.clone()),
        Ecosystem::Maven => ("Maven", format!("{}:{}", id.group.as_deref()?, id.name)),
        Ecosystem::Unknown => return None,
    };

    Some(OsvQuery {
        package: OsvPackage {
            name,
            ecosystem: ecosystem.to_string(),
        },
        version: Some(id.version.clone()).filter(|v| !v.is_empty()),
    })
}

/// Aggregate raw OSV records into the report shape.
fn build_report(vulns: Vec<OsvVulnerability>) -> VulnerabilityReport {
    let total = vulns.len();

    let mut max_score: Option<f64> = None;
    for vuln in &vulns {
        if let Some(score) = vuln_score(vuln) {
            max_score = Some(max_score.map_or(score, |current| current.max(score)));
        }
    }

    // Prefer the numeric classification; fall back to the worst
    // database-specific label when no vector is published.
    let classification = max_score.and_then(Severity::from_score).or_else(|| {
        vulns
            .iter()
            .filter_map(|v| {
                v.database_specific
                    .as_ref()?
                    .severity
                    .as_deref()
                    .and_then(Severity::from_label)
            })
            .max()
    });

    let mut fixed_versions: Vec<String> = Vec::new();
    for vuln in &vulns {
        if let Some(fixed) = first_fixed_version(vuln) {
            if !fixed_versions.contains(&fixed) {
                fixed_versions.push(fixed);
            }
        }
    }

    VulnerabilityReport {
        has_vulnerabilities: total > 0,
        total,
        max_score,
        default_criticality: classification.map(|s| s.as_str().to_string()),
        fixed_versions,
    }
}

/// Highest CVSS base score published for one record.
fn vuln_score(vuln: &OsvVulnerability) -> Option<f64> {
    let severities = vuln.severity.as_ref()?;
    let mut best: Option<f64> = None;
    for severity in severities {
        if severity.severity_type != "CVSS_V3" && severity.severity_type != "CVSS_V4" {
            continue;
        }
        if let Some(score) = cvss_base_score(&severity.score) {
            best = Some(best.map_or(score, |current| current.max(score)));
        }
    }
    best
}

/// First fixed-version event across the record's affected ranges.
fn first_fixed_version(vuln: &OsvVulnerability) -> Option<String> {
    vuln.affected.as_ref()?.iter().find_map(|affected| {
        affected
            .ranges
            .as_ref()?
            .iter()
            .find_map(|range| range.events.iter().find_map(|event| event.fixed.clone()))
    })
}

/// CVSS v3 base score computed from a vector string such as
/// `CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H`.
fn cvss_base_score(vector: &str) -> Option<f64> {
    let metrics: HashMap<&str, &str> = vector
        .split('/')
        .skip(1)
        .filter_map(|part| part.split_once(':'))
        .collect();

    let scope_changed = match *metrics.get("S")? {
        "U" => false,
        "C" => true,
        _ => return None,
    };

    let attack_vector = match *metrics.get("AV")? {
        "N" => 0.85,
        "A" => 0.62,
        "L" => 0.55,
        "P" => 0.2,
        _ => return None,
    };
    let attack_complexity = match *metrics.get("AC")? {
        "L" => 0.77,
        "H" => 0.44,
        _ => return None,
    };
    let privileges = match (*metrics.get("PR")?, scope_changed) {
        ("N", _) => 0.85,
        ("L", false) => 0.62,
        ("L", true) => 0.68,
        ("H", false) => 0.27,
        ("H", true) => 0.5,
        _ => return None,
    };
    let user_interaction = match *metrics.get("UI")? {
        "N" => 0.85,
        "R" => 0.62,
        _ => return None,
    };

    let confidentiality = impact_weight(metrics.get("C")?)?;
    let integrity = impact_weight(metrics.get("I")?)?;
    let availability = impact_weight(metrics.get("A")?)?;

    let iss = 1.0 - ((1.0 - confidentiality) * (1.0 - integrity) * (1.0 - availability));
    let impact = if scope_changed {
        7.52 * (iss - 0.029) - 3.25 * (iss - 0.02_f64).powi(15)
    } else {
        6.42 * iss
    };
    let exploitability = 8.22 * attack_vector * attack_complexity * privileges * user_interaction;

    let base_score = if impact <= 0.0 {
        0.0
    } else if scope_changed {
        f64::min(1.08 * (impact + exploitability), 10.0)
    } else {
        f64::min(impact + exploitability, 10.0)
    };

    // CVSS rounds the base score up to one decimal place.
    Some((base_score * 10.0).ceil() / 10.0)
}

fn impact_weight(metric: &str) -> Option<f64> {
    match metric {
        "N" => Some(0.0),
        "L" => Some(0.22),
        "H" => Some(0.56),
        _ => None,
    }
}

// OSV API request/response structures

#[derive(Debug, Serialize)]
struct OsvQuery {
    package: OsvPackage,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct OsvPackage {
    name: String,
    ecosystem: String, // "npm" | "PyPI" | "Maven"
}

#[derive(Debug, Deserialize)]
struct OsvQueryResponse {
    #[serde(default)]
    vulns: Vec<OsvVulnerability>,
}

#[derive(Debug, Deserialize)]
struct OsvVulnerability {
    #[allow(dead_code)]
    id: String,
    #[serde(default)]
    severity: Option<Vec<OsvSeverity>>,
    #[serde(default)]
    database_specific: Option<DatabaseSpecific>,
    #[serde(default)]
    affected: Option<Vec<OsvAffected>>,
}

#[derive(Debug, Deserialize)]
struct OsvSeverity {
    #[serde(rename = "type")]
    severity_type: String, // "CVSS_V3"
    score: String, // e.g., "CVSS:3.1/AV:N/AC:L/..."
}

#[derive(Debug, Deserialize)]
struct DatabaseSpecific {
    #[serde(default)]
    severity: Option<String>, // "CRITICAL", "HIGH", "MODERATE", "LOW"
}

#[derive(Debug, Deserialize)]
struct OsvAffected {
    #[serde(default)]
    ranges: Option<Vec<OsvRange>>,
}

#[derive(Debug, Deserialize)]
struct OsvRange {
    events: Vec<OsvEvent>,
}

#[derive(Debug, Deserialize)]
struct OsvEvent {
    #[serde(default)]
    fixed: Option<String>,
}
