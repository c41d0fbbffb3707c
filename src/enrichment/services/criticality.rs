//! Criticality resolution.
//!
//! Strict precedence, first source that yields a value wins:
//! 1. the BOM's own declared ratings for this component's reference id,
//! 2. the external signal's numeric score against the 9/7/4 thresholds,
//! 3. the provider-supplied default classification.
//!
//! The declared-over-computed ordering is deliberate and preserved even
//! when the external score would imply a higher severity: the document
//! author's declaration wins.

use crate::enrichment::domain::{DeclaredVulnerability, Severity, VulnerabilityReport};

/// Resolve the criticality value for a component, or `None` when no source
/// yields anything (the merge turns that into the "NA" sentinel).
pub fn resolve_criticality(
    declared: &[DeclaredVulnerability],
    bom_ref: Option<&str>,
    report: Option<&VulnerabilityReport>,
) -> Option<String> {
    if let Some(severity) = declared_severity(declared, bom_ref) {
        return Some(severity.as_str().to_string());
    }

    if let Some(severity) = report
        .and_then(|r| r.max_score)
        .and_then(Severity::from_score)
    {
        return Some(severity.as_str().to_string());
    }

    report.and_then(|r| r.default_criticality.clone())
}

/// The single most severe declared rating across all vulnerabilities whose
/// `affects` list names this component's reference id. Declarations without
/// ratings, and ratings without a recognizable severity, contribute nothing.
fn declared_severity(
    declared: &[DeclaredVulnerability],
    bom_ref: Option<&str>,
) -> Option<Severity> {
    let bom_ref = bom_ref?;

    declared
        .iter()
        .filter(|v| !v.ratings.is_empty() && v.affects_ref(bom_ref))
        .flat_map(|v| {
            v.ratings
                .iter()
                .filter_map(|r| r.severity.as_deref().and_then(Severity::from_label))
        })
        .max()
}
