//! Pure derivation rules turning provider results into the property set.
//!
//! Every function here is deterministic over its inputs; re-running the
//! derivation with identical provider answers reproduces identical values,
//! which is what makes the reconciler idempotent.

use semver::Version;

use super::criticality::resolve_criticality;
use crate::enrichment::domain::{
    Component, DeclaredVulnerability, Ecosystem, PropertyKey, PropertySet, RegistryMetadata,
    RepoMetadata, ResolvedIdentifier, VulnerabilityReport, NA,
};

/// Stars above this count read as a popularity signal in the notes.
const POPULARITY_THRESHOLD: u64 = 100;

/// Compute the full property set for one component from whichever provider
/// results are present. `None` inputs simply contribute nothing.
#[allow(clippy::too_many_arguments)]
pub fn derive_properties(
    component: &Component,
    id: &ResolvedIdentifier,
    registry: Option<&RegistryMetadata>,
    report: Option<&VulnerabilityReport>,
    repo: Option<&RepoMetadata>,
    eol_date: Option<&str>,
    declared: &[DeclaredVulnerability],
) -> PropertySet {
    let mut set = PropertySet::new();

    let status = patch_status(report, id, registry);
    set.set(PropertyKey::PatchStatus, status.clone());

    set.set_opt(
        PropertyKey::ReleaseDate,
        registry
            .and_then(|r| r.release_date.clone())
            .or_else(|| repo.and_then(|r| r.release_date.clone())),
    );

    set.set_opt(PropertyKey::EndOfLifeDate, eol_date.map(String::from));

    set.set_opt(
        PropertyKey::Criticality,
        resolve_criticality(declared, component.bom_ref.as_deref(), report),
    );

    let license = registry
        .and_then(|r| r.license.as_deref())
        .or_else(|| repo.and_then(|r| r.license.as_deref()));
    set.set(PropertyKey::UsageRestrictions, usage_restrictions(license));

    set.set(PropertyKey::CommentsOrNotes, comments(registry, report, repo));

    set.set(
        PropertyKey::ExecutableProperty,
        if id.ecosystem == Ecosystem::Npm {
            "Yes"
        } else {
            "No"
        },
    );
    set.set(PropertyKey::ArchiveProperty, "No");
    set.set(PropertyKey::StructuredProperty, "Yes");

    set.set_opt(
        PropertyKey::UniqueIdentifier,
        component
            .purl
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| Some(component.name.clone()).filter(|n| !n.is_empty())),
    );

    set.set(PropertyKey::ComponentSupplier, supplier(registry, repo));
    set.set(PropertyKey::ComponentOrigin, origin(registry, repo));

    set
}

/// Patch status from the vulnerability signal and the registry's latest
/// version. Known vulnerabilities always advise an update, citing the most
/// preferred fixed version when one is known.
pub fn patch_status(
    report: Option<&VulnerabilityReport>,
    id: &ResolvedIdentifier,
    registry: Option<&RegistryMetadata>,
) -> String {
    if let Some(report) = report.filter(|r| r.has_vulnerabilities) {
        return match report.fixed_versions.first() {
            Some(fixed) => format!("Update available (>= {fixed})"),
            None => format!("Update available (>= {NA})"),
        };
    }

    if let Some(latest) = registry.and_then(|r| r.latest_version.as_deref()) {
        if !id.version.is_empty() && is_newer(latest, &id.version) {
            return format!("Update available (latest {latest})");
        }
    }

    "Up to date".to_string()
}

/// Whether `latest` is strictly greater than `installed`. Both sides are
/// compared as semver when they parse (missing minor/patch segments are
/// padded); otherwise inequality still counts as newer, since a registry
/// reporting a different latest version is an update signal even when the
/// scheme is unorderable.
pub fn is_newer(latest: &str, installed: &str) -> bool {
    match (parse_lenient(latest), parse_lenient(installed)) {
        (Some(l), Some(i)) => l > i,
        _ => latest != installed,
    }
}

fn parse_lenient(version: &str) -> Option<Version> {
    let version = version.trim().trim_start_matches('v');
    if let Ok(parsed) = Version::parse(version) {
        return Some(parsed);
    }

    // Pad bare "3" / "3.12" forms so they become orderable.
    let segments: Vec<&str> = version.split('.').collect();
    let all_numeric = segments
        .iter()
        .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()));
    if !all_numeric {
        return None;
    }
    let padded = match segments.len() {
        1 => format!("{version}.0.0"),
        2 => format!("{version}.0"),
        _ => return None,
    };
    Version::parse(&padded).ok()
}

/// Classify license text into usage-restriction families by keyword.
/// Ordering matters: AGPL is matched before the broader GPL family.
pub fn usage_restrictions(license: Option<&str>) -> String {
    let Some(license) = license.filter(|l| !l.is_empty()) else {
        return NA.to_string();
    };
    let lower = license.to_lowercase();
    if lower.contains("agpl") {
        "AGPL License - Strong copyleft restrictions".to_string()
    } else if lower.contains("gpl") {
        "GPL License - Copyleft restrictions apply".to_string()
    } else if lower.contains("mit") || lower.contains("apache") {
        "Permissive license - Minimal restrictions".to_string()
    } else {
        NA.to_string()
    }
}

/// Build the notes field by joining the available human-readable signals
/// with "; ". A recommended version is appended whenever the vulnerability
/// signal reports anything, citing the preferred fix or "NA" when none is
/// known. No signals at all yields the sentinel.
pub fn comments(
    registry: Option<&RegistryMetadata>,
    report: Option<&VulnerabilityReport>,
    repo: Option<&RepoMetadata>,
) -> String {
    let mut notes: Vec<String> = Vec::new();

    if let Some(description) = registry.and_then(|r| r.description.as_deref()) {
        notes.push(format!("Description: {description}"));
    }
    if let Some(report) = report.filter(|r| r.total > 0) {
        notes.push(format!("{} known vulnerabilities", report.total));
    }
    if let Some(stars) = repo.map(|r| r.stars).filter(|s| *s > POPULARITY_THRESHOLD) {
        notes.push(format!("Popular project ({stars} stars)"));
    }
    if let Some(report) = report.filter(|r| r.has_vulnerabilities) {
        let recommended = report.fixed_versions.first().map(String::as_str).unwrap_or(NA);
        notes.push(format!("Recommended version: {recommended}"));
    }

    if notes.is_empty() {
        NA.to_string()
    } else {
        notes.join("; ")
    }
}

/// Supplier heuristic: community popularity first, then registry
/// author presence, else an anonymous third party.
pub fn supplier(registry: Option<&RegistryMetadata>, repo: Option<&RepoMetadata>) -> String {
    if repo.map(|r| r.stars).unwrap_or(0) > 0 {
        return "Open-source".to_string();
    }
    if registry.and_then(|r| r.author.as_deref()).is_some() {
        return "Vendor".to_string();
    }
    "Third-party".to_string()
}

/// Origin heuristic: anything with community stars is open source, a
/// proprietary license marker flips it, and open source is the default.
pub fn origin(registry: Option<&RegistryMetadata>, repo: Option<&RepoMetadata>) -> String {
    if repo.map(|r| r.stars).unwrap_or(0) > 0 {
        return "Open-source".to_string();
    }
    let proprietary = registry
        .and_then(|r| r.license.as_deref())
        .map(|l| l.to_lowercase().contains("proprietary"))
        .unwrap_or(false);
    if proprietary {
        return "Proprietary".to_string();
    }
    "Open-source".to_string()
}
