//! Serde model of the bill-of-materials document consumed by the pipeline.
//!
//! Only the fields the enrichment core reads or writes are modeled
//! explicitly; everything else in the document is captured in flattened
//! value maps so the merge contract can round-trip a document without
//! dropping data it does not understand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A CycloneDX-style BOM document: the component list plus the declared
/// vulnerability list, with all other top-level fields preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<DeclaredVulnerability>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One software component record. Read-only to the core except for
/// `properties`, which receives the merged enrichment result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,

    /// Stable reference id correlating the component with declared
    /// vulnerability `affects` entries.
    #[serde(rename = "bom-ref", default, skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<String>,

    #[serde(
        rename = "externalReferences",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub external_references: Vec<ExternalReference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Component {
    /// The component version, or the empty string when absent.
    pub fn version_str(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }

    /// First external reference pointing at a source repository, if any.
    pub fn repository_url(&self) -> Option<&str> {
        self.external_references
            .iter()
            .find(|r| r.ref_type == "vcs" || r.ref_type == "repository")
            .map(|r| r.url.as_str())
    }
}

/// A typed URL attached to a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalReference {
    #[serde(rename = "type", default)]
    pub ref_type: String,

    #[serde(default)]
    pub url: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A name/value property on a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// A vulnerability declared inside the BOM document itself, used by the
/// criticality precedence rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclaredVulnerability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<SeverityRating>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affects: Vec<AffectedRef>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeclaredVulnerability {
    /// Whether this declaration names the given component reference id.
    pub fn affects_ref(&self, bom_ref: &str) -> bool {
        self.affects.iter().any(|a| a.reference == bom_ref)
    }
}

/// A severity rating attached to a declared vulnerability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeverityRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A reference entry inside a declared vulnerability's `affects` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffectedRef {
    #[serde(rename = "ref", default)]
    pub reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bom_json() -> &'static str {
        r#"{
            "bomFormat": "CycloneDX",
            "specVersion": "1.5",
            "components": [
                {
                    "type": "library",
                    "bom-ref": "pkg:npm/lodash@4.17.21",
                    "name": "lodash",
                    "version": "4.17.21",
                    "purl": "pkg:npm/lodash@4.17.21",
                    "externalReferences": [
                        {"type": "vcs", "url": "https://github.com/lodash/lodash.git"}
                    ],
                    "properties": [
                        {"name": "Criticality", "value": "Low"}
                    ]
                }
            ],
            "vulnerabilities": [
                {
                    "id": "CVE-2021-0001",
                    "ratings": [{"severity": "high"}],
                    "affects": [{"ref": "pkg:npm/lodash@4.17.21"}]
                }
            ]
        }"#
    }

    #[test]
    fn test_bom_deserialization() {
        let bom: Bom = serde_json::from_str(sample_bom_json()).unwrap();
        assert_eq!(bom.components.len(), 1);
        assert_eq!(bom.components[0].name, "lodash");
        assert_eq!(bom.components[0].version_str(), "4.17.21");
        assert_eq!(
            bom.components[0].repository_url(),
            Some("https://github.com/lodash/lodash.git")
        );
        assert_eq!(bom.vulnerabilities.len(), 1);
        assert!(bom.vulnerabilities[0].affects_ref("pkg:npm/lodash@4.17.21"));
        assert!(!bom.vulnerabilities[0].affects_ref("pkg:npm/other@1.0.0"));
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let bom: Bom = serde_json::from_str(sample_bom_json()).unwrap();
        // Top-level fields the model does not know about survive a round trip.
        assert_eq!(
            bom.extra.get("bomFormat"),
            Some(&Value::String("CycloneDX".to_string()))
        );
        let serialized = serde_json::to_string(&bom).unwrap();
        let reparsed: Bom = serde_json::from_str(&serialized).unwrap();
        assert_eq!(bom, reparsed);
        // Component-level unknown fields too.
        assert_eq!(
            reparsed.components[0].extra.get("type"),
            Some(&Value::String("library".to_string()))
        );
    }

    #[test]
    fn test_missing_optional_fields() {
        let bom: Bom = serde_json::from_str(r#"{"components": [{"name": "x"}]}"#).unwrap();
        let component = &bom.components[0];
        assert_eq!(component.version_str(), "");
        assert_eq!(component.repository_url(), None);
        assert!(component.properties.is_empty());
    }
}
