//! Identifier resolution: from a package-url string (or, failing that, the
//! component's own fields) to an ecosystem-qualified reference.

use super::component::Component;

/// The package-distribution system a component belongs to.
///
/// Never absent: `Unknown` is the explicit tag for "no signal matched".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ecosystem {
    Npm,
    PyPi,
    Maven,
    #[default]
    Unknown,
}

impl Ecosystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::PyPi => "pypi",
            Ecosystem::Maven => "maven",
            Ecosystem::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ecosystem-qualified package reference derived from a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentifier {
    pub ecosystem: Ecosystem,
    /// Present only for maven coordinates.
    pub group: Option<String>,
    pub name: String,
    pub version: String,
}

impl ResolvedIdentifier {
    /// Resolve a component to an identifier. Total: parsing failures fall
    /// back to the component's own fields, and the worst case is the
    /// `Unknown` ecosystem with name/version copied verbatim.
    pub fn resolve(component: &Component) -> Self {
        if let Some(id) = component.purl.as_deref().and_then(parse_purl) {
            return id;
        }

        let name = component.name.clone();
        let version = component.version_str().to_string();

        // A group alongside a name reads as maven coordinates.
        match component.group.as_deref() {
            Some(group) if !group.is_empty() && !name.is_empty() => ResolvedIdentifier {
                ecosystem: Ecosystem::Maven,
                group: Some(group.to_string()),
                name,
                version,
            },
            _ => ResolvedIdentifier {
                ecosystem: Ecosystem::Unknown,
                group: None,
                name,
                version,
            },
        }
    }
}

/// Parse `pkg:type/[group/]name@version[?qualifiers]`.
///
/// For type `maven` the group is mandatory and taken from the path segment
/// preceding the name; for every other type the group is absent and the
/// type becomes the ecosystem tag (`Unknown` for types this pipeline has
/// no registry for). Returns `None` on any malformed input.
fn parse_purl(purl: &str) -> Option<ResolvedIdentifier> {
    let rest = purl.strip_prefix("pkg:")?;

    let (path, version) = match rest.split_once('@') {
        Some((path, version_part)) => {
            // Version is the substring before any qualifier suffix.
            let version = version_part.split('?').next().unwrap_or("");
            (path, version.to_string())
        }
        None => (rest, String::new()),
    };

    let (purl_type, name_path) = path.split_once('/')?;
    let purl_type = purl_type.to_ascii_lowercase();

    if purl_type == "maven" {
        let (group, name) = name_path.split_once('/')?;
        let name = name.split('?').next().unwrap_or("");
        if group.is_empty() || name.is_empty() {
            return None;
        }
        return Some(ResolvedIdentifier {
            ecosystem: Ecosystem::Maven,
            group: Some(group.to_string()),
            name: name.to_string(),
            version,
        });
    }

    let name = name_path.split('?').next().unwrap_or("");
    if name.is_empty() {
        return None;
    }

    let ecosystem = match purl_type.as_str() {
        "npm" => Ecosystem::Npm,
        "pypi" => Ecosystem::PyPi,
        _ => Ecosystem::Unknown,
    };

    Some(ResolvedIdentifier {
        ecosystem,
        group: None,
        name: name.to_string(),
        version,
    })
}
