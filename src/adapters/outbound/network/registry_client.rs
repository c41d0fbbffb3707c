use crate::enrichment::domain::{Ecosystem, RegistryMetadata, ResolvedIdentifier};
use crate::ports::outbound::RegistryGateway;
use crate::shared::dates;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Base URLs of the public registries, overridable through configuration
/// (mirrors, proxies).
#[derive(Debug, Clone)]
pub struct RegistryEndpoints {
    pub npm_base: String,
    pub pypi_base: String,
    pub maven_base: String,
}

impl Default for RegistryEndpoints {
    fn default() -> Self {
        Self {
            npm_base: "https://registry.npmjs.org".to_string(),
            pypi_base: "https://pypi.org".to_string(),
            maven_base: "https://search.maven.org".to_string(),
        }
    }
}

/// RegistryClient adapter for per-ecosystem package-registry lookups
///
/// Implements the RegistryGateway port against the npm registry, the PyPI
/// JSON API, and Maven Central's search endpoint. One request per lookup;
/// any transport error, non-success status, or unparsable body becomes the
/// port's no-data outcome.
pub struct RegistryClient {
    client: reqwest::Client,
    endpoints: RegistryEndpoints,
}

impl RegistryClient {
    /// Creates a new registry client with default configuration
    pub fn new(endpoints: RegistryEndpoints) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bom-enrich/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, endpoints })
    }

    /// Validates a package name or group for URL safety
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} is empty", component_type);
        }

        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    async fn fetch_npm(&self, name: &str) -> Result<RegistryMetadata> {
        Self::validate_url_component(name, "Package name")?;

        let url = format!(
            "{}/{}",
            self.endpoints.npm_base,
            urlencoding::encode(name)
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("npm registry returned status code {}", response.status());
        }

        let package: NpmPackage = response.json().await?;
        Ok(map_npm(package))
    }

    async fn fetch_pypi(&self, name: &str) -> Result<RegistryMetadata> {
        Self::validate_url_component(name, "Package name")?;

        let url = format!(
            "{}/pypi/{}/json",
            self.endpoints.pypi_base,
            urlencoding::encode(name)
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("PyPI API returned status code {}", response.status());
        }

        let package: PyPiPackage = response.json().await?;
        Ok(map_pypi(package))
    }

    /// Maven Central lookup through the relevance-ranked search endpoint.
    /// Only the top match is taken; there is no disambiguation beyond
    /// "first result".
    async fn fetch_maven(&self, group: &str, name: &str) -> Result<RegistryMetadata> {
        Self::validate_url_component(group, "Group id")?;
        Self::validate_url_component(name, "Artifact id")?;

        let query = format!("g:\"{}\" AND a:\"{}\"", group, name);
        let url = format!(
            "{}/solrsearch/select?q={}&rows=1&wt=json",
            self.endpoints.maven_base,
            urlencoding::encode(&query)
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!(
                "Maven Central search returned status code {}",
                response.status()
            );
        }

        let search: MavenSearch = response.json().await?;
        let doc = search
            .response
            .docs
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Maven Central search returned no documents"))?;
        Ok(map_maven(doc))
    }
}

#[async_trait]
impl RegistryGateway for RegistryClient {
    async fn fetch_metadata(&self, id: &ResolvedIdentifier) -> Option<RegistryMetadata> {
        let outcome = match id.ecosystem {
            Ecosystem::Npm => self.fetch_npm(&id.name).await,
            Ecosystem::PyPi => self.fetch_pypi(&id.name).await,
            Ecosystem::Maven => {
                let group = id.group.as_deref()?;
                self.fetch_maven(group, &id.name).await
            }
            Ecosystem::Unknown => return None,
        };

        match outcome {
            Ok(metadata) => Some(metadata),
            Err(error) => {
                tracing::debug!(
                    ecosystem = %id.ecosystem,
                    name = %id.name,
                    %error,
                    "registry lookup yielded no data"
                );
                None
            }
        }
    }
}

// ============================================================================
// Provider response models and field mapping
// ============================================================================

#[derive(Debug, Deserialize)]
struct NpmPackage {
    #[serde(default)]
    time: Option<NpmTime>,
    #[serde(rename = "dist-tags", default)]
    dist_tags: Option<NpmDistTags>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(default)]
    repository: Option<Value>,
    #[serde(default)]
    license: Option<Value>,
    #[serde(default)]
    author: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct NpmTime {
    #[serde(default)]
    created: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NpmDistTags {
    #[serde(default)]
    latest: Option<String>,
}

fn map_npm(package: NpmPackage) -> RegistryMetadata {
    RegistryMetadata {
        release_date: package
            .time
            .and_then(|t| t.created)
            .as_deref()
            .and_then(dates::to_dd_mm_yyyy),
        latest_version: package.dist_tags.and_then(|t| t.latest),
        description: package.description,
        homepage: package.homepage,
        // The repository field is an object with a url in modern packages
        // and a bare string in very old ones.
        repository: package
            .repository
            .as_ref()
            .and_then(|v| object_string(v, "url").or_else(|| string_value(v))),
        // Only the plain-string license form is kept; the deprecated
        // object form is too ambiguous to classify.
        license: package.license.as_ref().and_then(string_value),
        author: package
            .author
            .as_ref()
            .and_then(|v| object_string(v, "name").or_else(|| string_value(v))),
    }
}

#[derive(Debug, Deserialize)]
struct PyPiPackage {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    upload_time: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    home_page: Option<String>,
    #[serde(default)]
    project_urls: Option<HashMap<String, Option<String>>>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

fn map_pypi(package: PyPiPackage) -> RegistryMetadata {
    let info = package.info;
    RegistryMetadata {
        release_date: info.upload_time.as_deref().and_then(dates::to_dd_mm_yyyy),
        latest_version: info.version,
        description: info.summary,
        homepage: info.home_page,
        repository: info
            .project_urls
            .and_then(|urls| urls.get("Source").cloned().flatten()),
        license: info.license.filter(|l| !l.is_empty()),
        author: info.author.filter(|a| !a.is_empty()),
    }
}

#[derive(Debug, Deserialize)]
struct MavenSearch {
    response: MavenResponse,
}

#[derive(Debug, Deserialize)]
struct MavenResponse {
    #[serde(default)]
    docs: Vec<MavenDoc>,
}

#[derive(Debug, Deserialize)]
struct MavenDoc {
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(rename = "latestVersion", default)]
    latest_version: Option<String>,
}

fn map_maven(doc: MavenDoc) -> RegistryMetadata {
    RegistryMetadata {
        release_date: doc.timestamp.and_then(dates::millis_to_dd_mm_yyyy),
        latest_version: doc.latest_version,
        ..Default::default()
    }
}

fn string_value(value: &Value) -> Option<String> {
    value.as_str().map(String::from)
}

fn object_string(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_client_creation() {
        let client = RegistryClient::new(RegistryEndpoints::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_validate_url_component() {
        assert!(RegistryClient::validate_url_component("lodash", "name").is_ok());
        assert!(RegistryClient::validate_url_component("a/b", "name").is_err());
        assert!(RegistryClient::validate_url_component("a?b", "name").is_err());
        assert!(RegistryClient::validate_url_component("..", "name").is_err());
        assert!(RegistryClient::validate_url_component("", "name").is_err());
    }

    #[test]
    fn test_map_npm_modern_shape() {
        let json = r#"{
            "dist-tags": {"latest": "4.17.21"},
            "time": {"created": "2012-04-23T16:37:11.912Z"},
            "description": "Lodash modular utilities.",
            "homepage": "https://lodash.com/",
            "repository": {"type": "git", "url": "git+https://github.com/lodash/lodash.git"},
            "license": "MIT",
            "author": {"name": "John-David Dalton"}
        }"#;
        let package: NpmPackage = serde_json::from_str(json).unwrap();
        let metadata = map_npm(package);
        assert_eq!(metadata.release_date.as_deref(), Some("23-04-2012"));
        assert_eq!(metadata.latest_version.as_deref(), Some("4.17.21"));
        assert_eq!(metadata.license.as_deref(), Some("MIT"));
        assert_eq!(metadata.author.as_deref(), Some("John-David Dalton"));
        assert_eq!(
            metadata.repository.as_deref(),
            Some("git+https://github.com/lodash/lodash.git")
        );
    }

    #[test]
    fn test_map_npm_object_license_is_dropped() {
        let json = r#"{"license": {"type": "MIT", "url": "https://example.test"}}"#;
        let package: NpmPackage = serde_json::from_str(json).unwrap();
        let metadata = map_npm(package);
        assert_eq!(metadata.license, None);
    }

    #[test]
    fn test_map_pypi_shape() {
        let json = r#"{
            "info": {
                "version": "2.31.0",
                "upload_time": "2023-05-22T15:12:42",
                "summary": "Python HTTP for Humans.",
                "home_page": "https://requests.readthedocs.io",
                "project_urls": {"Source": "https://github.com/psf/requests", "Docs": null},
                "license": "Apache 2.0",
                "author": "Kenneth Reitz"
            }
        }"#;
        let package: PyPiPackage = serde_json::from_str(json).unwrap();
        let metadata = map_pypi(package);
        assert_eq!(metadata.release_date.as_deref(), Some("22-05-2023"));
        assert_eq!(metadata.latest_version.as_deref(), Some("2.31.0"));
        assert_eq!(
            metadata.repository.as_deref(),
            Some("https://github.com/psf/requests")
        );
        assert_eq!(metadata.license.as_deref(), Some("Apache 2.0"));
    }

    #[test]
    fn test_map_pypi_empty_strings_are_absent() {
        let json = r#"{"info": {"license": "", "author": ""}}"#;
        let package: PyPiPackage = serde_json::from_str(json).unwrap();
        let metadata = map_pypi(package);
        assert_eq!(metadata.license, None);
        assert_eq!(metadata.author, None);
    }

    #[test]
    fn test_map_maven_doc() {
        let json = r#"{
            "response": {
                "numFound": 1,
                "docs": [{"id": "org.apache.commons:commons-lang3",
                          "latestVersion": "3.14.0",
                          "timestamp": 1614556800000}]
            }
        }"#;
        let search: MavenSearch = serde_json::from_str(json).unwrap();
        let metadata = map_maven(search.response.docs.into_iter().next().unwrap());
        assert_eq!(metadata.release_date.as_deref(), Some("01-03-2021"));
        assert_eq!(metadata.latest_version.as_deref(), Some("3.14.0"));
        assert_eq!(metadata.description, None);
    }

    #[tokio::test]
    async fn test_unknown_ecosystem_is_no_data() {
        let client = RegistryClient::new(RegistryEndpoints::default()).unwrap();
        let id = ResolvedIdentifier {
            ecosystem: Ecosystem::Unknown,
            group: None,
            name: "anything".to_string(),
            version: "1.0".to_string(),
        };
        assert_eq!(client.fetch_metadata(&id).await, None);
    }

    #[tokio::test]
    async fn test_maven_without_group_is_no_data() {
        let client = RegistryClient::new(RegistryEndpoints::default()).unwrap();
        let id = ResolvedIdentifier {
            ecosystem: Ecosystem::Maven,
            group: None,
            name: "commons-lang3".to_string(),
            version: "3.12.0".to_string(),
        };
        assert_eq!(client.fetch_metadata(&id).await, None);
    }
}
