//! Configuration file support for bom-enrich.
//!
//! Provides YAML-based configuration through `bom-enrich.config.yml`
//! files: provider endpoint overrides, the end-of-life override table
//! path, and the GitHub access token. An explicit `github_token` in the
//! config takes precedence over the `GITHUB_TOKEN` environment variable.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "bom-enrich.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub github_token: Option<String>,
    pub overrides_path: Option<String>,
    pub endpoints: Option<EndpointOverrides>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Provider base-URL overrides (mirrors, proxies, test servers).
#[derive(Debug, Deserialize, Default)]
pub struct EndpointOverrides {
    pub npm: Option<String>,
    pub pypi: Option<String>,
    pub maven: Option<String>,
    pub github: Option<String>,
    pub eol: Option<String>,
    pub osv: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref endpoints) = config.endpoints {
        let entries = [
            ("npm", &endpoints.npm),
            ("pypi", &endpoints.pypi),
            ("maven", &endpoints.maven),
            ("github", &endpoints.github),
            ("eol", &endpoints.eol),
            ("osv", &endpoints.osv),
        ];
        for (name, value) in entries {
            if let Some(url) = value {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    bail!(
                        "Invalid config: endpoints.{} must be an http(s) URL, got \"{}\".\n\n\
                         💡 Hint: Endpoint overrides replace the full base URL, e.g. \"https://registry.npmjs.org\".",
                        name,
                        url
                    );
                }
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "github_token: ghp_test\n\
             overrides_path: ./eol-overrides.json\n\
             endpoints:\n\
             \x20 npm: https://registry.npmjs.org\n\
             \x20 eol: https://endoflife.date\n",
        )
        .unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.github_token.as_deref(), Some("ghp_test"));
        assert_eq!(
            config.overrides_path.as_deref(),
            Some("./eol-overrides.json")
        );
        let endpoints = config.endpoints.unwrap();
        assert_eq!(
            endpoints.npm.as_deref(),
            Some("https://registry.npmjs.org")
        );
        assert_eq!(endpoints.maven, None);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = load_config_from_path(Path::new("/nonexistent/bom-enrich.config.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let result = discover_config(temp_dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_discover_finds_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "github_token: t\n").unwrap();
        let config = discover_config(temp_dir.path()).unwrap().unwrap();
        assert_eq!(config.github_token.as_deref(), Some("t"));
    }

    #[test]
    fn test_invalid_endpoint_url_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "endpoints:\n  npm: registry.npmjs.org\n").unwrap();

        let result = load_config_from_path(&path);
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("endpoints.npm"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "github_token: [unclosed\n").unwrap();
        assert!(load_config_from_path(&path).is_err());
    }
}
