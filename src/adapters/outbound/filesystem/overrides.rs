use crate::ports::outbound::EolOverrideSource;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::OnceCell;

/// On-disk shape of the override file:
/// `{"maven": {"group:name": "DD-MM-YYYY", ...}}`.
#[derive(Debug, Default, Deserialize)]
struct OverridesFile {
    #[serde(default)]
    maven: HashMap<String, String>,
}

/// FileOverrideSource adapter for the end-of-life override table
///
/// Loads an optional JSON mapping lazily, at most once per session, and
/// keeps it for the lifetime of the source - including the not-found case,
/// which degrades to an empty mapping rather than an error. Keys are
/// normalized to lowercase on load.
pub struct FileOverrideSource {
    path: Option<PathBuf>,
    table: OnceCell<HashMap<String, String>>,
}

impl FileOverrideSource {
    /// Creates a new override source. `None` means no override file is
    /// configured and every lookup misses.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            table: OnceCell::new(),
        }
    }

    fn load_table(&self) -> HashMap<String, String> {
        let Some(path) = self.path.as_deref() else {
            return HashMap::new();
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "no EOL override table");
                return HashMap::new();
            }
        };

        match serde_json::from_str::<OverridesFile>(&content) {
            Ok(file) => file
                .maven
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "EOL override table unparsable");
                HashMap::new()
            }
        }
    }
}

#[async_trait]
impl EolOverrideSource for FileOverrideSource {
    async fn maven_override(&self, key: &str) -> Option<String> {
        let table = self.table.get_or_init(|| async { self.load_table() }).await;
        table.get(key).cloned()
    }
}
