use async_trait::async_trait;
use bom_enrich::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock LifecycleRegistry for testing.
///
/// Records every queried slug so tests can assert the candidate order the
/// reconciler tried.
pub struct MockLifecycleRegistry {
    pub products: HashMap<String, Vec<LifecycleCycle>>,
    queried: Arc<Mutex<Vec<String>>>,
}

impl MockLifecycleRegistry {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            queried: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_product(mut self, slug: &str, cycles: Vec<LifecycleCycle>) -> Self {
        self.products.insert(slug.to_string(), cycles);
        self
    }

    pub fn with_dated_cycle(self, slug: &str, cycle: &str, eol: &str) -> Self {
        self.with_product(
            slug,
            vec![LifecycleCycle {
                cycle: cycle.to_string(),
                eol: DateOrBool::Date(eol.to_string()),
            }],
        )
    }

    /// Handle for asserting which slugs were queried, in order.
    pub fn queried_handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.queried.clone()
    }
}

impl Default for MockLifecycleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LifecycleRegistry for MockLifecycleRegistry {
    async fn product_cycles(&self, slug: &str) -> Option<Vec<LifecycleCycle>> {
        self.queried.lock().unwrap().push(slug.to_string());
        self.products.get(slug).cloned()
    }
}

/// Mock EolOverrideSource for testing
pub struct MockOverrideSource {
    pub overrides: HashMap<String, String>,
}

impl MockOverrideSource {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, key: &str, date: &str) -> Self {
        self.overrides.insert(key.to_string(), date.to_string());
        self
    }
}

impl Default for MockOverrideSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EolOverrideSource for MockOverrideSource {
    async fn maven_override(&self, key: &str) -> Option<String> {
        self.overrides.get(key).cloned()
    }
}
