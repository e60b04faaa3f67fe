//! Environment overrides injected into every spawned command
//!
//! The overrides are carried as an explicit value and applied per child process.
//! The environment of the devtask process itself is never modified.

use std::collections::BTreeMap;

/// Variable read by the server tooling to switch on documentation generation
pub const GEN_DOCS_VAR: &str = "__GEN_DOCS__";

/// Immutable set of variables added on top of the inherited environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEnvironment {
    overrides: BTreeMap<String, String>,
}

impl TaskEnvironment {
    /// The environment every task runs with: the inherited one plus `__GEN_DOCS__=1`
    pub fn standard() -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert(GEN_DOCS_VAR.to_string(), "1".to_string());
        Self { overrides }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.overrides.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl Default for TaskEnvironment {
    fn default() -> Self {
        Self::standard()
    }
}
