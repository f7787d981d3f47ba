//! Port for reading process environment variables.
//!
//! The resolver never touches `std::env` directly; the binary injects the
//! real process environment and tests inject a [`MapEnvironment`].

use std::collections::HashMap;

/// Read-only view of environment variables.
pub trait EnvironmentSource: Send + Sync {
    /// Value of `name`, or `None` if the variable is not set.
    ///
    /// A variable set to the empty string is present and returns `Some("")`.
    fn var(&self, name: &str) -> Option<String>;
}

/// In-memory environment, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentSource for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_environment_lookup() {
        let env = MapEnvironment::new().with("WIDTH", "640").with("LOG_FILE", "");
        assert_eq!(env.var("WIDTH").as_deref(), Some("640"));
        assert_eq!(env.var("LOG_FILE").as_deref(), Some(""));
        assert!(env.var("HEIGHT").is_none());
    }

    #[test]
    fn test_collect_from_pairs() {
        let env: MapEnvironment = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("B").as_deref(), Some("2"));
    }
}
