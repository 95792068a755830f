//! Exclusion handling for generated files.
//! Decides which manifest entries are left out of the output tree, based on
//! persisted exclusions and the feature toggles chosen for a run.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub mod resolver;
pub mod rules;

pub use resolver::Excluder;
pub use rules::{build_rule_set, ToggleSet};

/// Ordered set of exclusion patterns.
///
/// Patterns are paths relative to the project root, naming either a single
/// file or a whole subtree. Pushing an existing pattern again is accepted and
/// leaves the set unchanged. Nothing is ever removed during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionRuleSet {
    patterns: IndexSet<String>,
}

impl ExclusionRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pattern, returning `false` if it was already present.
    pub fn push<S: Into<String>>(&mut self, pattern: S) -> bool {
        self.patterns.insert(pattern.into())
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains(pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the patterns in insertion order, as stored in the persisted configuration.
    pub fn to_vec(&self) -> Vec<String> {
        self.patterns.iter().cloned().collect()
    }
}

impl<S: Into<String>> Extend<S> for ExclusionRuleSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for pattern in iter {
            self.push(pattern);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionRuleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut rules = Self::new();
        rules.extend(iter);
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let mut rules = ExclusionRuleSet::new();
        assert!(rules.push("demo/src/favicon.ico"));
        assert!(!rules.push("demo/src/favicon.ico"));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let rules: ExclusionRuleSet = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(rules.to_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let rules: ExclusionRuleSet = ["demo/proxy.conf.json"].into_iter().collect();
        assert_eq!(serde_json::to_string(&rules).unwrap(), r#"["demo/proxy.conf.json"]"#);

        let parsed: ExclusionRuleSet =
            serde_json::from_str(r#"["a", "a", "b"]"#).unwrap();
        assert_eq!(parsed.to_vec(), vec!["a", "b"]);
    }
}
