//! Decides whether a candidate path is excluded by a rule set.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;

use super::ExclusionRuleSet;
use crate::error::{Error, Result};
use crate::path::normalize;

/// Characters that turn a pattern into a glob instead of a path prefix.
const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Answers "is this path excluded?" for one generation run.
///
/// Plain patterns exclude the path they name and everything below it; the
/// comparison is made segment by segment, so `demo` covers `demo/src/main.ts`
/// but not `demo2/src/main.ts`. Patterns containing glob metacharacters are
/// matched against the candidate's root-relative path instead; `*` stops at
/// `/`, `**` crosses directories.
#[derive(Debug)]
pub struct Excluder {
    root: PathBuf,
    prefixes: Vec<(String, PathBuf)>,
    glob_patterns: Vec<String>,
    globs: GlobSet,
}

impl Excluder {
    /// Normalizes every pattern of `rules` against `root`.
    ///
    /// # Errors
    /// * `Error::PathError` if a pattern cannot be normalized or names the root itself
    /// * `Error::GlobSetParseError` if a glob pattern is malformed
    pub fn new<P: AsRef<Path>>(rules: &ExclusionRuleSet, root: P) -> Result<Self> {
        let root = normalize(root, "")?;
        let mut prefixes = Vec::new();
        let mut glob_patterns = Vec::new();
        let mut builder = GlobSetBuilder::new();

        for pattern in rules.iter() {
            if pattern.contains(GLOB_META) {
                let unified = pattern.replace('\\', "/");
                let glob = GlobBuilder::new(unified.trim_start_matches("./"))
                    .literal_separator(true)
                    .build()?;
                builder.add(glob);
                glob_patterns.push(pattern.to_string());
                continue;
            }

            let normalized = normalize(&root, pattern)?;
            if normalized == root {
                return Err(Error::PathError {
                    path: pattern.to_string(),
                    reason: "exclusion pattern covers the whole project".to_string(),
                });
            }
            prefixes.push((pattern.to_string(), normalized));
        }

        Ok(Self { root, prefixes, glob_patterns, globs: builder.build()? })
    }

    /// Returns the first pattern excluding `candidate`, if any.
    ///
    /// # Errors
    /// * `Error::PathError` if `candidate` cannot be normalized
    pub fn matching_pattern(&self, candidate: &str) -> Result<Option<&str>> {
        let normalized = normalize(&self.root, candidate)?;

        if let Some((pattern, _)) =
            self.prefixes.iter().find(|(_, prefix)| normalized.starts_with(prefix))
        {
            return Ok(Some(pattern.as_str()));
        }

        if self.glob_patterns.is_empty() {
            return Ok(None);
        }

        // Globs only apply to paths inside the project.
        let Ok(relative) = normalized.strip_prefix(&self.root) else {
            return Ok(None);
        };
        Ok(self
            .globs
            .matches(relative)
            .first()
            .map(|&index| self.glob_patterns[index].as_str()))
    }

    /// Returns `true` if `candidate` is excluded by any pattern.
    pub fn is_excluded(&self, candidate: &str) -> Result<bool> {
        let pattern = self.matching_pattern(candidate)?;
        if let Some(pattern) = pattern {
            debug!("'{candidate}' is excluded by '{pattern}'");
        }
        Ok(pattern.is_some())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
