//! Configuration handling for generated projects.
//! Loads and stores the persisted configuration of a project and resolves the
//! answers and command-line toggles of a run into one immutable value.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use cruet::Inflector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_NG_PREFIX};
use crate::dependencies::{self, DependencyMap};
use crate::error::{Error, Result};
use crate::exclusion::rules::major_version;
use crate::exclusion::{build_rule_set, ExclusionRuleSet, ToggleSet};
use crate::validators;

fn default_ng_prefix() -> String {
    DEFAULT_NG_PREFIX.to_string()
}

/// Answers describing the project, as given to the prompt or read back from
/// the persisted configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    pub author_name: String,
    pub author_email: String,
    pub github_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo_name: Option<String>,
    pub project_name: String,
    pub project_version: String,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub project_keywords: Vec<String>,
    #[serde(default = "default_ng_prefix")]
    pub ng_prefix: String,
    pub ng_version: String,
    pub ng_modules: Vec<String>,
    #[serde(default)]
    pub other_dependencies: Vec<String>,
    #[serde(default)]
    pub use_greenkeeper: bool,
    #[serde(default)]
    pub use_compodoc: bool,
    #[serde(default)]
    pub enforce_ng_git_commit_msg: bool,
}

/// Contents of the persisted configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedConfig {
    /// Version of ngxgen that wrote the file
    #[serde(default)]
    pub version: String,
    #[serde(flatten)]
    pub answers: Answers,
    #[serde(default)]
    pub exclusions: ExclusionRuleSet,
}

/// Toggles coming from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub skip_styles: bool,
    pub skip_sample: bool,
    pub skip_demo: bool,
}

/// Everything a generation run needs to know, computed once.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Answers with unavailable modules already filtered out
    pub answers: Answers,
    pub flags: FeatureFlags,
    pub ng_version_min: u32,
    pub github_repo_name: String,
    pub unscoped_project_name: String,
    pub demo_project_page_class: String,
    pub year: i32,
    pub ng_dependencies: DependencyMap,
    pub ng_dev_dependencies: DependencyMap,
    /// Empty unless the dependency bot is used
    pub greenkeeper_exclusions: Vec<String>,
    pub exclusions: ExclusionRuleSet,
}

impl ResolvedConfig {
    pub fn toggles(&self) -> ToggleSet {
        ToggleSet {
            skip_styles: self.flags.skip_styles,
            skip_sample: self.flags.skip_sample,
            skip_demo: self.flags.skip_demo,
            ng_version_min: self.ng_version_min,
            use_doc_tool: self.answers.use_compodoc,
        }
    }

    /// Returns the value written back to the project folder at the end of a run.
    pub fn to_persisted(&self) -> PersistedConfig {
        let mut answers = self.answers.clone();
        answers.github_repo_name = Some(self.github_repo_name.clone());
        PersistedConfig {
            version: env!("CARGO_PKG_VERSION").to_string(),
            answers,
            exclusions: self.exclusions.clone(),
        }
    }
}

/// Returns the location of the persisted configuration inside `project_folder`.
pub fn config_path<P: AsRef<Path>>(project_folder: P) -> PathBuf {
    project_folder.as_ref().join(CONFIG_FILE)
}

/// Loads the persisted configuration of a project, if it has one.
///
/// # Errors
/// * `Error::ConfigError` if the file exists but is not a valid configuration
pub fn load_config<P: AsRef<Path>>(project_folder: P) -> Result<Option<PersistedConfig>> {
    let path = config_path(project_folder);
    if !path.exists() {
        debug!("No configuration found at {}", path.display());
        return Ok(None);
    }

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(&path)?;
    let config = serde_json::from_str(&content).map_err(|e| {
        Error::ConfigError(format!("Invalid configuration in {}: {}", path.display(), e))
    })?;
    Ok(Some(config))
}

/// Writes the persisted configuration into `project_folder`.
pub fn save_config<P: AsRef<Path>>(project_folder: P, config: &PersistedConfig) -> Result<()> {
    let path = config_path(&project_folder);
    std::fs::create_dir_all(project_folder.as_ref())?;
    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');
    std::fs::write(&path, content)?;
    debug!("Configuration saved to {}", path.display());
    Ok(())
}

/// Checks every answer the prompt would have validated.
pub fn validate_answers(answers: &Answers) -> Result<()> {
    validators::validate_author_name(&answers.author_name)?;
    validators::validate_author_email(&answers.author_email)?;
    validators::validate_github_username(&answers.github_username)?;
    validators::validate_project_name(&answers.project_name)?;
    validators::validate_project_version(&answers.project_version)?;
    validators::validate_ng_prefix(&answers.ng_prefix)?;
    validators::validate_ng_version(&answers.ng_version)?;
    validators::validate_ng_modules(&answers.ng_modules)?;
    Ok(())
}

/// Resolves the answers, persisted exclusions and command-line toggles of a run.
///
/// # Errors
/// * `Error::ValidationError` if an answer has an invalid format
/// * `Error::ConfigError` if the framework version cannot be parsed
pub fn resolve_config(
    mut answers: Answers,
    persisted_exclusions: &ExclusionRuleSet,
    flags: FeatureFlags,
) -> Result<ResolvedConfig> {
    validate_answers(&answers)?;

    let ng_version_min = major_version(&answers.ng_version)?;
    answers.ng_modules = dependencies::filter_modules(ng_version_min, &answers.ng_modules);

    let unscoped_project_name =
        validators::unscoped_project_name(&answers.project_name).to_string();
    let github_repo_name = answers
        .github_repo_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| unscoped_project_name.clone());
    let demo_project_page_class = format!("{}DemoPage", answers.project_name.to_pascal_case());

    let ng_dependencies =
        dependencies::ng_dependencies(&answers.ng_version, ng_version_min, &answers.ng_modules);
    let ng_dev_dependencies =
        dependencies::ng_dev_dependencies(&answers.ng_version, ng_version_min, &answers.ng_modules);
    let greenkeeper_exclusions = if answers.use_greenkeeper {
        dependencies::greenkeeper_exclusions(
            &ng_dependencies,
            &ng_dev_dependencies,
            &answers.other_dependencies,
        )
    } else {
        Vec::new()
    };

    let toggles = ToggleSet {
        skip_styles: flags.skip_styles,
        skip_sample: flags.skip_sample,
        skip_demo: flags.skip_demo,
        ng_version_min,
        use_doc_tool: answers.use_compodoc,
    };
    let exclusions = build_rule_set(persisted_exclusions.iter(), &toggles);

    Ok(ResolvedConfig {
        answers,
        flags,
        ng_version_min,
        github_repo_name,
        unscoped_project_name,
        demo_project_page_class,
        year: chrono::Local::now().year(),
        ng_dependencies,
        ng_dev_dependencies,
        greenkeeper_exclusions,
        exclusions,
    })
}
