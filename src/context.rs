//! Values templates are allowed to reference.

use serde::Serialize;

use crate::config::ResolvedConfig;
use crate::dependencies::DependencyMap;
use crate::error::Result;

/// Render context handed to every rendered template.
///
/// Only the fields listed here are visible to templates; adding a template
/// variable means adding a field.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub author_name: &'a str,
    pub author_email: &'a str,
    pub github_username: &'a str,
    pub github_repo_name: &'a str,
    pub project_name: &'a str,
    pub unscoped_project_name: &'a str,
    pub project_version: &'a str,
    pub project_description: &'a str,
    pub project_keywords: &'a [String],
    pub ng_prefix: &'a str,
    pub ng_version: &'a str,
    pub ng_version_min: u32,
    pub ng_modules: &'a [String],
    pub ng_dependencies: &'a DependencyMap,
    pub ng_dev_dependencies: &'a DependencyMap,
    pub other_dependencies: &'a [String],
    pub greenkeeper_exclusions: &'a [String],
    pub use_greenkeeper: bool,
    pub use_compodoc: bool,
    pub enforce_ng_git_commit_msg: bool,
    pub skip_styles: bool,
    pub skip_sample: bool,
    pub skip_demo: bool,
    pub demo_project_page_class: &'a str,
    pub year: i32,
}

impl<'a> From<&'a ResolvedConfig> for RenderContext<'a> {
    fn from(config: &'a ResolvedConfig) -> Self {
        let answers = &config.answers;
        Self {
            author_name: &answers.author_name,
            author_email: &answers.author_email,
            github_username: &answers.github_username,
            github_repo_name: &config.github_repo_name,
            project_name: &answers.project_name,
            unscoped_project_name: &config.unscoped_project_name,
            project_version: &answers.project_version,
            project_description: &answers.project_description,
            project_keywords: &answers.project_keywords,
            ng_prefix: &answers.ng_prefix,
            ng_version: &answers.ng_version,
            ng_version_min: config.ng_version_min,
            ng_modules: &answers.ng_modules,
            ng_dependencies: &config.ng_dependencies,
            ng_dev_dependencies: &config.ng_dev_dependencies,
            other_dependencies: &answers.other_dependencies,
            greenkeeper_exclusions: &config.greenkeeper_exclusions,
            use_greenkeeper: answers.use_greenkeeper,
            use_compodoc: answers.use_compodoc,
            enforce_ng_git_commit_msg: answers.enforce_ng_git_commit_msg,
            skip_styles: config.flags.skip_styles,
            skip_sample: config.flags.skip_sample,
            skip_demo: config.flags.skip_demo,
            demo_project_page_class: &config.demo_project_page_class,
            year: config.year,
        }
    }
}

impl RenderContext<'_> {
    /// Converts the context into the value consumed by the template renderer.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
