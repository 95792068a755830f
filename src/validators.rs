//! Format checks for prompted and persisted answers.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::exclusion::rules::major_version;

/// Matches `@scope/name`, capturing `name`.
pub const SCOPED_PROJECT_NAME: &str = r"^@[a-zA-Z0-9-]+/([a-zA-Z0-9-]+)$";

const EMAIL: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const GITHUB_USERNAME: &str = r"^[A-Za-z0-9](?:-?[A-Za-z0-9]){0,38}$";
const PROJECT_NAME: &str = r"^(?:@[a-z0-9-]+/)?[a-z0-9][a-z0-9._-]*$";
const PROJECT_VERSION: &str = r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?$";
const NG_PREFIX: &str = r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$";

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("validator patterns are valid"))
}

fn check(cell: &'static OnceLock<Regex>, pattern: &str, value: &str, message: &str) -> Result<()> {
    if compiled(cell, pattern).is_match(value) {
        Ok(())
    } else {
        Err(Error::ValidationError(format!("{message} (got '{value}')")))
    }
}

pub fn validate_author_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ValidationError("Your name cannot be empty".to_string()));
    }
    Ok(())
}

pub fn validate_author_email(value: &str) -> Result<()> {
    static RE: OnceLock<Regex> = OnceLock::new();
    check(&RE, EMAIL, value, "Please provide a valid email address")
}

pub fn validate_github_username(value: &str) -> Result<()> {
    static RE: OnceLock<Regex> = OnceLock::new();
    check(&RE, GITHUB_USERNAME, value, "Please provide a valid Github username")
}

pub fn validate_project_name(value: &str) -> Result<()> {
    static RE: OnceLock<Regex> = OnceLock::new();
    check(
        &RE,
        PROJECT_NAME,
        value,
        "Project name must be a lowercase npm package name, optionally scoped as '@scope/name'",
    )
}

pub fn validate_project_version(value: &str) -> Result<()> {
    static RE: OnceLock<Regex> = OnceLock::new();
    check(&RE, PROJECT_VERSION, value, "Project version must follow semver, e.g. '1.0.0'")
}

pub fn validate_ng_prefix(value: &str) -> Result<()> {
    static RE: OnceLock<Regex> = OnceLock::new();
    check(&RE, NG_PREFIX, value, "Prefix must be lowercase kebab-case, e.g. 'my-lib'")
}

pub fn validate_ng_version(value: &str) -> Result<()> {
    major_version(value).map(|_| ()).map_err(|e| Error::ValidationError(e.to_string()))
}

pub fn validate_ng_modules(modules: &[String]) -> Result<()> {
    if modules.is_empty() {
        return Err(Error::ValidationError("Select at least one Angular module".to_string()));
    }
    Ok(())
}

/// Returns the project name without its `@scope/` prefix.
pub fn unscoped_project_name(project_name: &str) -> &str {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, SCOPED_PROJECT_NAME)
        .captures(project_name)
        .and_then(|captures| captures.get(1))
        .map_or(project_name, |name| name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_project_name() {
        assert_eq!(unscoped_project_name("@my-scope/my-project"), "my-project");
        assert_eq!(unscoped_project_name("my-project"), "my-project");
        assert_eq!(unscoped_project_name("@broken"), "@broken");
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("my-ngx-library").is_ok());
        assert!(validate_project_name("@scope/my-lib").is_ok());
        assert!(validate_project_name("My-Lib").is_err());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("my lib").is_err());
    }

    #[test]
    fn test_validate_project_version() {
        assert!(validate_project_version("0.0.1").is_ok());
        assert!(validate_project_version("1.0.0-beta.1").is_ok());
        assert!(validate_project_version("1.0").is_err());
    }

    #[test]
    fn test_validate_identity() {
        assert!(validate_author_name("Awesome Developer").is_ok());
        assert!(validate_author_name("   ").is_err());
        assert!(validate_author_email("awesome.developer@github.com").is_ok());
        assert!(validate_author_email("not-an-email").is_err());
        assert!(validate_github_username("awesomedeveloper").is_ok());
        assert!(validate_github_username("-leading-dash").is_err());
        assert!(validate_github_username("double--dash").is_err());
    }

    #[test]
    fn test_validate_ng_prefix() {
        assert!(validate_ng_prefix("my-lib").is_ok());
        assert!(validate_ng_prefix("lib").is_ok());
        assert!(validate_ng_prefix("My-Lib").is_err());
        assert!(validate_ng_prefix("my_lib").is_err());
    }

    #[test]
    fn test_validate_ng_modules() {
        assert!(validate_ng_modules(&["core".to_string()]).is_ok());
        assert!(validate_ng_modules(&[]).is_err());
    }
}
