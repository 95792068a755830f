//! Error handling for ngxgen.
//! Defines the error taxonomy and result alias used throughout the application.

use thiserror::Error;

/// All errors that can stop a generation run.
///
/// Missing optional tools are not errors: they are reported
/// with `log::warn!` and the run continues with a fallback.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Malformed or missing persisted/prompted value
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A manifest entry or exclusion pattern cannot be turned into a path
    #[error("Invalid path '{path}': {reason}.")]
    PathError { path: String, reason: String },

    #[error("Template error: {0}.")]
    TemplateError(String),

    /// A manifest entry references a template that is not shipped
    #[error("Template '{template}' does not exist in the template directory.")]
    TemplateMissingError { template: String },

    #[error("Failed to render template: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid exclusion pattern: {0}.")]
    GlobSetParseError(#[from] globset::Error),

    /// Represents errors raised by the interactive prompt backend
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A post-generation command exited unsuccessfully
    #[error("Command '{command}' failed: {status}.")]
    ExternalProcessFailure { command: String, status: String },

    #[error("Project folder '{project_folder}' is not a directory.")]
    ProjectFolderError { project_folder: String },
}

/// Convenience type alias for Results with ngxgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
