//! ngxgen is a scaffolding generator for publishable Angular libraries.
//! It materializes a project tree from templates, leaving out the files the
//! chosen features do not need, and wires up the companion build tooling.

/// Command-line interface module for the ngxgen application
pub mod cli;

/// Persisted configuration and run-level configuration resolution
pub mod config;

pub mod constants;

/// Values templates are allowed to reference
pub mod context;

/// Angular dependency selection
pub mod dependencies;

/// Error types and handling for the ngxgen application
pub mod error;

/// Exclusion rules and the resolver deciding which files are generated
pub mod exclusion;

/// End-to-end generation run
pub mod generator;

pub mod logger;

/// Static list of every file the generator can produce
pub mod manifest;

pub mod path;

/// Per-file generation decisions and output writing
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// External tool checks and post-generation commands
pub mod tools;

/// Format checks for prompted answers
pub mod validators;
