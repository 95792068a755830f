//! Command-line interface implementation for ngxgen.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::FeatureFlags;
use crate::constants::DEFAULT_TEMPLATES_DIR;

/// Command-line arguments structure for ngxgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "ngxgen: scaffolding for publishable Angular libraries", long_about = None)]
pub struct Args {
    /// Folder to generate the project into
    #[arg(value_name = "PROJECT_FOLDER", default_value = ".")]
    pub project_folder: PathBuf,

    /// Skip checking the status of the required tools
    #[arg(long)]
    pub skip_checks: bool,

    /// Skip generation of code to inline styles in Angular components
    #[arg(long)]
    pub skip_styles: bool,

    /// Skip generation of the demo application
    #[arg(long)]
    pub skip_demo: bool,

    /// Skip generation of the sample library code
    #[arg(long)]
    pub skip_sample: bool,

    /// Use npm instead of yarn
    #[arg(long)]
    pub npm: bool,

    /// Skip installation of dependencies and the initial build
    #[arg(long)]
    pub skip_install: bool,

    /// Ignore the stored configuration of an existing project and prompt again
    #[arg(long)]
    pub skip_cache: bool,

    /// Read answers as a JSON object from stdin instead of prompting
    #[arg(short, long)]
    pub stdin: bool,

    /// Directory containing the project templates
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn feature_flags(&self) -> FeatureFlags {
        FeatureFlags {
            skip_styles: self.skip_styles,
            skip_sample: self.skip_sample,
            skip_demo: self.skip_demo,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
