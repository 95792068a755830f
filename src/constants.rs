//! Common constants used throughout ngxgen.

/// Persisted configuration file, stored in the project folder
pub const CONFIG_FILE: &str = ".ngxgenrc.json";

/// Template directory shipped with the crate
pub const DEFAULT_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Framework versions offered by the prompt
pub const NG_VERSIONS: [&str; 2] = ["2.0.0", "4.0.0"];

/// Angular modules offered by the prompt, with their default selection
pub const NG_MODULES: [(&str, bool); 14] = [
    ("core", true),
    ("common", true),
    ("forms", false),
    ("http", false),
    ("compiler", false),
    ("router", false),
    ("upgrade", false),
    ("language-service", false),
    ("platform-browser-dynamic", false),
    ("platform-browser", false),
    ("platform-server", false),
    ("platform-webworker-dynamic", false),
    ("platform-webworker", false),
    ("animations", false),
];

pub const DEFAULT_PROJECT_NAME: &str = "my-ngx-library";
pub const DEFAULT_PROJECT_VERSION: &str = "0.0.1";
pub const DEFAULT_PROJECT_DESCRIPTION: &str =
    "Angular library built with ❤ using the ngxgen scaffolding tool.";
pub const DEFAULT_NG_PREFIX: &str = "my-lib";
