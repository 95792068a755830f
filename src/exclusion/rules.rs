//! Toggle-driven exclusion rules.
//!
//! Every toggle that removes files from the generated project is described
//! by one row of [`TOGGLE_TABLE`]. Building the rule set folds the active rows
//! over the persisted exclusions, so the provenance of each pattern can be
//! read straight from the table.

use log::debug;

use super::ExclusionRuleSet;
use crate::error::{Error, Result};

/// Framework major version from which the ES5 library build config exists.
pub const ES5_BUILD_MIN_VERSION: u32 = 4;

/// Sample UI component shipped with the library skeleton.
pub const COMPONENT_ARTIFACTS: &[&str] = &[
    "src/module/component/lib.component.html",
    "src/module/component/lib.component.spec.ts",
    "src/module/component/lib.component.ts",
    "src/module/component/lib.component.scss",
];

/// Sample service and the module declaring the sample code.
pub const SAMPLE_ARTIFACTS: &[&str] = &[
    "src/module/service/lib.service.ts",
    "src/module/service/lib.service.spec.ts",
    "src/module/lib.module.ts",
];

pub const ES5_BUILD_CONFIG: &[&str] = &["src/tsconfig.lib.es5.json"];

/// Every file of the demo application.
pub const DEMO_APPLICATION: &[&str] = &[
    "demo/e2e/app.e2e-spec.ts",
    "demo/e2e/app.po.ts",
    "demo/e2e/tsconfig.e2e.json",
    "demo/src/app/getting-started/getting-started.component.ts",
    "demo/src/app/getting-started/getting-started-routing.module.ts",
    "demo/src/app/getting-started/getting-started.component.html",
    "demo/src/app/getting-started/getting-started.component.scss",
    "demo/src/app/getting-started/getting-started.module.ts",
    "demo/src/app/getting-started/getting-started.component.spec.ts",
    "demo/src/app/home/home.component.html",
    "demo/src/app/home/home.component.ts",
    "demo/src/app/home/home.component.spec.ts",
    "demo/src/app/home/home.module.ts",
    "demo/src/app/home/home-routing.module.ts",
    "demo/src/app/home/home.component.scss",
    "demo/src/app/shared/content-wrapper/content-wrapper.component.ts",
    "demo/src/app/shared/content-wrapper/content-wrapper.component.html",
    "demo/src/app/shared/content-wrapper/content-wrapper.component.scss",
    "demo/src/app/shared/content-wrapper/content-wrapper.component.spec.ts",
    "demo/src/app/shared/footer/footer.component.html",
    "demo/src/app/shared/footer/footer.component.scss",
    "demo/src/app/shared/footer/footer.component.spec.ts",
    "demo/src/app/shared/footer/footer.component.ts",
    "demo/src/app/shared/header/header.component.html",
    "demo/src/app/shared/header/header.component.spec.ts",
    "demo/src/app/shared/header/header.component.scss",
    "demo/src/app/shared/header/header.component.ts",
    "demo/src/app/shared/index.ts",
    "demo/src/app/shared/shared.module.ts",
    "demo/src/app/app.component.spec.ts",
    "demo/src/app/app.module.ts",
    "demo/src/app/app-routing.module.ts",
    "demo/src/app/app.component.html",
    "demo/src/app/app.component.scss",
    "demo/src/app/app.component.ts",
    "demo/src/app/app.server.module.ts",
    "demo/src/assets/.gitkeep",
    "demo/src/assets/.npmignore",
    "demo/src/assets/logo.svg",
    "demo/src/environments/environment.prod.ts",
    "demo/src/environments/environment.ts",
    "demo/src/testing/index.ts",
    "demo/src/testing/router-stubs.ts",
    "demo/src/index.html",
    "demo/src/_variables.scss",
    "demo/src/favicon.ico",
    "demo/src/main.server.ts",
    "demo/src/main.ts",
    "demo/src/polyfills.ts",
    "demo/src/styles.scss",
    "demo/src/test.ts",
    "demo/src/tsconfig.app.json",
    "demo/src/tsconfig.server.json",
    "demo/src/tsconfig.spec.json",
    "demo/src/typings.d.ts",
    "demo/.angular-cli.json",
    "demo/package.json",
    "demo/README.md",
    "demo/.editorconfig",
    "demo/.gitignore",
    "demo/karma.conf.js",
    "demo/prerender.ts",
    "demo/protractor.conf.js",
    "demo/proxy.conf.json",
    "demo/server.ts",
    "demo/tsconfig.json",
    "demo/tslint.json",
    "demo/webpack.server.config.js",
];

/// Dev-server proxy to the documentation server, only useful with doc tooling.
pub const DOC_PROXY_CONFIG: &[&str] = &["demo/proxy.conf.json"];

/// Feature choices that influence which files are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSet {
    pub skip_styles: bool,
    pub skip_sample: bool,
    pub skip_demo: bool,
    /// Leading component of the selected framework version
    pub ng_version_min: u32,
    pub use_doc_tool: bool,
}

impl Default for ToggleSet {
    fn default() -> Self {
        Self {
            skip_styles: false,
            skip_sample: false,
            skip_demo: false,
            ng_version_min: ES5_BUILD_MIN_VERSION,
            use_doc_tool: true,
        }
    }
}

/// One row of the toggle table.
pub struct ToggleRule {
    pub name: &'static str,
    pub applies: fn(&ToggleSet) -> bool,
    pub patterns: &'static [&'static str],
}

impl std::fmt::Debug for ToggleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleRule")
            .field("name", &self.name)
            .field("patterns", &self.patterns.len())
            .finish()
    }
}

pub const TOGGLE_TABLE: &[ToggleRule] = &[
    ToggleRule {
        name: "skip-styles or skip-sample",
        applies: |t| t.skip_styles || t.skip_sample,
        patterns: COMPONENT_ARTIFACTS,
    },
    ToggleRule { name: "skip-sample", applies: |t| t.skip_sample, patterns: SAMPLE_ARTIFACTS },
    ToggleRule {
        name: "minimum-version",
        applies: |t| t.ng_version_min < ES5_BUILD_MIN_VERSION,
        patterns: ES5_BUILD_CONFIG,
    },
    ToggleRule { name: "skip-demo", applies: |t| t.skip_demo, patterns: DEMO_APPLICATION },
    ToggleRule { name: "no-doc-tool", applies: |t| !t.use_doc_tool, patterns: DOC_PROXY_CONFIG },
];

/// Returns the rows of [`TOGGLE_TABLE`] that apply to `toggles`.
pub fn active_rules(toggles: &ToggleSet) -> impl Iterator<Item = &'static ToggleRule> + '_ {
    TOGGLE_TABLE.iter().filter(move |rule| (rule.applies)(toggles))
}

/// Builds the rule set for a run from the persisted exclusions and the toggles.
///
/// Rows are independent and only ever add patterns; a pattern contributed by
/// several rows is stored once.
pub fn build_rule_set<I, S>(persisted_exclusions: I, toggles: &ToggleSet) -> ExclusionRuleSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut rules: ExclusionRuleSet = persisted_exclusions.into_iter().collect();
    for rule in active_rules(toggles) {
        debug!("Applying exclusion rule '{}' ({} patterns)", rule.name, rule.patterns.len());
        rules.extend(rule.patterns.iter().copied());
    }
    rules
}

/// Parses the leading numeric component of a framework version (`"4.0.0"` gives `4`).
///
/// # Errors
/// * `Error::ConfigError` if the leading component is not a number
pub fn major_version(version: &str) -> Result<u32> {
    let major = version.trim().trim_start_matches(['v', 'V']).split('.').next().unwrap_or("");
    major.parse::<u32>().map_err(|_| {
        Error::ConfigError(format!("'{version}' is not a valid framework version"))
    })
}
