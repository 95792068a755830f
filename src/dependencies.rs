//! Angular dependency selection for the generated `package.json`.

use indexmap::IndexMap;
use log::warn;

/// Package name to version requirement, in insertion order.
pub type DependencyMap = IndexMap<String, String>;

/// Modules that only exist from framework v4 onwards.
const V4_ONLY_MODULES: &[&str] = &["animations"];

/// Framework packages every library needs to build and test, even when not
/// selected as runtime modules.
const PLATFORM_DEV_MODULES: &[&str] =
    &["compiler", "platform-server", "platform-browser", "platform-browser-dynamic"];

const LEGACY_TOOLING: &[(&str, &str)] = &[
    ("@angular/compiler-cli", "0.6.2"),
    ("zone.js", "0.6.21"),
    ("rxjs", "5.0.0-beta.12"),
    ("tslint", "3.15.1"),
    ("gulp-tslint", "6.1.1"),
    ("typescript", "2.0.3"),
    ("awesome-typescript-loader", "3.0.5"),
    ("codelyzer", "1.0.0-beta.0"),
];

const TOOLING: &[(&str, &str)] = &[
    ("@angular/compiler-cli", "4.0.0"),
    ("zone.js", "0.8.13"),
    ("rxjs", "5.0.1"),
    ("tslint", "5.4.3"),
    ("gulp-tslint", "8.1.1"),
    ("typescript", "2.3.3"),
    ("awesome-typescript-loader", "3.0.5"),
    ("codelyzer", "3.1.1"),
];

/// Workaround for typings breaking the build with newer releases.
const ALWAYS_PINNED: &str = "@types/jasmine";

fn is_legacy(ng_version_min: u32) -> bool {
    ng_version_min < 4
}

/// Drops modules the selected framework version does not provide.
pub fn filter_modules(ng_version_min: u32, ng_modules: &[String]) -> Vec<String> {
    ng_modules
        .iter()
        .filter(|module| {
            let unavailable = is_legacy(ng_version_min) && V4_ONLY_MODULES.contains(&module.as_str());
            if unavailable {
                warn!("Module '{module}' is only available for angular v4+. Removing it.");
            }
            !unavailable
        })
        .cloned()
        .collect()
}

/// Runtime dependencies: one `@angular/*` package per selected module.
pub fn ng_dependencies(ng_version: &str, ng_version_min: u32, ng_modules: &[String]) -> DependencyMap {
    ng_modules
        .iter()
        .map(|module| {
            // The router was versioned separately during the v2 line.
            let version = if module == "router" && ng_version_min == 2 {
                "3.0.0".to_string()
            } else {
                ng_version.to_string()
            };
            (format!("@angular/{module}"), version)
        })
        .collect()
}

/// Development dependencies needed to compile, test and lint the library.
pub fn ng_dev_dependencies(
    ng_version: &str,
    ng_version_min: u32,
    ng_modules: &[String],
) -> DependencyMap {
    let selected = |module: &str| ng_modules.iter().any(|m| m == module);

    let mut dev_dependencies: DependencyMap = PLATFORM_DEV_MODULES
        .iter()
        .filter(|module| !selected(**module))
        .map(|module| (format!("@angular/{module}"), ng_version.to_string()))
        .collect();

    let tooling = if is_legacy(ng_version_min) { LEGACY_TOOLING } else { TOOLING };
    dev_dependencies
        .extend(tooling.iter().map(|(name, version)| (name.to_string(), version.to_string())));

    if !is_legacy(ng_version_min) && !selected("animations") {
        dev_dependencies.insert("@angular/animations".to_string(), ng_version.to_string());
    }

    dev_dependencies
}

/// Packages the dependency bot must leave alone.
pub fn greenkeeper_exclusions(
    dependencies: &DependencyMap,
    dev_dependencies: &DependencyMap,
    other_dependencies: &[String],
) -> Vec<String> {
    let mut exclusions: Vec<String> =
        dependencies.keys().chain(dev_dependencies.keys()).cloned().collect();
    for name in other_dependencies.iter().map(String::as_str).chain([ALWAYS_PINNED]) {
        if !exclusions.iter().any(|existing| existing == name) {
            exclusions.push(name.to_string());
        }
    }
    exclusions
}
