//! Static list of every file the generator can produce.

/// How a manifest entry is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The template file is copied byte-for-byte.
    CopyVerbatim,
    /// The template file is rendered with the run's render context.
    RenderWithContext,
}

/// One file of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path of the template, relative to the template directory
    pub source: &'static str,
    /// Path of the generated file, relative to the project folder
    pub destination: &'static str,
    pub mode: RenderMode,
}

const fn copy(source: &'static str, destination: &'static str) -> ManifestEntry {
    ManifestEntry { source, destination, mode: RenderMode::CopyVerbatim }
}

const fn render(source: &'static str, destination: &'static str) -> ManifestEntry {
    ManifestEntry { source, destination, mode: RenderMode::RenderWithContext }
}

/// Rendered templates carry a `.j2` suffix; dotfiles are stored without their
/// leading dot so the template directory itself stays inert.
pub const MANIFEST: &[ManifestEntry] = &[
    // Project
    render("gulpfile.js.j2", "gulpfile.js"),
    render("LICENSE.j2", "LICENSE"),
    render("package.json.j2", "package.json"),
    render("README.md.j2", "README.md"),
    render("CHANGELOG.md.j2", "CHANGELOG.md"),
    copy("editorconfig", ".editorconfig"),
    copy("gitignore", ".gitignore"),
    copy("npmignore", ".npmignore"),
    render("travis.yml.j2", ".travis.yml"),
    copy("karma.conf.js", "karma.conf.js"),
    copy("tsconfig.json", "tsconfig.json"),
    render("tslint.json.j2", "tslint.json"),
    // Github
    render("github/ISSUE_TEMPLATE.md.j2", ".github/ISSUE_TEMPLATE.md"),
    // Config
    copy("config/helpers.js", "config/helpers.js"),
    copy("config/karma-test-shim.js", "config/karma-test-shim.js"),
    render("config/karma.conf.js.j2", "config/karma.conf.js"),
    render("config/webpack.test.js.j2", "config/webpack.test.js"),
    copy("config/gulp-tasks/README.md", "config/gulp-tasks/README.md"),
    // Library
    render("src/index.ts.j2", "src/index.ts"),
    render("src/module/lib.module.ts.j2", "src/module/lib.module.ts"),
    render("src/module/component/lib.component.ts.j2", "src/module/component/lib.component.ts"),
    render("src/module/component/lib.component.html.j2", "src/module/component/lib.component.html"),
    copy("src/module/component/lib.component.scss", "src/module/component/lib.component.scss"),
    render(
        "src/module/component/lib.component.spec.ts.j2",
        "src/module/component/lib.component.spec.ts",
    ),
    render("src/module/service/lib.service.ts.j2", "src/module/service/lib.service.ts"),
    render("src/module/service/lib.service.spec.ts.j2", "src/module/service/lib.service.spec.ts"),
    render("src/tsconfig.lib.json.j2", "src/tsconfig.lib.json"),
    render("src/tsconfig.lib.es5.json.j2", "src/tsconfig.lib.es5.json"),
    copy("src/tsconfig.spec.json", "src/tsconfig.spec.json"),
    // Demo
    render("demo/e2e/app.e2e-spec.ts.j2", "demo/e2e/app.e2e-spec.ts"),
    render("demo/e2e/app.po.ts.j2", "demo/e2e/app.po.ts"),
    copy("demo/e2e/tsconfig.e2e.json", "demo/e2e/tsconfig.e2e.json"),
    copy(
        "demo/src/app/getting-started/getting-started.component.ts",
        "demo/src/app/getting-started/getting-started.component.ts",
    ),
    copy(
        "demo/src/app/getting-started/getting-started-routing.module.ts",
        "demo/src/app/getting-started/getting-started-routing.module.ts",
    ),
    render(
        "demo/src/app/getting-started/getting-started.component.html.j2",
        "demo/src/app/getting-started/getting-started.component.html",
    ),
    copy(
        "demo/src/app/getting-started/getting-started.component.scss",
        "demo/src/app/getting-started/getting-started.component.scss",
    ),
    copy(
        "demo/src/app/getting-started/getting-started.module.ts",
        "demo/src/app/getting-started/getting-started.module.ts",
    ),
    copy(
        "demo/src/app/getting-started/getting-started.component.spec.ts",
        "demo/src/app/getting-started/getting-started.component.spec.ts",
    ),
    render("demo/src/app/home/home.component.html.j2", "demo/src/app/home/home.component.html"),
    copy("demo/src/app/home/home.component.ts", "demo/src/app/home/home.component.ts"),
    copy("demo/src/app/home/home.component.spec.ts", "demo/src/app/home/home.component.spec.ts"),
    copy("demo/src/app/home/home.module.ts", "demo/src/app/home/home.module.ts"),
    copy("demo/src/app/home/home-routing.module.ts", "demo/src/app/home/home-routing.module.ts"),
    copy("demo/src/app/home/home.component.scss", "demo/src/app/home/home.component.scss"),
    copy(
        "demo/src/app/shared/content-wrapper/content-wrapper.component.ts",
        "demo/src/app/shared/content-wrapper/content-wrapper.component.ts",
    ),
    copy(
        "demo/src/app/shared/content-wrapper/content-wrapper.component.html",
        "demo/src/app/shared/content-wrapper/content-wrapper.component.html",
    ),
    copy(
        "demo/src/app/shared/content-wrapper/content-wrapper.component.scss",
        "demo/src/app/shared/content-wrapper/content-wrapper.component.scss",
    ),
    copy(
        "demo/src/app/shared/content-wrapper/content-wrapper.component.spec.ts",
        "demo/src/app/shared/content-wrapper/content-wrapper.component.spec.ts",
    ),
    render(
        "demo/src/app/shared/footer/footer.component.html.j2",
        "demo/src/app/shared/footer/footer.component.html",
    ),
    copy(
        "demo/src/app/shared/footer/footer.component.scss",
        "demo/src/app/shared/footer/footer.component.scss",
    ),
    copy(
        "demo/src/app/shared/footer/footer.component.spec.ts",
        "demo/src/app/shared/footer/footer.component.spec.ts",
    ),
    copy(
        "demo/src/app/shared/footer/footer.component.ts",
        "demo/src/app/shared/footer/footer.component.ts",
    ),
    render(
        "demo/src/app/shared/header/header.component.html.j2",
        "demo/src/app/shared/header/header.component.html",
    ),
    copy(
        "demo/src/app/shared/header/header.component.spec.ts",
        "demo/src/app/shared/header/header.component.spec.ts",
    ),
    copy(
        "demo/src/app/shared/header/header.component.scss",
        "demo/src/app/shared/header/header.component.scss",
    ),
    copy(
        "demo/src/app/shared/header/header.component.ts",
        "demo/src/app/shared/header/header.component.ts",
    ),
    copy("demo/src/app/shared/index.ts", "demo/src/app/shared/index.ts"),
    copy("demo/src/app/shared/shared.module.ts", "demo/src/app/shared/shared.module.ts"),
    copy("demo/src/app/app.component.spec.ts", "demo/src/app/app.component.spec.ts"),
    render("demo/src/app/app.module.ts.j2", "demo/src/app/app.module.ts"),
    copy("demo/src/app/app-routing.module.ts", "demo/src/app/app-routing.module.ts"),
    copy("demo/src/app/app.component.html", "demo/src/app/app.component.html"),
    copy("demo/src/app/app.component.scss", "demo/src/app/app.component.scss"),
    copy("demo/src/app/app.component.ts", "demo/src/app/app.component.ts"),
    copy("demo/src/app/app.server.module.ts", "demo/src/app/app.server.module.ts"),
    copy("demo/src/assets/gitkeep", "demo/src/assets/.gitkeep"),
    copy("demo/src/assets/npmignore", "demo/src/assets/.npmignore"),
    copy("demo/src/assets/logo.svg", "demo/src/assets/logo.svg"),
    copy("demo/src/environments/environment.prod.ts", "demo/src/environments/environment.prod.ts"),
    copy("demo/src/environments/environment.ts", "demo/src/environments/environment.ts"),
    copy("demo/src/testing/index.ts", "demo/src/testing/index.ts"),
    copy("demo/src/testing/router-stubs.ts", "demo/src/testing/router-stubs.ts"),
    render("demo/src/index.html.j2", "demo/src/index.html"),
    copy("demo/src/_variables.scss", "demo/src/_variables.scss"),
    copy("demo/src/favicon.ico", "demo/src/favicon.ico"),
    copy("demo/src/main.server.ts", "demo/src/main.server.ts"),
    copy("demo/src/main.ts", "demo/src/main.ts"),
    copy("demo/src/polyfills.ts", "demo/src/polyfills.ts"),
    copy("demo/src/styles.scss", "demo/src/styles.scss"),
    copy("demo/src/test.ts", "demo/src/test.ts"),
    copy("demo/src/tsconfig.app.json", "demo/src/tsconfig.app.json"),
    copy("demo/src/tsconfig.server.json", "demo/src/tsconfig.server.json"),
    copy("demo/src/tsconfig.spec.json", "demo/src/tsconfig.spec.json"),
    copy("demo/src/typings.d.ts", "demo/src/typings.d.ts"),
    render("demo/angular-cli.json.j2", "demo/.angular-cli.json"),
    render("demo/package.json.j2", "demo/package.json"),
    render("demo/README.md.j2", "demo/README.md"),
    copy("demo/editorconfig", "demo/.editorconfig"),
    copy("demo/gitignore", "demo/.gitignore"),
    copy("demo/karma.conf.js", "demo/karma.conf.js"),
    copy("demo/prerender.ts", "demo/prerender.ts"),
    copy("demo/protractor.conf.js", "demo/protractor.conf.js"),
    copy("demo/proxy.conf.json", "demo/proxy.conf.json"),
    copy("demo/server.ts", "demo/server.ts"),
    copy("demo/tsconfig.json", "demo/tsconfig.json"),
    render("demo/tslint.json.j2", "demo/tslint.json"),
    copy("demo/webpack.server.config.js", "demo/webpack.server.config.js"),
];

/// Looks up the manifest entry generating `destination`.
pub fn find(destination: &str) -> Option<&'static ManifestEntry> {
    MANIFEST.iter().find(|entry| entry.destination == destination)
}
