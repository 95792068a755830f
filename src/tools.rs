//! External tools used around generation: presence checks before prompting,
//! and the install/package/link chain once the files are written.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::error::{Error, Result};

/// Package manager used to install the generated project's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Command installing the project dependencies plus `extra` packages.
    pub fn install_command<P: AsRef<Path>>(&self, cwd: P, extra: &[String]) -> ExternalCommand {
        let mut args: Vec<String> = match (self, extra.is_empty()) {
            (_, true) => vec!["install".to_string()],
            (PackageManager::Yarn, false) => vec!["add".to_string()],
            (PackageManager::Npm, false) => vec!["install".to_string(), "--save".to_string()],
        };
        args.extend(extra.iter().cloned());
        ExternalCommand::new(self.program(), args, cwd)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// A command to run inside the generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ExternalCommand {
    pub fn new<S: Into<String>, P: AsRef<Path>>(program: S, args: Vec<String>, cwd: P) -> Self {
        Self { program: program.into(), args, cwd: cwd.as_ref().to_path_buf() }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Seam between ngxgen and the processes it spawns.
pub trait CommandRunner {
    /// Runs a short query command and returns its trimmed stdout on success.
    fn probe(&self, program: &str, args: &[&str]) -> Option<String>;

    /// Runs a command with inherited stdio and waits for it.
    ///
    /// # Errors
    /// * `Error::ExternalProcessFailure` if the command exits unsuccessfully
    fn run(&self, command: &ExternalCommand) -> Result<()>;
}

/// Runs commands on the host system.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn probe(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = Command::new(program).args(args).stderr(Stdio::null()).output().ok()?;
        if !output.status.success() {
            debug!("'{program}' exited with {}", output.status);
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run(&self, command: &ExternalCommand) -> Result<()> {
        debug!("Running '{}' in {}", command, command.cwd.display());
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::ExternalProcessFailure {
                command: command.to_string(),
                status: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::ExternalProcessFailure {
                command: command.to_string(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Picks the package manager, falling back to npm when yarn is unavailable.
pub fn check_package_manager(runner: &dyn CommandRunner, use_npm: bool, skip_checks: bool) -> PackageManager {
    if use_npm {
        return PackageManager::Npm;
    }
    if skip_checks || runner.probe("yarn", &["--version"]).is_some() {
        return PackageManager::Yarn;
    }
    warn!("yarn is not found on your computer. Using npm instead.");
    PackageManager::Npm
}

/// Warns when the Angular CLI is missing; the demo application needs it.
pub fn check_angular_cli(runner: &dyn CommandRunner, skip_checks: bool) -> bool {
    if skip_checks {
        return true;
    }
    let found = runner.probe("ng", &["--version"]).is_some();
    if !found {
        warn!("@angular/cli is not found on your computer.");
    }
    found
}

/// Reads a value from the user's git configuration, used as a prompt default.
pub fn git_config(runner: &dyn CommandRunner, key: &str) -> Option<String> {
    runner.probe("git", &["config", "--get", key]).filter(|value| !value.is_empty())
}

/// Commands run after generation, in order; each depends on the previous one.
pub fn post_generation_commands<P: AsRef<Path>>(
    project_folder: P,
    package_manager: PackageManager,
    other_dependencies: &[String],
) -> Vec<ExternalCommand> {
    let project_folder = project_folder.as_ref();
    vec![
        package_manager.install_command(project_folder, other_dependencies),
        ExternalCommand::new("gulp", vec!["npm-package".to_string()], project_folder),
        ExternalCommand::new("gulp", vec!["link".to_string()], project_folder),
    ]
}

/// Installs dependencies, packages the library and links it for the demo.
///
/// Stops at the first failing command. Files already written stay on disk.
pub fn run_post_generation(runner: &dyn CommandRunner, commands: &[ExternalCommand]) -> Result<()> {
    let total = commands.len();
    for (index, command) in commands.iter().enumerate() {
        println!("\nAlmost done ({}/{}). Running '{}'...", index + 1, total, command);
        runner.run(command)?;
    }
    Ok(())
}

/// Follow-up commands shown when dependency installation is skipped.
pub fn manual_steps_notice() -> String {
    [
        "You chose to skip automatic installation of dependencies. That's fine!",
        "But remember to run these commands once you are done installing them yourself:",
        "  1. gulp build (required every time you want to update your package in dist/)",
        "  2. gulp link  (required only once, to link the demo app to your local package in dist/)",
    ]
    .join("\n")
}
