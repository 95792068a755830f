use std::cell::RefCell;
use std::path::Path;

use ngxgen::error::{Error, Result};
use ngxgen::tools::{
    check_angular_cli, check_package_manager, git_config, post_generation_commands,
    run_post_generation, CommandRunner, ExternalCommand, PackageManager,
};

/// Pretends only `available` programs are installed and fails `failing` commands.
#[derive(Default)]
struct MockRunner {
    available: Vec<&'static str>,
    failing: Option<&'static str>,
    probed: RefCell<Vec<String>>,
    ran: RefCell<Vec<String>>,
}

impl CommandRunner for MockRunner {
    fn probe(&self, program: &str, args: &[&str]) -> Option<String> {
        self.probed.borrow_mut().push(format!("{program} {}", args.join(" ")));
        if !self.available.contains(&program) {
            return None;
        }
        match args {
            ["config", "--get", "user.name"] => Some("Jane Doe".to_string()),
            ["config", "--get", _] => Some(String::new()),
            _ => Some("1.0.0".to_string()),
        }
    }

    fn run(&self, command: &ExternalCommand) -> Result<()> {
        let line = command.to_string();
        self.ran.borrow_mut().push(line.clone());
        if self.failing == Some(line.as_str()) {
            return Err(Error::ExternalProcessFailure { command: line, status: "exit status: 1".to_string() });
        }
        Ok(())
    }
}

#[test_log::test]
fn test_falls_back_to_npm_without_yarn() {
    let runner = MockRunner::default();
    assert_eq!(check_package_manager(&runner, false, false), PackageManager::Npm);
}

#[test]
fn test_prefers_yarn_when_available() {
    let runner = MockRunner { available: vec!["yarn"], ..MockRunner::default() };
    assert_eq!(check_package_manager(&runner, false, false), PackageManager::Yarn);
}

#[test]
fn test_npm_flag_skips_detection() {
    let runner = MockRunner { available: vec!["yarn"], ..MockRunner::default() };
    assert_eq!(check_package_manager(&runner, true, false), PackageManager::Npm);
    assert!(runner.probed.borrow().is_empty());
}

#[test]
fn test_skip_checks_assumes_yarn() {
    let runner = MockRunner::default();
    assert_eq!(check_package_manager(&runner, false, true), PackageManager::Yarn);
    assert!(check_angular_cli(&runner, true));
    assert!(runner.probed.borrow().is_empty());
}

#[test_log::test]
fn test_missing_angular_cli_is_not_fatal() {
    let runner = MockRunner::default();
    assert!(!check_angular_cli(&runner, false));

    let runner = MockRunner { available: vec!["ng"], ..MockRunner::default() };
    assert!(check_angular_cli(&runner, false));
}

#[test]
fn test_git_config_ignores_empty_values() {
    let runner = MockRunner { available: vec!["git"], ..MockRunner::default() };
    assert_eq!(git_config(&runner, "user.name").as_deref(), Some("Jane Doe"));
    assert_eq!(git_config(&runner, "user.email"), None);
    assert_eq!(git_config(&MockRunner::default(), "user.name"), None);
}

#[test]
fn test_install_commands() {
    let cwd = Path::new("/tmp/project");
    let extra = vec!["lodash".to_string()];

    assert_eq!(PackageManager::Yarn.install_command(cwd, &[]).to_string(), "yarn install");
    assert_eq!(PackageManager::Yarn.install_command(cwd, &extra).to_string(), "yarn add lodash");
    assert_eq!(PackageManager::Npm.install_command(cwd, &[]).to_string(), "npm install");
    assert_eq!(
        PackageManager::Npm.install_command(cwd, &extra).to_string(),
        "npm install --save lodash"
    );
}

#[test]
fn test_post_generation_chain_order() {
    let commands = post_generation_commands("/tmp/project", PackageManager::Npm, &[]);
    let lines: Vec<String> = commands.iter().map(ToString::to_string).collect();

    assert_eq!(lines, ["npm install", "gulp npm-package", "gulp link"]);
    assert!(commands.iter().all(|command| command.cwd == Path::new("/tmp/project")));
}

#[test]
fn test_post_generation_runs_every_step() {
    let runner = MockRunner::default();
    let commands = post_generation_commands("/tmp/project", PackageManager::Yarn, &[]);

    run_post_generation(&runner, &commands).unwrap();
    assert_eq!(runner.ran.borrow().len(), 3);
}

#[test]
fn test_post_generation_stops_at_first_failure() {
    let runner = MockRunner { failing: Some("gulp npm-package"), ..MockRunner::default() };
    let commands = post_generation_commands("/tmp/project", PackageManager::Yarn, &[]);

    let err = run_post_generation(&runner, &commands).unwrap_err();
    assert!(matches!(err, Error::ExternalProcessFailure { ref command, .. } if command == "gulp npm-package"));
    assert_eq!(*runner.ran.borrow(), ["yarn install", "gulp npm-package"]);
}
