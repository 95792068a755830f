//! Orchestration of a complete generation run.

use std::path::Path;

use log::debug;

use crate::cli::Args;
use crate::config::{load_config, resolve_config, save_config, Answers, ResolvedConfig};
use crate::constants::CONFIG_FILE;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::exclusion::{ExclusionRuleSet, Excluder};
use crate::manifest::MANIFEST;
use crate::processor::{generate, GenerationSummary, Processor};
use crate::prompt::{load_answers_from_stdin, prompt_answers, PromptDefaults, Prompter};
use crate::renderer::TemplateRenderer;
use crate::tools::{self, CommandRunner, PackageManager};

/// Collaborators of a run.
pub struct Services<'a> {
    pub engine: &'a dyn TemplateRenderer,
    pub prompter: &'a dyn Prompter,
    pub runner: &'a dyn CommandRunner,
}

/// Outcome of a run, mostly useful to callers embedding the generator.
#[derive(Debug)]
pub struct RunReport {
    pub config: ResolvedConfig,
    pub summary: GenerationSummary,
    pub package_manager: PackageManager,
}

fn ensure_template_dir(templates: &Path) -> Result<()> {
    if !templates.is_dir() {
        return Err(Error::TemplateError(format!(
            "template directory '{}' does not exist",
            templates.display()
        )));
    }
    Ok(())
}

fn ensure_project_folder(project_folder: &Path) -> Result<()> {
    if project_folder.exists() && !project_folder.is_dir() {
        return Err(Error::ProjectFolderError {
            project_folder: project_folder.display().to_string(),
        });
    }
    std::fs::create_dir_all(project_folder)?;
    Ok(())
}

/// Returns the answers of the run and the exclusions stored by earlier runs.
///
/// `--skip-cache` only discards the stored answers; stored exclusions always
/// seed the rule set.
fn gather_answers(args: &Args, services: &Services<'_>) -> Result<(Answers, ExclusionRuleSet)> {
    let (answers, exclusions) = match load_config(&args.project_folder)? {
        Some(persisted) => (Some(persisted.answers), persisted.exclusions),
        None => (None, ExclusionRuleSet::new()),
    };

    if let Some(answers) = answers.filter(|_| !args.skip_cache) {
        println!(
            "This is an existing project, using the configuration from your {CONFIG_FILE} file to re-generate it..."
        );
        return Ok((answers, exclusions));
    }

    let answers = if args.stdin {
        load_answers_from_stdin()?
    } else {
        let defaults = PromptDefaults {
            author_name: tools::git_config(services.runner, "user.name"),
            author_email: tools::git_config(services.runner, "user.email"),
        };
        prompt_answers(services.prompter, &defaults)?
    };
    Ok((answers, exclusions))
}

/// Runs the generator end to end.
///
/// # Flow
/// 1. Checks the external tools (unless `--skip-checks`)
/// 2. Loads the stored configuration or gathers new answers
/// 3. Resolves the configuration and its exclusion rules
/// 4. Writes every non-excluded manifest entry
/// 5. Stores the configuration for future runs
/// 6. Installs dependencies, packages and links the library (unless `--skip-install`)
pub fn run(args: &Args, services: &Services<'_>) -> Result<RunReport> {
    let package_manager = tools::check_package_manager(services.runner, args.npm, args.skip_checks);
    tools::check_angular_cli(services.runner, args.skip_checks);

    let (answers, persisted_exclusions) = gather_answers(args, services)?;
    let config = resolve_config(answers, &persisted_exclusions, args.feature_flags())?;
    debug!("Resolved {} exclusion patterns", config.exclusions.len());

    ensure_template_dir(&args.templates)?;
    ensure_project_folder(&args.project_folder)?;
    let excluder = Excluder::new(&config.exclusions, &args.project_folder)?;
    let context = RenderContext::from(&config).to_value()?;
    let processor = Processor::new(
        services.engine,
        &excluder,
        &args.templates,
        &args.project_folder,
        &context,
    );
    let summary = generate(&processor, MANIFEST)?;

    save_config(&args.project_folder, &config.to_persisted())?;

    if args.skip_install {
        println!("\n{}", tools::manual_steps_notice());
    } else {
        let commands = tools::post_generation_commands(
            &args.project_folder,
            package_manager,
            &config.answers.other_dependencies,
        );
        tools::run_post_generation(services.runner, &commands)?;
    }

    println!("All done, happy ng-hacking!");
    Ok(RunReport { config, summary, package_manager })
}
