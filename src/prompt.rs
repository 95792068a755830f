//! User input and interaction handling.
//! Asks the project questions in order and assembles the answers.

use std::io::Read;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::config::Answers;
use crate::constants::{
    DEFAULT_NG_PREFIX, DEFAULT_PROJECT_DESCRIPTION, DEFAULT_PROJECT_NAME,
    DEFAULT_PROJECT_VERSION, NG_MODULES, NG_VERSIONS,
};
use crate::error::{Error, Result};
use crate::validators;

/// Validation function applied to a text answer before it is accepted.
pub type Validator = fn(&str) -> Result<()>;

/// Interface to the interactive terminal.
pub trait Prompter {
    fn input(&self, prompt: &str, default: Option<&str>, validator: Option<Validator>) -> Result<String>;
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
    /// Returns the index of the selected item.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
    /// Returns the indices of the selected items.
    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>, validator: Option<Validator>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validator) = validator {
            input = input.validate_with(move |value: &String| -> std::result::Result<(), String> {
                validator(value).map_err(|e| e.to_string())
            });
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).items(items).default(default).interact()?)
    }

    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>> {
        Ok(MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact()?)
    }
}

/// Defaults taken from the user's environment.
#[derive(Debug, Default, Clone)]
pub struct PromptDefaults {
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

/// Splits a comma-separated answer into trimmed, non-empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Asks every project question, in order.
pub fn prompt_answers(prompter: &dyn Prompter, defaults: &PromptDefaults) -> Result<Answers> {
    const TOTAL: usize = 14;
    let step = |n: usize, question: &str| format!("({n}/{TOTAL}) {question}");

    let author_name = prompter.input(
        &step(1, "What is your name?"),
        defaults.author_name.as_deref(),
        Some(validators::validate_author_name),
    )?;
    let author_email = prompter.input(
        &step(2, "What is your email address?"),
        defaults.author_email.as_deref(),
        Some(validators::validate_author_email),
    )?;
    let github_username = prompter.input(
        &step(3, "What is your Github username?"),
        None,
        Some(validators::validate_github_username),
    )?;
    let project_name = prompter.input(
        &step(4, "What is the name of your project?"),
        Some(DEFAULT_PROJECT_NAME),
        Some(validators::validate_project_name),
    )?;
    let project_version = prompter.input(
        &step(5, "What is the version of your project?"),
        Some(DEFAULT_PROJECT_VERSION),
        Some(validators::validate_project_version),
    )?;
    let project_description = prompter.input(
        &step(6, "What is the description of your project?"),
        Some(DEFAULT_PROJECT_DESCRIPTION),
        None,
    )?;
    let project_keywords = prompter.input(
        &step(7, "What keywords best describe your project (comma-separated)?"),
        Some(""),
        None,
    )?;
    let ng_prefix = prompter.input(
        &step(8, "What prefix would you like to use to name your components, directives,...?"),
        Some(DEFAULT_NG_PREFIX),
        Some(validators::validate_ng_prefix),
    )?;

    let version_labels = ["2.X.X", "4.X.X"];
    let ng_version = prompter.select(
        &step(9, "What minimal version of Angular do you want to base your library upon?"),
        &version_labels,
        0,
    )?;
    let ng_version = NG_VERSIONS
        .get(ng_version)
        .ok_or_else(|| Error::ConfigError(format!("invalid Angular version choice {ng_version}")))?;

    let module_names: Vec<&str> = NG_MODULES.iter().map(|(name, _)| *name).collect();
    let module_defaults: Vec<bool> = NG_MODULES.iter().map(|(_, checked)| *checked).collect();
    let ng_modules: Vec<String> = loop {
        let selected = prompter.multi_select(
            &step(10, "What Angular modules will your library use? (animations is angular 4+ only)"),
            &module_names,
            &module_defaults,
        )?;
        let modules: Vec<String> = selected
            .into_iter()
            .filter_map(|index| module_names.get(index).map(|name| name.to_string()))
            .collect();
        match validators::validate_ng_modules(&modules) {
            Ok(()) => break modules,
            Err(e) => println!("{e}"),
        }
    };

    let other_dependencies = prompter.input(
        &step(11, "What other dependencies does your library need (comma-separated)?"),
        Some(""),
        None,
    )?;
    let use_greenkeeper = prompter.confirm(
        &step(12, "Do you want to use Greenkeeper (to automatically keep your dependencies up-to-date)?"),
        true,
    )?;
    let use_compodoc = prompter.confirm(
        &step(13, "Do you want to use Compodoc (to generate your Angular project documentation)?"),
        false,
    )?;
    let enforce_ng_git_commit_msg = prompter.confirm(
        &step(14, "Do you want to enforce the Angular git commit message convention?"),
        false,
    )?;

    Ok(Answers {
        author_name,
        author_email,
        github_username,
        github_repo_name: None,
        project_name,
        project_version,
        project_description,
        project_keywords: split_list(&project_keywords),
        ng_prefix,
        ng_version: ng_version.to_string(),
        ng_modules,
        other_dependencies: split_list(&other_dependencies),
        use_greenkeeper,
        use_compodoc,
        enforce_ng_git_commit_msg,
    })
}

/// Parses answers supplied as a JSON object.
pub fn parse_answers(content: &str) -> Result<Answers> {
    serde_json::from_str(content.trim())
        .map_err(|e| Error::ConfigError(format!("Invalid answers: {e}")))
}

/// Reads answers from stdin instead of prompting.
pub fn load_answers_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}
