use std::cell::RefCell;
use std::collections::VecDeque;

use ngxgen::error::{Error, Result};
use ngxgen::prompt::{
    parse_answers, prompt_answers, split_list, PromptDefaults, Prompter, Validator,
};

/// Replays canned answers and records the questions asked.
#[derive(Default)]
struct ScriptedPrompter {
    inputs: RefCell<VecDeque<&'static str>>,
    confirms: RefCell<VecDeque<bool>>,
    selects: RefCell<VecDeque<usize>>,
    multi_selects: RefCell<VecDeque<Vec<usize>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn next<T>(&self, queue: &RefCell<VecDeque<T>>, prompt: &str) -> Result<T> {
        self.asked.borrow_mut().push(prompt.to_string());
        queue
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::ConfigError(format!("no scripted answer for '{prompt}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>, validator: Option<Validator>) -> Result<String> {
        let answer = self.next(&self.inputs, prompt)?;
        let answer = if answer.is_empty() { default.unwrap_or_default() } else { answer };
        if let Some(validator) = validator {
            validator(answer)?;
        }
        Ok(answer.to_string())
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.next(&self.confirms, prompt)
    }

    fn select(&self, prompt: &str, _items: &[&str], _default: usize) -> Result<usize> {
        self.next(&self.selects, prompt)
    }

    fn multi_select(&self, prompt: &str, _items: &[&str], _defaults: &[bool]) -> Result<Vec<usize>> {
        self.next(&self.multi_selects, prompt)
    }
}

fn scripted(inputs: &[&'static str], multi_selects: Vec<Vec<usize>>) -> ScriptedPrompter {
    ScriptedPrompter {
        inputs: RefCell::new(inputs.iter().copied().collect()),
        confirms: RefCell::new([true, false, true].into_iter().collect()),
        selects: RefCell::new([1].into_iter().collect()),
        multi_selects: RefCell::new(multi_selects.into_iter().collect()),
        ..ScriptedPrompter::default()
    }
}

const INPUTS: &[&str] = &[
    "Jane Doe",
    "jane@example.com",
    "jdoe",
    "ngx-widgets",
    "1.0.0",
    "Widgets for Angular",
    "angular, widgets, ,ui",
    "ngx-w",
    "lodash,moment",
];

#[test]
fn test_prompt_answers_in_order() {
    let prompter = scripted(INPUTS, vec![vec![0, 1, 13]]);
    let answers = prompt_answers(&prompter, &PromptDefaults::default()).unwrap();

    assert_eq!(answers.author_name, "Jane Doe");
    assert_eq!(answers.project_name, "ngx-widgets");
    assert_eq!(answers.project_keywords, ["angular", "widgets", "ui"]);
    assert_eq!(answers.ng_version, "4.0.0");
    assert_eq!(answers.ng_modules, ["core", "common", "animations"]);
    assert_eq!(answers.other_dependencies, ["lodash", "moment"]);
    assert!(answers.use_greenkeeper);
    assert!(!answers.use_compodoc);
    assert!(answers.enforce_ng_git_commit_msg);
    assert_eq!(answers.github_repo_name, None);

    let asked = prompter.asked.borrow();
    assert_eq!(asked.len(), 14);
    assert!(asked[0].starts_with("(1/14)"));
    assert!(asked[13].starts_with("(14/14)"));
}

#[test]
fn test_prompt_answers_uses_git_defaults() {
    let mut inputs = INPUTS.to_vec();
    inputs[0] = "";
    inputs[1] = "";
    let prompter = scripted(&inputs, vec![vec![0]]);
    let defaults = PromptDefaults {
        author_name: Some("Git User".to_string()),
        author_email: Some("git@example.com".to_string()),
    };

    let answers = prompt_answers(&prompter, &defaults).unwrap();
    assert_eq!(answers.author_name, "Git User");
    assert_eq!(answers.author_email, "git@example.com");
}

#[test]
fn test_prompt_answers_asks_modules_again_when_none_selected() {
    let prompter = scripted(INPUTS, vec![vec![], vec![0]]);
    let answers = prompt_answers(&prompter, &PromptDefaults::default()).unwrap();

    assert_eq!(answers.ng_modules, ["core"]);
    assert_eq!(prompter.asked.borrow().len(), 15);
}

#[test]
fn test_prompt_answers_propagates_validation_errors() {
    let mut inputs = INPUTS.to_vec();
    inputs[1] = "not-an-email";
    let prompter = scripted(&inputs, vec![vec![0]]);

    assert!(matches!(
        prompt_answers(&prompter, &PromptDefaults::default()),
        Err(Error::ValidationError(_))
    ));
}

#[test]
fn test_split_list() {
    assert_eq!(split_list(" a, b ,,c "), ["a", "b", "c"]);
    assert!(split_list("").is_empty());
}

#[test]
fn test_parse_answers() {
    let answers = parse_answers(
        r#"{
            "authorName": "Jane Doe",
            "authorEmail": "jane@example.com",
            "githubUsername": "jdoe",
            "projectName": "ngx-widgets",
            "projectVersion": "0.0.1",
            "ngVersion": "2.0.0",
            "ngModules": ["core", "common"]
        }"#,
    )
    .unwrap();

    assert_eq!(answers.ng_prefix, "my-lib");
    assert!(answers.project_keywords.is_empty());
    assert!(!answers.use_compodoc);
}

#[test]
fn test_parse_answers_rejects_missing_fields() {
    assert!(matches!(parse_answers(r#"{"authorName": "Jane"}"#), Err(Error::ConfigError(_))));
}
