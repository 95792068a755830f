//! Template rendering for generated files.
//! Rendered templates are MiniJinja sources evaluated against the run's
//! render context.
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps trailing newlines and rejects unknown variables.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template cannot be parsed or rendered
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_trailing_newline() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "project_name": "my-lib" });
        assert_eq!(renderer.render("{{ project_name }}\n", &context).unwrap(), "my-lib\n");
    }

    #[test]
    fn test_unknown_variable_is_an_error() {
        let renderer = MiniJinjaRenderer::new();
        let err = renderer.render("{{ missing }}", &serde_json::json!({})).unwrap_err();
        assert!(matches!(err, Error::MinijinjaError(_)));
    }
}
