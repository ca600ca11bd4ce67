//! Placeholder substitution engines.
//!
//! Handles:
//! - `{{name}}` placeholders (whitespace inside the braces is allowed)
//! - Lenient substitution: unknown placeholders are kept verbatim
//! - Strict substitution through Tera: unknown placeholders fail the render

use std::collections::BTreeMap;
use std::error::Error as _;
use std::fmt::Debug;

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::RenderMode;
use crate::error::{Error, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Template variables for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateVars {
    values: BTreeMap<String, String>,
}

impl TemplateVars {
    /// Create an empty variable set
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables for project-level templates
    pub fn project(project_name: &str) -> Self {
        Self::new().with("projectName", project_name)
    }

    /// Variables for component-scoped templates
    pub fn component(component_name: &str) -> Self {
        Self::new().with("componentName", component_name)
    }

    /// Bind a variable
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Iterate over bound variables in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Substitutes variables into template text.
///
/// `name` is only used to label errors.
pub trait Renderer: Debug + Send + Sync {
    fn render(&self, name: &str, text: &str, vars: &TemplateVars) -> Result<String>;
}

/// Build the renderer for a render mode
pub fn renderer_for(mode: RenderMode) -> Box<dyn Renderer> {
    match mode {
        RenderMode::Lenient => Box::new(PlaceholderRenderer),
        RenderMode::Strict => Box::new(TeraRenderer),
    }
}

/// Lenient `{{name}}` substitution.
///
/// Placeholders without a bound variable are copied to the output unchanged,
/// so JSX object literals such as `style={{ margin: 0 }}` survive rendering.
/// An opening `{{` with no closing `}}` is a malformed template.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl Renderer for PlaceholderRenderer {
    fn render(&self, name: &str, text: &str, vars: &TemplateVars) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut rest = text;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let Some(end) = after_open.find(CLOSE) else {
                return Err(Error::render(
                    name,
                    format!("unclosed placeholder at byte {}", offset + start),
                ));
            };

            let key = after_open[..end].trim();
            let consumed = start + OPEN.len() + end + CLOSE.len();
            match vars.get(key) {
                Some(value) => output.push_str(value),
                None => output.push_str(&rest[start..consumed]),
            }

            rest = &rest[consumed..];
            offset += consumed;
        }

        output.push_str(rest);
        Ok(output)
    }
}

/// Strict rendering with Tera; undefined variables are errors
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl Renderer for TeraRenderer {
    fn render(&self, name: &str, text: &str, vars: &TemplateVars) -> Result<String> {
        let context =
            Context::from_serialize(vars).map_err(|e| Error::render(name, describe(&e)))?;
        Tera::one_off(text, &context, false).map_err(|e| Error::render(name, describe(&e)))
    }
}

/// Flatten a Tera error chain; the top-level message alone is rarely useful
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_vars_constructors() {
        assert_eq!(TemplateVars::project("my-app").get("projectName"), Some("my-app"));
        assert_eq!(
            TemplateVars::component("Button").get("componentName"),
            Some("Button")
        );
        assert!(TemplateVars::new().is_empty());
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let vars = TemplateVars::new().with("first", "A").with("second", "B");
        let out = PlaceholderRenderer
            .render("t", "{{first}}-{{second}}-{{first}}", &vars)
            .unwrap();
        assert_eq!(out, "A-B-A");
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_unbound_placeholder_left_literal() {
        let vars = TemplateVars::new().with("first", "A");
        let out = PlaceholderRenderer
            .render("t", "{{first}} and {{second}}", &vars)
            .unwrap();
        assert_eq!(out, "A and {{second}}");
    }

    #[test]
    fn test_whitespace_inside_braces() {
        let vars = TemplateVars::project("demo");
        let out = PlaceholderRenderer
            .render("t", "<title>{{ projectName }}</title>", &vars)
            .unwrap();
        assert_eq!(out, "<title>demo</title>");
    }

    #[test]
    fn test_jsx_object_literal_survives() {
        let vars = TemplateVars::component("Card");
        let text = "<div className=\"{{componentName}}\" style={{ margin: 0 }} />";
        let out = PlaceholderRenderer.render("t", text, &vars).unwrap();
        assert_eq!(out, "<div className=\"Card\" style={{ margin: 0 }} />");
    }

    #[test]
    fn test_unclosed_placeholder_is_malformed() {
        let vars = TemplateVars::project("demo");
        let err = PlaceholderRenderer
            .render("project/index.html", "ok {{projectName}} then {{oops", &vars)
            .unwrap_err();
        match err {
            Error::Render { template, message } => {
                assert_eq!(template, "project/index.html");
                assert!(message.contains("byte 24"), "{}", message);
            }
            other => panic!("expected Render, got {:?}", other),
        }
    }

    #[test]
    fn test_text_without_placeholders_is_unchanged() {
        let text = "body { margin: 0; }\n";
        let out = PlaceholderRenderer
            .render("t", text, &TemplateVars::new())
            .unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn test_tera_renders_bound_variables() {
        let vars = TemplateVars::project("demo");
        let out = TeraRenderer
            .render("t", "name: {{ projectName }}", &vars)
            .unwrap();
        assert_eq!(out, "name: demo");
    }

    #[test]
    fn test_template_vars_serialize_as_flat_object() {
        let vars = TemplateVars::project("demo").with("componentName", "Button");
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"componentName": "Button", "projectName": "demo"})
        );

        let out = TeraRenderer
            .render("t", "{{ projectName }}/{{ componentName }}", &vars)
            .unwrap();
        assert_eq!(out, "demo/Button");
    }

    #[test]
    fn test_tera_rejects_unbound_variables() {
        let vars = TemplateVars::project("demo");
        let err = TeraRenderer
            .render("t", "{{ componentName }}", &vars)
            .unwrap_err();
        assert!(matches!(err, Error::Render { .. }));
    }

    #[test]
    fn test_tera_does_not_escape_html() {
        let vars = TemplateVars::project("<b>&</b>");
        let out = TeraRenderer.render("t", "{{ projectName }}", &vars).unwrap();
        assert_eq!(out, "<b>&</b>");
    }

    #[test]
    fn test_renderer_for_mode() {
        let vars = TemplateVars::new();
        let lenient = renderer_for(RenderMode::Lenient);
        assert_eq!(lenient.render("t", "{{x}}", &vars).unwrap(), "{{x}}");

        let strict = renderer_for(RenderMode::Strict);
        assert!(strict.render("t", "{{x}}", &vars).is_err());
    }
}
