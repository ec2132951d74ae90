//! Multi-select filter widget.
//!
//! The widget owns no markup. It normalizes the selection, lines up the
//! choices and hands both to an external [`TemplateRenderer`].

use crate::error::Result;
use crate::i18n::Translate;
use crate::modifiers::SortOption;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Template rendered for filter choices.
pub const FILTER_CHOICE_TEMPLATE: &str = "vitrine/front/product/filter_choice.jinja";

/// Errors reported by a template renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to render {template}: {message}")]
    Failed { template: String, message: String },
}

/// Already-escaped markup returned by a renderer. It is passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap renderer output that is safe to emit verbatim.
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Markup(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values handed to [`FILTER_CHOICE_TEMPLATE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChoiceContext {
    pub name: String,
    pub values: Vec<String>,
    /// `(value, label)` pairs, labels already translated
    pub choices: Vec<(String, String)>,
}

/// Template engine seam.
pub trait TemplateRenderer: Send + Sync {
    fn render(
        &self,
        template: &str,
        context: &FilterChoiceContext,
    ) -> std::result::Result<Markup, RenderError>;
}

/// Select-multiple widget backed by [`FILTER_CHOICE_TEMPLATE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterWidget {
    pub choices: Vec<SortOption>,
}

impl FilterWidget {
    pub fn new(choices: Vec<SortOption>) -> Self {
        Self { choices }
    }

    /// Build the template context without rendering it.
    ///
    /// Declared choices come first, followed by `extra_choices`; duplicates
    /// are kept. Selected values are not checked against the choices.
    pub fn context(
        &self,
        name: &str,
        value: Option<Vec<String>>,
        extra_choices: &[SortOption],
        translator: &dyn Translate,
    ) -> FilterChoiceContext {
        let choices = self
            .choices
            .iter()
            .chain(extra_choices)
            .map(|option| {
                (option.value.clone(), option.label.translate(translator))
            })
            .collect();

        FilterChoiceContext {
            name: name.to_string(),
            values: value.unwrap_or_default(),
            choices,
        }
    }

    pub fn render(
        &self,
        name: &str,
        value: Option<Vec<String>>,
        extra_choices: &[SortOption],
        renderer: &dyn TemplateRenderer,
        translator: &dyn Translate,
    ) -> Result<Markup> {
        let context = self.context(name, value, extra_choices, translator);
        tracing::trace!(
            target: "listing::widget",
            name,
            choices = context.choices.len(),
            "rendering filter choices"
        );
        Ok(renderer.render(FILTER_CHOICE_TEMPLATE, &context)?)
    }
}
