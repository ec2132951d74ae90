//! Lazily translated labels.
//!
//! Labels are declared as message ids when a modifier is defined and only
//! run through a [`Translate`] implementation when something is rendered for
//! a request.

use serde::Serialize;
use std::fmt;

/// Message catalogue lookup.
pub trait Translate: Send + Sync {
    fn translate(&self, msgid: &str) -> String;
}

/// Returns message ids untouched; the non-localized default.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translate for IdentityTranslator {
    fn translate(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, msgid: &str) -> String {
        self(msgid)
    }
}

/// A user-facing label, kept as its untranslated message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Label(&'static str);

impl Label {
    pub const fn new(msgid: &'static str) -> Self {
        Label(msgid)
    }

    pub fn msgid(&self) -> &'static str {
        self.0
    }

    pub fn translate(&self, translator: &dyn Translate) -> String {
        translator.translate(self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
