//! Identity of a modifier in the listing configuration.

use super::fields::FieldDescriptor;
use crate::i18n::Label;
use vitrine_config::{DEFAULT_ORDERING, ListingConfiguration, Result};

/// The four settings keys and labels a modifier is administered through.
///
/// Descriptors are declared as `const` items next to each modifier and never
/// change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModifierDescriptor {
    pub is_active_key: &'static str,
    pub is_active_label: Label,
    pub ordering_key: &'static str,
    pub ordering_label: Label,
}

impl ModifierDescriptor {
    pub const fn new(
        is_active_key: &'static str,
        is_active_label: &'static str,
        ordering_key: &'static str,
        ordering_label: &'static str,
    ) -> Self {
        Self {
            is_active_key,
            is_active_label: Label::new(is_active_label),
            ordering_key,
            ordering_label: Label::new(ordering_label),
        }
    }

    /// Whether the modifier is switched on. An absent or empty
    /// configuration leaves it off.
    pub fn is_active(&self, configuration: Option<&ListingConfiguration>) -> bool {
        match configuration {
            Some(config) if !config.is_empty() => {
                config.is_active(self.is_active_key)
            }
            _ => false,
        }
    }

    /// Priority among active modifiers; lower runs first.
    pub fn ordering(
        &self,
        configuration: Option<&ListingConfiguration>,
    ) -> Result<i64> {
        match configuration {
            Some(config) if !config.is_empty() => {
                config.ordering(self.ordering_key)
            }
            _ => Ok(DEFAULT_ORDERING),
        }
    }

    /// The on/off flag and the priority, as admin form fields.
    pub fn admin_fields(&self) -> Vec<(String, FieldDescriptor)> {
        vec![
            (
                self.is_active_key.to_string(),
                FieldDescriptor::Boolean {
                    label: self.is_active_label,
                    required: false,
                    initial: false,
                },
            ),
            (
                self.ordering_key.to_string(),
                FieldDescriptor::Integer {
                    label: self.ordering_label,
                    required: true,
                    initial: DEFAULT_ORDERING,
                },
            ),
        ]
    }
}
