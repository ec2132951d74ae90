//! Declarative form field descriptions.
//!
//! Modifiers only describe the fields they need; building inputs and
//! validating submissions belongs to whatever renders the form.

use crate::i18n::Label;
use serde::Serialize;

/// How a character field is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWidget {
    #[default]
    TextInput,
    Select,
    SelectMultiple,
}

/// A (machine key, human label) pair offered by a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: String,
    pub label: Label,
}

impl SortOption {
    pub fn new(value: impl Into<String>, label: Label) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }
}

/// Form field kinds a modifier can declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDescriptor {
    Boolean {
        label: Label,
        required: bool,
        initial: bool,
    },
    Integer {
        label: Label,
        required: bool,
        initial: i64,
    },
    Char {
        label: Label,
        required: bool,
        widget: FieldWidget,
    },
    Choice {
        label: Label,
        required: bool,
        choices: Vec<SortOption>,
    },
}

impl FieldDescriptor {
    pub fn label(&self) -> Label {
        match self {
            FieldDescriptor::Boolean { label, .. }
            | FieldDescriptor::Integer { label, .. }
            | FieldDescriptor::Char { label, .. }
            | FieldDescriptor::Choice { label, .. } => *label,
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            FieldDescriptor::Boolean { required, .. }
            | FieldDescriptor::Integer { required, .. }
            | FieldDescriptor::Char { required, .. }
            | FieldDescriptor::Choice { required, .. } => *required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptors_serialize_with_kind_tag() {
        let field = FieldDescriptor::Char {
            label: Label::new("Sort"),
            required: false,
            widget: FieldWidget::Select,
        };

        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({"kind": "char", "label": "Sort", "required": false, "widget": "select"})
        );
        assert!(!field.is_required());
        assert_eq!(field.label().msgid(), "Sort");
    }
}
