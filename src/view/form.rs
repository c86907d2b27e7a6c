//! # Form Builder
//!
//! Turns a control's schema into a [`Form`]: one labelled input per property,
//! required markers from the schema's `required` list, a submit button, and the
//! [`SubmitHandler`] that runs when the form is submitted.

use crate::framework::Method;
use crate::model::{Control, RenderError};

/// Which submit handler a form is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitHandler {
    /// Login form on the start page: navigates to the named user.
    FindUser,
    User,
    Collection,
    Recipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    TextArea { rows: u16, cols: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn input(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Input,
            required: false,
            value: String::new(),
        }
    }
}

/// Content of `div.form`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub action: String,
    pub method: Method,
    pub fields: Vec<FormField>,
    pub submit_label: String,
    pub handler: SubmitHandler,
}

impl Form {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value of a field; absent fields read as empty.
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Sets a field's value. Returns `false` if there is no such field.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Swaps a single-line input for a multi-line text area, keeping its
    /// label and value. Text areas are never required.
    pub fn use_textarea(&mut self, name: &str, rows: u16, cols: u16) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.kind = FieldKind::TextArea { rows, cols };
                field.required = false;
                true
            }
            None => false,
        }
    }

    /// The first required field left empty, which blocks submission.
    /// Whitespace counts as a value.
    pub fn first_missing_required(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.required && f.value.is_empty())
            .map(|f| f.name.as_str())
    }
}

/// Builds a form for a writable control.
pub fn render_form(ctrl: &Control, handler: SubmitHandler) -> Result<Form, RenderError> {
    let schema = ctrl
        .schema
        .as_ref()
        .ok_or_else(|| RenderError::MissingSchema(ctrl.href.clone()))?;

    let fields = schema
        .properties
        .iter()
        .map(|(name, property)| FormField {
            name: name.clone(),
            label: format!("{} ({})", name, property.description),
            kind: FieldKind::Input,
            required: schema.is_required(name),
            value: String::new(),
        })
        .collect();

    Ok(Form {
        action: ctrl.href.clone(),
        method: ctrl.method(),
        fields,
        submit_label: "Submit".to_string(),
        handler,
    })
}
