//! Decoded resource representations and the error envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::control::Control;
use super::error::RenderError;

/// One API resource: domain fields plus its `"@controls"`.
///
/// Fields are kept loosely typed. Renderers pick out what they need through
/// the accessors, which turn absent data into a [`RenderError`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceBody {
    #[serde(rename = "@controls", default)]
    pub controls: HashMap<String, Control>,
    #[serde(rename = "@namespaces", default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ResourceBody {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// A field's value, treating JSON `null` as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    /// A field rendered as display text. Fails when the field is absent or null.
    pub fn text(&self, name: &str) -> Result<String, RenderError> {
        self.optional_text(name)
            .ok_or_else(|| RenderError::MissingField(name.to_string()))
    }

    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.field(name).map(value_text)
    }

    /// Like [`optional_text`](Self::optional_text), but empty strings count as absent.
    pub fn non_empty_text(&self, name: &str) -> Option<String> {
        self.optional_text(name).filter(|s| !s.is_empty())
    }

    pub fn control(&self, rel: &str) -> Result<&Control, RenderError> {
        self.controls
            .get(rel)
            .ok_or_else(|| RenderError::MissingControl(rel.to_string()))
    }

    /// Decodes the `items` list of a collection body.
    pub fn items(&self) -> Result<Vec<ResourceBody>, RenderError> {
        let items = self
            .fields
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| RenderError::MissingField("items".to_string()))?;
        items
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone()).map_err(|e| RenderError::InvalidItem {
                    field: "items".to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

/// Display text for a JSON value, as a form input would show it.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            } else {
                n.to_string()
            }
        }
        other => other.to_string(),
    }
}

/// `{"@error": {"@message": ..., "@messages": [...]}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "@error")]
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "@message")]
    pub message: String,
    #[serde(rename = "@messages", default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl ErrorEnvelope {
    /// Extracts `@error.@message`, or `None` when the body is not an envelope.
    pub fn message_from(bytes: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorEnvelope>(bytes)
            .ok()
            .map(|envelope| envelope.error.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> ResourceBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_fields_and_controls_are_split() {
        let user = body(json!({
            "name": "Alice",
            "userName": "alice",
            "@namespaces": {"fpoint": {"name": "/foodpoint/link-relations/"}},
            "@controls": {
                "self": {"href": "/api/users/alice/"},
                "fpoint:collections-by": {"href": "/api/users/alice/collections/"}
            }
        }));
        assert_eq!(user.text("name").unwrap(), "Alice");
        assert_eq!(user.control("self").unwrap().href, "/api/users/alice/");
        assert!(!user.fields.contains_key("@controls"));
        assert!(matches!(user.control("edit"), Err(RenderError::MissingControl(rel)) if rel == "edit"));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let collection = body(json!({"name": "Soups", "description": null, "items": []}));
        assert!(collection.field("description").is_none());
        assert_eq!(
            collection.text("description"),
            Err(RenderError::MissingField("description".into()))
        );
        assert!(collection.items().unwrap().is_empty());
    }

    #[test]
    fn test_numbers_display_like_inputs() {
        assert_eq!(value_text(&json!(4.0)), "4");
        assert_eq!(value_text(&json!(4.5)), "4.5");
        assert_eq!(value_text(&json!(3)), "3");
    }

    #[test]
    fn test_error_envelope_message() {
        let bytes = br#"{"resource_url": "/api/users/bob/", "@error": {"@message": "User not found", "@messages": []}}"#;
        assert_eq!(ErrorEnvelope::message_from(bytes).as_deref(), Some("User not found"));
        assert_eq!(ErrorEnvelope::message_from(b"<html>500</html>"), None);
    }
}
