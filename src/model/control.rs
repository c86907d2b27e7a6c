//! Hypermedia controls and the JSON schemas they embed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::framework::Method;

/// A link or action descriptor found under `"@controls"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Control {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Control {
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    /// The control's method. Missing or unrecognised methods mean GET.
    pub fn method(&self) -> Method {
        self.method
            .as_deref()
            .and_then(Method::parse)
            .unwrap_or_default()
    }
}

/// Input description of a writable control.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Field name to description. Order is the order the server wrote them in.
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl Schema {
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_keeps_property_order() {
        let control: Control = serde_json::from_value(json!({
            "href": "/api/users/alice/",
            "method": "PUT",
            "encoding": "json",
            "schema": {
                "type": "object",
                "required": ["name", "userName"],
                "properties": {
                    "name": {"description": "Name of user", "type": "string"},
                    "userName": {"description": "User unique identifer string", "type": "string"}
                }
            }
        }))
        .unwrap();

        assert_eq!(control.method(), Method::Put);
        let schema = control.schema.unwrap();
        let names: Vec<_> = schema.properties.keys().cloned().collect();
        assert_eq!(names, vec!["name", "userName"]);
        assert!(schema.is_required("userName"));
        assert!(!schema.is_required("description"));
    }

    #[test]
    fn test_plain_link_defaults_to_get() {
        let control: Control = serde_json::from_value(json!({"href": "/api/users/"})).unwrap();
        assert_eq!(control.method(), Method::Get);
        assert!(control.schema.is_none());
    }
}
