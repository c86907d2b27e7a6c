//! Request bodies for the write controls.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Body for `fpoint:add-user` and a user's `edit` control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    #[serde(rename = "userName")]
    pub user_name: String,
}

/// Body for `fpoint:add-collection` and a collection's `edit` control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPayload {
    pub name: String,
    pub description: String,
}

/// Body for `fpoint:add-recipe` and a recipe's `edit` control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,
    pub ethnicity: String,
    pub category: String,
}

impl RecipePayload {
    /// Converts the rating input into the payload value.
    ///
    /// Empty input drops the key. Numeric input is sent as a JSON number;
    /// anything else is passed through as a string for the server to judge.
    pub fn rating_from_input(input: &str) -> Option<Value> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        match input.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(number) => Some(Value::Number(number)),
            None => Some(Value::String(input.to_string())),
        }
    }
}
