//! Foodpoint API representations shared by the integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};

pub const API_ROOT: &str = "http://localhost:5000/api/";

fn namespaces() -> Value {
    json!({"fpoint": {"name": "/foodpoint/link-relations/"}})
}

pub fn user_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "userName"],
        "properties": {
            "name": {"description": "Users name", "type": "string"},
            "userName": {"description": "Users unique username", "type": "string"}
        }
    })
}

pub fn collection_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {"description": "Collection name", "type": "string"},
            "description": {"description": "Collection description", "type": "string"}
        }
    })
}

pub fn recipe_schema() -> Value {
    json!({
        "type": "object",
        "required": ["title"],
        "properties": {
            "title": {"description": "title of recipe", "type": "string"},
            "description": {"description": "recipe description", "type": "string"},
            "ingredients": {"description": "ingredients", "type": "string"},
            "rating": {"description": "rating of recipe", "type": "number"},
            "ethnicity": {"description": "ethnicity of food", "type": "string"},
            "category": {"description": "category of food", "type": "string"}
        }
    })
}

pub fn entry_point() -> Value {
    json!({
        "@namespaces": namespaces(),
        "@controls": {
            "fpoint:all-users": {"href": "/api/users/", "title": "All users"}
        }
    })
}

pub fn users() -> Value {
    json!({
        "items": [{"name": "Alice", "userName": "alice", "@controls": {"self": {"href": "/api/users/alice/"}}}],
        "@namespaces": namespaces(),
        "@controls": {
            "self": {"href": "/api/users/"},
            "fpoint:add-user": {
                "href": "/api/users/",
                "method": "POST",
                "encoding": "json",
                "title": "Add a new user",
                "schema": user_schema()
            }
        }
    })
}

pub fn user(name: &str, user_name: &str) -> Value {
    let href = format!("/api/users/{user_name}/");
    json!({
        "name": name,
        "userName": user_name,
        "@namespaces": namespaces(),
        "@controls": {
            "self": {"href": href},
            "collection": {"href": "/api/users/"},
            "fpoint:collections-by": {"href": format!("{href}collections/")},
            "edit": {"href": href, "method": "PUT", "encoding": "json", "schema": user_schema()},
            "fpoint:delete": {"href": href, "method": "DELETE"}
        }
    })
}

pub fn collection_item(user_name: &str, name: &str) -> Value {
    json!({
        "name": name,
        "description": null,
        "@controls": {"self": {"href": format!("/api/users/{user_name}/collections/{name}/")}}
    })
}

pub fn collections_by(user_name: &str, items: Vec<Value>) -> Value {
    let href = format!("/api/users/{user_name}/collections/");
    json!({
        "items": items,
        "@namespaces": namespaces(),
        "@controls": {
            "self": {"href": href},
            "author": {"href": format!("/api/users/{user_name}/")},
            "fpoint:add-collection": {
                "href": href,
                "method": "POST",
                "encoding": "json",
                "schema": collection_schema()
            }
        }
    })
}

pub fn recipe_item(href: &str, title: &str) -> Value {
    json!({"title": title, "@controls": {"self": {"href": href}}})
}

pub fn collection(user_name: &str, name: &str, description: Value, recipes: Vec<Value>) -> Value {
    let href = format!("/api/users/{user_name}/collections/{name}/");
    json!({
        "name": name,
        "description": description,
        "items": recipes,
        "@namespaces": namespaces(),
        "@controls": {
            "self": {"href": href},
            "author": {"href": format!("/api/users/{user_name}/")},
            "fpoint:collections-by": {"href": format!("/api/users/{user_name}/collections/")},
            "edit": {"href": href, "method": "PUT", "schema": collection_schema()},
            "fpoint:add-recipe": {"href": href, "method": "POST", "schema": recipe_schema()}
        }
    })
}

pub const BORSCHT: &str = "/api/users/alice/collections/Soups/1/";

pub fn borscht(rating: Value) -> Value {
    json!({
        "title": "Borscht",
        "description": "Beet soup",
        "ingredients": "beets, cabbage, dill",
        "rating": rating,
        "ethnicity": "Ukrainian",
        "category": "Soup",
        "@namespaces": namespaces(),
        "@controls": {
            "self": {"href": BORSCHT},
            "collection": {"href": "/api/users/alice/collections/Soups/"},
            "edit": {"href": BORSCHT, "method": "PUT", "encoding": "json", "schema": recipe_schema()},
            "fpoint:delete": {"href": BORSCHT, "method": "DELETE"}
        }
    })
}

pub fn error_envelope(message: &str) -> Value {
    json!({
        "resource_url": "/api/users/bob/",
        "@error": {"@message": message, "@messages": []},
        "@namespaces": {"mason": {"name": "http://masontype.org/"}}
    })
}
