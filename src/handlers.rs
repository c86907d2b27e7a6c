//! # Submit Handlers
//!
//! What happens when a form is submitted. [`prepare`] reads the form and
//! decides what to do: navigate, send a payload, or nothing at all.
//! [`after_submit`] patches the page once a sent payload was accepted.
//!
//! Both are pure functions of the form and the response; the browser actor
//! does the I/O and checks the page generation around them.

use serde::Serialize;
use tracing::debug;

use crate::framework::{HttpResponse, Method};
use crate::model::{CollectionPayload, RecipePayload, UserPayload};
use crate::renderers::FollowUp;
use crate::routes::Route;
use crate::view::{Form, Page, Paragraph, SubmitHandler};

/// Request body for any of the write controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    User(UserPayload),
    Collection(CollectionPayload),
    Recipe(RecipePayload),
}

/// What a submitted form turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A required field is empty; nothing is sent.
    Blocked { field: String },
    /// The login form: go to the named user's page.
    Navigate(FollowUp),
    Send {
        href: String,
        method: Method,
        payload: Payload,
    },
    /// User forms build their payload but do not send it yet.
    NotWired(UserPayload),
}

pub fn prepare(form: &Form) -> Submission {
    if let Some(field) = form.first_missing_required() {
        return Submission::Blocked {
            field: field.to_string(),
        };
    }

    match form.handler {
        SubmitHandler::FindUser => Submission::Navigate(FollowUp {
            href: format!("{}{}/", form.action, form.value("userName")),
            route: Route::User,
        }),
        SubmitHandler::User => Submission::NotWired(UserPayload {
            name: form.value("name").to_string(),
            user_name: form.value("userName").to_string(),
        }),
        SubmitHandler::Collection => send(
            form,
            Payload::Collection(CollectionPayload {
                name: form.value("name").to_string(),
                description: form.value("description").to_string(),
            }),
        ),
        SubmitHandler::Recipe => send(
            form,
            Payload::Recipe(RecipePayload {
                title: form.value("title").to_string(),
                description: form.value("description").to_string(),
                ingredients: form.value("ingredients").to_string(),
                rating: RecipePayload::rating_from_input(form.value("rating")),
                ethnicity: form.value("ethnicity").to_string(),
                category: form.value("category").to_string(),
            }),
        ),
    }
}

fn send(form: &Form, payload: Payload) -> Submission {
    Submission::Send {
        href: form.action.clone(),
        method: form.method,
        payload,
    }
}

/// Applies the handler's post-processing to an accepted submission.
///
/// `form` is the form as it was submitted. Returns a fetch to perform next,
/// if the handler needs one.
pub fn after_submit(
    handler: SubmitHandler,
    response: &HttpResponse,
    form: &Form,
    page: &mut Page,
) -> Option<FollowUp> {
    page.show_message("Successful");
    match (handler, response.location()) {
        (SubmitHandler::Collection, Some(location)) => Some(FollowUp {
            href: location.to_string(),
            route: Route::AppendCollectionRow,
        }),
        (SubmitHandler::Recipe, Some(location)) => {
            debug!(%location, "Recipe created");
            None
        }
        (SubmitHandler::Recipe, None) => {
            page.content_title = Some(form.value("title").to_string());
            page.content_data = vec![Paragraph::text(format!(
                "Description: {}",
                form.value("description")
            ))];
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{FieldKind, FormField};
    use serde_json::json;

    fn form(handler: SubmitHandler, method: Method, fields: &[(&str, &str, bool)]) -> Form {
        Form {
            action: "/api/users/alice/collections/".into(),
            method,
            fields: fields
                .iter()
                .map(|(name, value, required)| FormField {
                    name: name.to_string(),
                    label: name.to_string(),
                    kind: FieldKind::Input,
                    required: *required,
                    value: value.to_string(),
                })
                .collect(),
            submit_label: "Submit".into(),
            handler,
        }
    }

    fn recipe_form(rating: &str) -> Form {
        form(
            SubmitHandler::Recipe,
            Method::Put,
            &[
                ("title", "Borscht", true),
                ("description", "Beet soup", false),
                ("ingredients", "beets", false),
                ("rating", rating, false),
                ("ethnicity", "Ukrainian", false),
                ("category", "Soup", false),
            ],
        )
    }

    #[test]
    fn test_find_user_appends_username() {
        let mut login = form(SubmitHandler::FindUser, Method::Get, &[("userName", "alice", false)]);
        login.action = "/api/users/".into();
        assert_eq!(
            prepare(&login),
            Submission::Navigate(FollowUp {
                href: "/api/users/alice/".into(),
                route: Route::User
            })
        );
    }

    #[test]
    fn test_empty_required_field_blocks() {
        let recipe = form(SubmitHandler::Recipe, Method::Put, &[("title", "", true)]);
        assert_eq!(
            prepare(&recipe),
            Submission::Blocked {
                field: "title".into()
            }
        );
    }

    #[test]
    fn test_user_form_is_not_sent() {
        let user = form(
            SubmitHandler::User,
            Method::Post,
            &[("name", "Alice", true), ("userName", "alice", true)],
        );
        assert_eq!(
            prepare(&user),
            Submission::NotWired(UserPayload {
                name: "Alice".into(),
                user_name: "alice".into()
            })
        );
    }

    #[test]
    fn test_empty_rating_is_omitted() {
        let Submission::Send { payload, method, .. } = prepare(&recipe_form("")) else {
            panic!("expected a send");
        };
        assert_eq!(method, Method::Put);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "title": "Borscht",
                "description": "Beet soup",
                "ingredients": "beets",
                "ethnicity": "Ukrainian",
                "category": "Soup"
            })
        );
    }

    #[test]
    fn test_collection_created_appends_row() {
        let collection = form(
            SubmitHandler::Collection,
            Method::Post,
            &[("name", "Soups", true), ("description", "", false)],
        );
        let response = HttpResponse::new(201).with_header("Location", "/api/users/alice/collections/Soups/");
        let mut page = Page::blank(Route::Collections);

        let follow_up = after_submit(SubmitHandler::Collection, &response, &collection, &mut page);

        assert_eq!(page.notification_text(), Some("Successful"));
        assert_eq!(
            follow_up,
            Some(FollowUp {
                href: "/api/users/alice/collections/Soups/".into(),
                route: Route::AppendCollectionRow
            })
        );
    }

    #[test]
    fn test_recipe_update_patches_title() {
        let mut page = Page::blank(Route::Recipe);
        page.content_title = Some("Old".into());
        page.content_data = vec![Paragraph::text("Description: old")];

        let follow_up = after_submit(SubmitHandler::Recipe, &HttpResponse::new(204), &recipe_form("4"), &mut page);

        assert!(follow_up.is_none());
        assert_eq!(page.content_title.as_deref(), Some("Borscht"));
        assert_eq!(page.content_data, vec![Paragraph::text("Description: Beet soup")]);
    }

    #[test]
    fn test_recipe_created_changes_nothing_else() {
        let mut page = Page::blank(Route::Collection);
        page.content_title = Some("Soups".into());
        let response = HttpResponse::new(201).with_header("Location", "/api/users/alice/collections/Soups/2/");

        let follow_up = after_submit(SubmitHandler::Recipe, &response, &recipe_form(""), &mut page);

        assert!(follow_up.is_none());
        assert_eq!(page.content_title.as_deref(), Some("Soups"));
        assert_eq!(page.notification_text(), Some("Successful"));
    }
}
