//! User pages: the create-user form and a user's own page.

use crate::model::{RenderError, ResourceBody};
use crate::routes::{Route, REL_START};
use crate::view::{render_form, Page, Paragraph, SubmitHandler};

use super::RenderContext;

const ADD_USER: &str = "fpoint:add-user";
const COLLECTIONS_BY: &str = "fpoint:collections-by";
const EDIT: &str = "edit";

/// Renders the users list as a sign-up page. Only the `add-user` control is
/// used; the list itself is not shown.
pub fn render_create_user(body: &ResourceBody, ctx: &RenderContext<'_>) -> Result<Page, RenderError> {
    let form = render_form(body.control(ADD_USER)?, SubmitHandler::User)?;
    let back = ctx.link(Route::CreateUser, REL_START, "Back", ctx.api_root)?;

    let mut page = Page::blank(Route::CreateUser);
    page.navigation = Some(back);
    page.content_title = Some("Create a new user".to_string());
    page.content_data.push(Paragraph::text(
        "Fill the form to create a new user. Your username must be unique.",
    ));
    page.form = Some(form);
    Ok(page)
}

pub fn render_user_page(body: &ResourceBody, ctx: &RenderContext<'_>) -> Result<Page, RenderError> {
    let name = body.text("name")?;
    let user_name = body.text("userName")?;
    let collections = ctx.control_link(Route::User, body, COLLECTIONS_BY, "click to see your collections.")?;
    let mut form = render_form(body.control(EDIT)?, SubmitHandler::User)?;
    form.set_value("name", name.as_str());
    form.set_value("userName", user_name);

    let mut page = Page::blank(Route::User);
    page.content_title = Some(name);
    page.content_data.push(Paragraph::with_link(
        "This is your user page. You can edit your information or ",
        collections,
    ));
    page.form = Some(form);
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Method;
    use crate::routes::RouteTable;
    use serde_json::{json, Value};

    fn body(value: Value) -> ResourceBody {
        serde_json::from_value(value).unwrap()
    }

    fn user_schema() -> Value {
        json!({
            "type": "object",
            "required": ["name", "userName"],
            "properties": {
                "name": {"description": "Users name", "type": "string"},
                "userName": {"description": "Users unique username", "type": "string"}
            }
        })
    }

    #[test]
    fn test_create_user_page() {
        let routes = RouteTable::default();
        let ctx = RenderContext::new("/api/", &routes);
        let users = body(json!({
            "items": [{"name": "Alice", "userName": "alice"}],
            "@controls": {
                "self": {"href": "/api/users/"},
                "fpoint:add-user": {"href": "/api/users/", "method": "POST", "encoding": "json", "schema": user_schema()}
            }
        }));

        let page = render_create_user(&users, &ctx).unwrap();

        let back = page.navigation.unwrap();
        assert_eq!((back.text.as_str(), back.href.as_str(), back.route), ("Back", "/api/", Route::Start));
        assert_eq!(page.content_title.as_deref(), Some("Create a new user"));
        assert!(page.table_rows.is_empty());
        let form = page.form.unwrap();
        assert_eq!(form.method, Method::Post);
        assert_eq!(form.handler, SubmitHandler::User);
        assert!(form.fields.iter().all(|f| f.required && f.value.is_empty()));
    }

    #[test]
    fn test_user_page_prefills_form() {
        let routes = RouteTable::default();
        let ctx = RenderContext::new("/api/", &routes);
        let user = body(json!({
            "name": "Alice",
            "userName": "alice",
            "@controls": {
                "self": {"href": "/api/users/alice/"},
                "fpoint:collections-by": {"href": "/api/users/alice/collections/"},
                "edit": {"href": "/api/users/alice/", "method": "PUT", "schema": user_schema()}
            }
        }));

        let page = render_user_page(&user, &ctx).unwrap();

        assert_eq!(page.content_title.as_deref(), Some("Alice"));
        let link = page.content_data[0].link.as_ref().unwrap();
        assert_eq!(link.route, Route::Collections);
        assert_eq!(link.href, "/api/users/alice/collections/");
        let form = page.form.unwrap();
        assert_eq!(form.value("name"), "Alice");
        assert_eq!(form.value("userName"), "alice");
        assert_eq!(form.method, Method::Put);
    }
}
