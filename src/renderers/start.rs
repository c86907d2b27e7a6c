//! Start page: welcome text, create-user link, login form.

use crate::framework::Method;
use crate::model::{RenderError, ResourceBody};
use crate::routes::Route;
use crate::view::{Form, FormField, Page, Paragraph, SubmitHandler};

use super::RenderContext;

const ALL_USERS: &str = "fpoint:all-users";

pub fn render_start_page(body: &ResourceBody, ctx: &RenderContext<'_>) -> Result<Page, RenderError> {
    let all_users = body.control(ALL_USERS)?;
    let create_user = ctx.link(Route::Start, ALL_USERS, "create a new user.", all_users.href.clone())?;

    let mut page = Page::blank(Route::Start);
    page.content_title = Some("Welcome".to_string());
    page.content_data
        .push(Paragraph::with_link("Enter your username, or ", create_user));
    page.form = Some(login_form(&all_users.href));
    Ok(page)
}

/// The login form. Its action is the users list; submitting appends the
/// username to it.
fn login_form(action: &str) -> Form {
    Form {
        action: action.to_string(),
        method: Method::Get,
        fields: vec![FormField::input("userName", "Enter username")],
        submit_label: "Enter".to_string(),
        handler: SubmitHandler::FindUser,
    }
}
