//! Recipe page with its edit form.

use crate::model::{RenderError, ResourceBody};
use crate::routes::Route;
use crate::view::{render_form, Page, Paragraph, SubmitHandler};

use super::RenderContext;

const COLLECTION: &str = "collection";
const EDIT: &str = "edit";

/// Long text fields, shown as text areas.
const TEXT_AREAS: [&str; 2] = ["description", "ingredients"];
const TEXT_AREA_ROWS: u16 = 5;
const TEXT_AREA_COLS: u16 = 60;

const PREFILLED: [&str; 6] = ["title", "description", "ingredients", "rating", "ethnicity", "category"];

pub fn render_recipe(body: &ResourceBody, ctx: &RenderContext<'_>) -> Result<Page, RenderError> {
    let back = ctx.control_link(Route::Recipe, body, COLLECTION, "Back")?;
    let title = body.text("title")?;
    let mut form = render_form(body.control(EDIT)?, SubmitHandler::Recipe)?;
    for name in TEXT_AREAS {
        form.use_textarea(name, TEXT_AREA_ROWS, TEXT_AREA_COLS);
    }
    for name in PREFILLED {
        form.set_value(name, body.optional_text(name).unwrap_or_default());
    }

    let mut page = Page::blank(Route::Recipe);
    page.navigation = Some(back);
    page.content_title = Some(title);
    page.content_data.push(Paragraph::text(format!(
        "Description: {}",
        body.optional_text("description").unwrap_or_default()
    )));
    page.form = Some(form);
    Ok(page)
}
