//! A user's collections list, titled with the author's name.

use crate::model::{RenderError, ResourceBody};
use crate::routes::Route;
use crate::view::{render_form, Page, Paragraph, SubmitHandler};

use super::rows::collection_row;
use super::{FollowUp, RenderContext};

const AUTHOR: &str = "author";
const ADD_COLLECTION: &str = "fpoint:add-collection";

pub(crate) const COLLECTIONS_INTRO: &str = "Below is your collections:";
const NO_COLLECTIONS: &str = "Looks like you haven't create any collection, create one below.";

pub(crate) fn collections_head() -> Vec<String> {
    vec!["Collection Name".to_string(), "Actions".to_string()]
}

/// Renders the list and asks for the author resource, whose name becomes the
/// page title once it arrives.
pub fn render_collections(
    body: &ResourceBody,
    ctx: &RenderContext<'_>,
) -> Result<(Page, Vec<FollowUp>), RenderError> {
    let back = ctx.control_link(Route::Collections, body, AUTHOR, "Back")?;
    let form = render_form(body.control(ADD_COLLECTION)?, SubmitHandler::Collection)?;
    let rows = body
        .items()?
        .iter()
        .map(|item| collection_row(item, ctx, Route::Collections))
        .collect::<Result<Vec<_>, _>>()?;

    let mut page = Page::blank(Route::Collections);
    let author = FollowUp {
        href: back.href.clone(),
        route: Route::AuthorTitle,
    };
    page.navigation = Some(back);
    if rows.is_empty() {
        page.content_data.push(Paragraph::text(NO_COLLECTIONS));
    } else {
        page.content_data.push(Paragraph::text(COLLECTIONS_INTRO));
        page.table_head = collections_head();
    }
    page.table_rows = rows;
    page.content_before_form = Some("Create a new collection".to_string());
    page.form = Some(form);
    Ok((page, vec![author]))
}

/// Sets the page title to the author's name.
pub fn author_title(body: &ResourceBody, page: &mut Page) -> Result<(), RenderError> {
    page.content_title = Some(body.text("name")?);
    Ok(())
}
