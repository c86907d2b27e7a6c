//! Table rows for list items, and the partial renderer that appends one.

use crate::model::{RenderError, ResourceBody};
use crate::routes::{Route, REL_SELF};
use crate::view::{Page, Paragraph, Row};

use super::collections::{collections_head, COLLECTIONS_INTRO};
use super::RenderContext;

/// `[name, "show"]`, the action leading to the collection itself.
pub fn collection_row(item: &ResourceBody, ctx: &RenderContext<'_>, from: Route) -> Result<Row, RenderError> {
    Ok(Row {
        label: item.text("name")?,
        action: ctx.control_link(from, item, REL_SELF, "show")?,
    })
}

/// `[title, "see details"]`, the action leading to the recipe.
pub fn recipe_row(item: &ResourceBody, ctx: &RenderContext<'_>, from: Route) -> Result<Row, RenderError> {
    Ok(Row {
        label: item.text("title")?,
        action: ctx.control_link(from, item, REL_SELF, "see details")?,
    })
}

/// Adds a freshly created collection to the visible table. Nothing else on
/// the page changes, except that an empty list gets its heading back.
pub fn append_collection_row(
    body: &ResourceBody,
    ctx: &RenderContext<'_>,
    page: &mut Page,
) -> Result<(), RenderError> {
    let row = collection_row(body, ctx, Route::AppendCollectionRow)?;
    if page.table_head.is_empty() {
        page.table_head = collections_head();
        page.content_data = vec![Paragraph::text(COLLECTIONS_INTRO)];
    }
    page.table_rows.push(row);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteTable;
    use crate::view::Link;
    use serde_json::json;

    #[test]
    fn test_rows_link_to_self() {
        let routes = RouteTable::default();
        let ctx = RenderContext::new("/api/", &routes);
        let recipe: ResourceBody = serde_json::from_value(json!({
            "title": "Borscht",
            "@controls": {"self": {"href": "/api/users/alice/collections/Soups/1/"}}
        }))
        .unwrap();

        let row = recipe_row(&recipe, &ctx, Route::Collection).unwrap();
        assert_eq!(row.label, "Borscht");
        assert_eq!(
            row.action,
            Link::new("see details", "/api/users/alice/collections/Soups/1/", Route::Recipe)
        );
    }

    #[test]
    fn test_append_keeps_existing_rows() {
        let routes = RouteTable::default();
        let ctx = RenderContext::new("/api/", &routes);
        let mut page = Page::blank(Route::Collections);
        page.content_title = Some("Alice".into());
        page.table_head = collections_head();
        page.table_rows.push(Row {
            label: "Soups".into(),
            action: Link::new("show", "/api/users/alice/collections/Soups/", Route::Collection),
        });
        let created: ResourceBody = serde_json::from_value(json!({
            "name": "Desserts",
            "@controls": {"self": {"href": "/api/users/alice/collections/Desserts/"}}
        }))
        .unwrap();

        append_collection_row(&created, &ctx, &mut page).unwrap();

        let labels: Vec<_> = page.table_rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Soups", "Desserts"]);
        assert_eq!(page.table_rows[1].action.route, Route::Collection);
        assert_eq!(page.content_title.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_append_to_empty_list_restores_heading() {
        let routes = RouteTable::default();
        let ctx = RenderContext::new("/api/", &routes);
        let mut page = Page::blank(Route::Collections);
        page.content_data.push(Paragraph::text("Looks like you haven't create any collection, create one below."));
        let created: ResourceBody = serde_json::from_value(json!({
            "name": "Soups",
            "@controls": {"self": {"href": "/api/users/alice/collections/Soups/"}}
        }))
        .unwrap();

        append_collection_row(&created, &ctx, &mut page).unwrap();

        assert_eq!(page.table_head, vec!["Collection Name", "Actions"]);
        assert_eq!(page.content_data, vec![Paragraph::text(COLLECTIONS_INTRO)]);
        assert_eq!(page.table_rows.len(), 1);
    }
}
