//! A single collection and its recipes.

use crate::model::{RenderError, ResourceBody};
use crate::routes::Route;
use crate::view::{Page, Paragraph};

use super::rows::recipe_row;
use super::RenderContext;

const COLLECTIONS_BY: &str = "fpoint:collections-by";

pub fn render_collection(body: &ResourceBody, ctx: &RenderContext<'_>) -> Result<Page, RenderError> {
    let back = ctx.control_link(Route::Collection, body, COLLECTIONS_BY, "Back")?;
    let name = body.text("name")?;
    let rows = body
        .items()?
        .iter()
        .map(|item| recipe_row(item, ctx, Route::Collection))
        .collect::<Result<Vec<_>, _>>()?;

    let mut page = Page::blank(Route::Collection);
    page.navigation = Some(back);
    page.content_title = Some(name);
    // description may be null
    if let Some(description) = body.non_empty_text("description") {
        page.content_data
            .push(Paragraph::text(format!("Description: {description}")));
    }
    page.table_head = vec!["Recipe title".to_string(), "Actions".to_string()];
    if rows.is_empty() {
        page.content_data
            .push(Paragraph::text("This collection has no recipes yet, add one."));
    } else {
        page.content_data.push(Paragraph::text("Recipes:"));
    }
    page.table_rows = rows;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteTable;
    use serde_json::{json, Value};

    fn collection(description: Value, items: Value) -> ResourceBody {
        serde_json::from_value(json!({
            "name": "Soups",
            "description": description,
            "items": items,
            "@controls": {
                "self": {"href": "/api/users/alice/collections/Soups/"},
                "fpoint:collections-by": {"href": "/api/users/alice/collections/"}
            }
        }))
        .unwrap()
    }

    fn texts(page: &Page) -> Vec<&str> {
        page.content_data.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn test_null_description_is_omitted() {
        let routes = RouteTable::default();
        let ctx = RenderContext::new("/api/", &routes);

        let mut absent = collection(Value::Null, json!([]));
        absent.fields.remove("description");
        let bodies = [collection(Value::Null, json!([])), collection(json!(""), json!([])), absent];

        for body in bodies {
            let page = render_collection(&body, &ctx).unwrap();
            assert_eq!(texts(&page), vec!["This collection has no recipes yet, add one."]);
        }
    }

    #[test]
    fn test_collection_with_recipes() {
        let routes = RouteTable::default();
        let ctx = RenderContext::new("/api/", &routes);
        let body = collection(
            json!("Warm things"),
            json!([{"title": "Borscht", "@controls": {"self": {"href": "/api/users/alice/collections/Soups/1/"}}}]),
        );

        let page = render_collection(&body, &ctx).unwrap();

        assert_eq!(page.content_title.as_deref(), Some("Soups"));
        assert_eq!(texts(&page), vec!["Description: Warm things", "Recipes:"]);
        assert_eq!(page.table_head, vec!["Recipe title", "Actions"]);
        assert_eq!(page.table_rows[0].action.route, Route::Recipe);
        let back = page.navigation.unwrap();
        assert_eq!(back.route, Route::Collections);
        assert_eq!(back.href, "/api/users/alice/collections/");
        assert!(page.form.is_none());
    }
}
