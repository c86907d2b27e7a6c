//! # Page Renderers
//!
//! One renderer per [`Route`]. A renderer reads a [`ResourceBody`] and writes
//! the page regions; it never performs I/O itself. When a page needs a second
//! resource (the collections page needs its author's name) the renderer
//! returns a [`FollowUp`] and the browser fetches it.
//!
//! Full-page renderers build a fresh [`Page`] and swap it in only once every
//! field and control they need has been found, so a malformed body leaves the
//! previous page on screen.

pub mod collection;
pub mod collections;
pub mod recipe;
pub mod rows;
pub mod start;
pub mod user;

use crate::model::{RenderError, ResourceBody};
use crate::routes::{Route, RouteTable};
use crate::view::{Link, Page};

/// What a renderer may look at besides the body.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Entry point of the API, target of "Back" on the create-user page.
    pub api_root: &'a str,
    pub routes: &'a RouteTable,
}

impl<'a> RenderContext<'a> {
    pub fn new(api_root: &'a str, routes: &'a RouteTable) -> Self {
        Self { api_root, routes }
    }

    /// Builds a link whose route comes from the route table.
    pub fn link(
        &self,
        from: Route,
        rel: &str,
        text: impl Into<String>,
        href: impl Into<String>,
    ) -> Result<Link, RenderError> {
        let route = self.routes.resolve(from, rel).ok_or_else(|| RenderError::NoRoute {
            from,
            rel: rel.to_string(),
        })?;
        Ok(Link::new(text, href, route))
    }

    /// Builds a link to the control `rel` of `body`.
    pub fn control_link(
        &self,
        from: Route,
        body: &ResourceBody,
        rel: &str,
        text: impl Into<String>,
    ) -> Result<Link, RenderError> {
        let href = body.control(rel)?.href.clone();
        self.link(from, rel, text, href)
    }
}

/// A second fetch a renderer asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub href: String,
    pub route: Route,
}

/// Draws `body` with the renderer identified by `route`.
pub fn render(
    route: Route,
    body: &ResourceBody,
    ctx: &RenderContext<'_>,
    page: &mut Page,
) -> Result<Vec<FollowUp>, RenderError> {
    let follow_ups = match route {
        Route::Start => {
            *page = start::render_start_page(body, ctx)?;
            Vec::new()
        }
        Route::CreateUser => {
            *page = user::render_create_user(body, ctx)?;
            Vec::new()
        }
        Route::User => {
            *page = user::render_user_page(body, ctx)?;
            Vec::new()
        }
        Route::Collections => {
            let (next, follow_ups) = collections::render_collections(body, ctx)?;
            *page = next;
            follow_ups
        }
        Route::Collection => {
            *page = collection::render_collection(body, ctx)?;
            Vec::new()
        }
        Route::Recipe => {
            *page = recipe::render_recipe(body, ctx)?;
            Vec::new()
        }
        Route::AuthorTitle => {
            collections::author_title(body, page)?;
            Vec::new()
        }
        Route::AppendCollectionRow => {
            rows::append_collection_row(body, ctx, page)?;
            Vec::new()
        }
    };
    Ok(follow_ups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_body_leaves_page_untouched() {
        let routes = RouteTable::default();
        let ctx = RenderContext::new("/api/", &routes);
        let mut page = Page::blank(Route::Start);
        page.content_title = Some("Welcome".into());
        let before = page.clone();

        let body: ResourceBody = serde_json::from_value(json!({"name": "Alice"})).unwrap();
        let err = render(Route::User, &body, &ctx, &mut page).unwrap_err();

        assert_eq!(err, RenderError::MissingField("userName".into()));
        assert_eq!(page, before);
    }

    #[test]
    fn test_missing_route_is_reported() {
        let routes = RouteTable::empty();
        let ctx = RenderContext::new("/api/", &routes);
        let err = ctx.link(Route::Recipe, "collection", "Back", "/x/").unwrap_err();
        assert_eq!(
            err,
            RenderError::NoRoute {
                from: Route::Recipe,
                rel: "collection".into()
            }
        );
    }
}
