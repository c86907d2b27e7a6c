//! # Routing
//!
//! Links in a rendered page do not carry code. They carry a [`Route`], the
//! identifier of the renderer that should draw the resource behind the link.
//! Which route a link gets is decided by the [`RouteTable`], a plain lookup from
//! (page being rendered, relation name) to route. Tests can inspect or replace
//! the table without driving any page events.

use std::collections::HashMap;
use std::fmt::{self, Display};

/// Relation used for the row links of a list (`item["@controls"]["self"]`).
pub const REL_SELF: &str = "self";

/// Pseudo relation for the link back to the API entry point, which no body
/// carries as a control.
pub const REL_START: &str = "start";

/// Identifier of a renderer.
///
/// Full-page routes redraw every region. Partial routes patch one region of the
/// page that is already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Start,
    CreateUser,
    User,
    Collections,
    Collection,
    Recipe,
    /// Fills the title of the collections page from the author's resource.
    AuthorTitle,
    /// Appends one collection row to the visible table.
    AppendCollectionRow,
}

impl Route {
    pub fn is_full_page(&self) -> bool {
        !matches!(self, Route::AuthorTitle | Route::AppendCollectionRow)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Start => "start",
            Route::CreateUser => "create-user",
            Route::User => "user",
            Route::Collections => "collections",
            Route::Collection => "collection",
            Route::Recipe => "recipe",
            Route::AuthorTitle => "author-title",
            Route::AppendCollectionRow => "append-collection-row",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps `(page, relation)` to the route a link should trigger.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<(Route, String), Route>,
}

impl RouteTable {
    /// A table with no entries. Every lookup fails.
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers (or replaces) a route.
    pub fn insert(&mut self, from: Route, rel: impl Into<String>, to: Route) -> &mut Self {
        self.routes.insert((from, rel.into()), to);
        self
    }

    pub fn resolve(&self, from: Route, rel: &str) -> Option<Route> {
        self.routes.get(&(from, rel.to_string())).copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    /// The navigation graph of the recipe book.
    fn default() -> Self {
        let mut table = Self::empty();
        table
            .insert(Route::Start, "fpoint:all-users", Route::CreateUser)
            .insert(Route::CreateUser, REL_START, Route::Start)
            .insert(Route::User, "fpoint:collections-by", Route::Collections)
            .insert(Route::Collections, "author", Route::User)
            .insert(Route::Collections, REL_SELF, Route::Collection)
            .insert(Route::AppendCollectionRow, REL_SELF, Route::Collection)
            .insert(Route::Collection, "fpoint:collections-by", Route::Collections)
            .insert(Route::Collection, REL_SELF, Route::Recipe)
            .insert(Route::Recipe, "collection", Route::Collection);
        table
    }
}
