//! The page model: one field per fixed region of the recipe book page.

use crate::routes::Route;
use crate::view::form::Form;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Message,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Error => "error",
            NotificationKind::Message => "msg",
        }
    }
}

/// Content of `div.notification`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

/// An anchor whose "click" fetches `href` and draws it with `route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
    pub route: Route,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>, route: Route) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            route,
        }
    }
}

/// A `<p>` in `.contentdata`, optionally ending in a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub link: Option<Link>,
}

impl Paragraph {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn with_link(text: impl Into<String>, link: Link) -> Self {
        Self {
            text: text.into(),
            link: Some(link),
        }
    }
}

/// A row of `.resulttable tbody`: a label cell and an action cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub action: Link,
}

/// Everything currently on screen.
///
/// A full-page renderer replaces the whole value; partial renderers and
/// post-processors patch single regions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// Route of the last full-page render, `None` before the first one.
    pub route: Option<Route>,
    pub notification: Option<Notification>,
    pub navigation: Option<Link>,
    pub content_title: Option<String>,
    pub content_data: Vec<Paragraph>,
    pub table_head: Vec<String>,
    pub table_rows: Vec<Row>,
    pub content_before_form: Option<String>,
    pub form: Option<Form>,
}

impl Page {
    /// An empty page for `route`, the starting point of every full render.
    pub fn blank(route: Route) -> Self {
        Self {
            route: Some(route),
            ..Self::default()
        }
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.notification = Some(Notification {
            kind: NotificationKind::Error,
            text: text.into(),
        });
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.notification = Some(Notification {
            kind: NotificationKind::Message,
            text: text.into(),
        });
    }

    pub fn notification_text(&self) -> Option<&str> {
        self.notification.as_ref().map(|n| n.text.as_str())
    }

    /// All followable links in document order.
    pub fn links(&self) -> Vec<&Link> {
        self.navigation
            .iter()
            .chain(self.content_data.iter().filter_map(|p| p.link.as_ref()))
            .chain(self.table_rows.iter().map(|r| &r.action))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_listed_in_document_order() {
        let mut page = Page::blank(Route::Collections);
        page.navigation = Some(Link::new("Back", "/api/users/alice/", Route::User));
        page.content_data.push(Paragraph::text("Below is your collections:"));
        page.table_rows.push(Row {
            label: "Soups".into(),
            action: Link::new("show", "/api/users/alice/collections/Soups/", Route::Collection),
        });

        let texts: Vec<_> = page.links().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Back", "show"]);
    }

    #[test]
    fn test_notifications_replace_each_other() {
        let mut page = Page::default();
        page.show_error("User not found");
        page.show_message("Successful");
        let notification = page.notification.unwrap();
        assert_eq!(notification.kind, NotificationKind::Message);
        assert_eq!(notification.text, "Successful");
    }
}
