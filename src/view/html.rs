//! HTML view of a [`Page`], rendered with `maud` (which escapes all text).
//!
//! Region markup matches the recipe book's stylesheet selectors:
//! `div.notification`, `div.navigation`, `.contenttitle`, `.contentdata`,
//! `.resulttable thead/tbody`, `.contentbeforeform`, `div.form`.

use maud::{html, Markup, Render, DOCTYPE};

use crate::view::form::{FieldKind, Form};
use crate::view::page::{Link, Page};

impl Render for Link {
    fn render(&self) -> Markup {
        html! {
            a href=(self.href) data-route=(self.route.name()) { (self.text) }
        }
    }
}

impl Render for Form {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method.as_str()) {
                @for field in &self.fields {
                    label { (field.label) }
                    @match field.kind {
                        FieldKind::Input => {
                            input type="text" name=(field.name) value=(field.value) required[field.required];
                        }
                        FieldKind::TextArea { rows, cols } => {
                            textarea rows=(rows) cols=(cols) name=(field.name) required[field.required] { (field.value) }
                            br;
                        }
                    }
                }
                input type="submit" name="submit" class="submitbutton" value=(self.submit_label);
            }
        }
    }
}

impl Render for Page {
    fn render(&self) -> Markup {
        html! {
            div.notification {
                @if let Some(notification) = &self.notification {
                    p class=(notification.kind.class()) { (notification.text) }
                }
            }
            div.navigation {
                @if let Some(link) = &self.navigation { (link) }
            }
            div.contenttitle {
                @if let Some(title) = &self.content_title { h1 { (title) } }
            }
            div.contentdata {
                @for para in &self.content_data {
                    p {
                        (para.text)
                        @if let Some(link) = &para.link { (link) }
                    }
                }
            }
            table.resulttable {
                thead {
                    @if !self.table_head.is_empty() {
                        tr { @for head in &self.table_head { th { (head) } } }
                    }
                }
                tbody {
                    @for row in &self.table_rows {
                        tr { td { (row.label) } td { (row.action) } }
                    }
                }
            }
            div.contentbeforeform {
                @if let Some(text) = &self.content_before_form { p { (text) } }
            }
            div.form {
                @if let Some(form) = &self.form { (form) }
            }
        }
    }
}

impl Page {
    /// The page regions as an HTML fragment.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    /// A standalone document wrapping the regions.
    pub fn to_document(&self, title: &str) -> String {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (title) }
                }
                body { (self) }
            }
        }
        .into_string()
    }
}
