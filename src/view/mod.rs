//! The page model and its HTML view.
//!
//! [`Page`] is the in-memory "current resource" the renderers write to. It can be
//! asserted on directly; [`Page::to_html`] is only needed to show it.

pub mod form;
pub mod html;
pub mod page;

pub use form::*;
pub use page::*;
