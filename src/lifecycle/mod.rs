//! Startup, configuration and shutdown.

pub mod config;
pub mod recipe_book;
pub mod tracing;

pub use config::*;
pub use recipe_book::*;
pub use self::tracing::setup_tracing;
