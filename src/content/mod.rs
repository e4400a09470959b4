//! Content module - the content document and where it is loaded from

mod document;
pub mod loader;

pub use document::*;
pub use loader::{ContentSource, LoadError};
