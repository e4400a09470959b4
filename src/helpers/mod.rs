//! Markup helpers
//!
//! Builders for the small HTML fragments the binder writes as inner
//! markup. Content values are always escaped; only the surrounding tags
//! are markup.

mod html;

pub use html::*;
