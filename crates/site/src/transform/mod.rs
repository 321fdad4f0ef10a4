//! Post-processing of raw HTML fragments.

/// Link treatment for `<a>` tags written as raw HTML.
pub mod raw_links;

pub use raw_links::rewrite_links;
