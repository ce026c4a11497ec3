//! Data models for textmark.

mod category;
mod highlight;

pub use category::{Category, CategoryRegistry, RegistryError, default_categories};
pub use highlight::{Highlight, HighlightId};

pub(crate) use highlight::now_millis;
