//! Links core
//!
//! Data model and the mock shorten operation, independent of any UI.
//! Nothing here persists and no short URL ever resolves anywhere.

mod models;
mod shorten;

pub use models::{ClickRecord, ShortenedUrl, UrlEntry, DEFAULT_VALIDITY_MINUTES};
pub use shorten::{shorten_entries, shorten_entry};
