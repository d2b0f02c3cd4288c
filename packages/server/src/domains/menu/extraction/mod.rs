//! Weekly menu page → [`MenuEntry`](crate::domains::menu::models::MenuEntry) records.

mod document;
pub mod extractor;
pub mod fetch;
pub mod layout;

pub use extractor::{MenuEntries, MenuExtractor};
pub use fetch::MenuPageFetcher;
pub use layout::MenuLayout;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The page has no day container; nothing can be extracted from it.
    #[error("menu container `{0}` not found; page does not match the expected layout")]
    MissingContainer(String),

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}
