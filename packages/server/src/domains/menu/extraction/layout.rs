//! Page structure the extractor expects.
//!
//! The defaults describe the dining-hall page: a `div#tabs` container with
//! one `div#tabNcontent` block per day, recipes as `li.trigger` items whose
//! name spans sit next to a `collapsible-heading-status` badge.

use scraper::Selector;

use super::ExtractionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    /// CSS selector for the single container holding every day block.
    pub container: String,
    /// CSS selector (relative to the container) for one day block.
    pub day_block: String,
    /// Class marking a recipe trigger `li`.
    pub trigger_class: String,
    /// Class on the status badge span that must never be read as a name.
    pub status_class: String,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            container: "div#tabs".to_string(),
            day_block: r#"div[id^="tab"][id$="content"]"#.to_string(),
            trigger_class: "trigger".to_string(),
            status_class: "collapsible-heading-status".to_string(),
        }
    }
}

/// Selectors compiled once per extractor.
#[derive(Debug)]
pub(crate) struct CompiledLayout {
    pub container: Selector,
    pub container_source: String,
    pub day_block: Selector,
    pub h3: Selector,
    pub h4: Selector,
    pub h6: Selector,
    pub trigger_class: String,
    pub status_class: String,
}

impl CompiledLayout {
    pub fn compile(layout: &MenuLayout) -> Result<Self, ExtractionError> {
        Ok(Self {
            container: parse_selector(&layout.container)?,
            container_source: layout.container.clone(),
            day_block: parse_selector(&layout.day_block)?,
            h3: parse_selector("h3")?,
            h4: parse_selector("h4")?,
            h6: parse_selector("h6")?,
            trigger_class: layout.trigger_class.clone(),
            status_class: layout.status_class.clone(),
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
