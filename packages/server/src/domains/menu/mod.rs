//! Dining-hall menu: page extraction, the CSV artifact, and LLM-backed filtering.

pub mod actions;
pub mod data;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod prompt;
pub mod store;

pub use errors::MenuError;
