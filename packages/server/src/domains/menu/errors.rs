use thiserror::Error;

use super::store::StoreError;

/// Failures surfaced by the menu query actions.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The CSV artifact is missing, unreadable or malformed.
    #[error("Error reading menu CSV: {0}")]
    DataAccess(#[from] StoreError),

    /// No recipes recorded for the requested pair.
    #[error("No menu data found for {day} {meal_time}")]
    NotFound { day: String, meal_time: String },

    /// The text-generation call failed.
    #[error("Menu analysis failed: {0:#}")]
    Collaborator(anyhow::Error),

    #[error("No response from the language model")]
    EmptyResponse,
}

impl MenuError {
    pub fn not_found(day: impl Into<String>, meal_time: impl Into<String>) -> Self {
        Self::NotFound {
            day: day.into(),
            meal_time: meal_time.into(),
        }
    }
}
