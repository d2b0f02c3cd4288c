use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::MealPeriod;

/// Attribute label → value for one recipe (e.g. "Calories" → "250").
pub type RecipeAttributes = IndexMap<String, String>;

/// Recipe name → attributes, in page order.
pub type RecipeMap = IndexMap<String, RecipeAttributes>;

/// The recipes served for one (day, meal period) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Day label exactly as the page heading shows it. Never parsed as a date.
    pub day: String,
    pub meal_period: MealPeriod,
    pub recipes: RecipeMap,
}

impl MenuEntry {
    pub fn new(day: impl Into<String>, meal_period: MealPeriod, recipes: RecipeMap) -> Self {
        Self {
            day: day.into(),
            meal_period,
            recipes,
        }
    }
}
