use serde::{Deserialize, Serialize};

/// Body of `POST /analyze-menu`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyzeMenuInput {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub day: String,
    pub meal_time: String,
    #[serde(default)]
    pub max_calories: Option<u32>,
}

/// One recommended line from the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuItem {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuAnalysis {
    pub menu_items: Vec<MenuItem>,
    /// The model's reply, unmodified.
    pub recommendations: String,
    /// The requested day, echoed back.
    pub date: String,
    /// Sum of the `Calories: N` figures on the recommended lines.
    pub total_calories: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AvailableDays {
    pub days: Vec<String>,
}
