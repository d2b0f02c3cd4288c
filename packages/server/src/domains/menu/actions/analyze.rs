use tracing::{error, info, warn};

use crate::domains::menu::data::{AnalyzeMenuInput, MenuAnalysis};
use crate::domains::menu::errors::MenuError;
use crate::domains::menu::models::MealPeriod;
use crate::domains::menu::prompt::{build_analysis_prompt, parse_menu_items, total_calories};
use crate::kernel::ServerDeps;

/// Ask the model which recipes of one (day, meal) satisfy the restrictions.
///
/// The model is only called once the pair is known to exist.
pub async fn analyze_menu(
    input: AnalyzeMenuInput,
    deps: &ServerDeps,
) -> Result<MenuAnalysis, MenuError> {
    info!(
        day = %input.day,
        meal_time = %input.meal_time,
        restrictions = ?input.dietary_restrictions,
        max_calories = ?input.max_calories,
        "Analyzing menu"
    );

    let book = deps.menu_store.load().await?;

    let recipes = MealPeriod::parse_label(&input.meal_time)
        .and_then(|period| book.recipes(&input.day, period))
        .ok_or_else(|| {
            warn!(
                day = %input.day,
                meal_time = %input.meal_time,
                served = ?book.meal_periods(&input.day),
                "No menu entry for requested meal"
            );
            MenuError::not_found(&input.day, &input.meal_time)
        })?;

    let prompt = build_analysis_prompt(recipes, &input.dietary_restrictions, input.max_calories);

    let reply = deps.ai.complete(&prompt).await.map_err(|e| {
        error!(error = %e, "Language model call failed");
        MenuError::Collaborator(e)
    })?;

    if reply.trim().is_empty() {
        error!("Language model returned an empty reply");
        return Err(MenuError::EmptyResponse);
    }
    info!(reply = %reply, "Language model reply");

    let menu_items = parse_menu_items(&reply);
    let total_calories = total_calories(&menu_items);

    Ok(MenuAnalysis {
        menu_items,
        recommendations: reply,
        date: input.day,
        total_calories,
    })
}
