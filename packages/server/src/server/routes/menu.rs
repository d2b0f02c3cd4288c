use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};

use crate::domains::menu::actions;
use crate::domains::menu::data::{AnalyzeMenuInput, AvailableDays, MenuAnalysis};
use crate::server::app::AxumAppState;
use crate::server::error::Result;

/// `GET /available-days`
pub async fn available_days_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<AvailableDays>> {
    let days = actions::list_available_days(&state.server_deps).await?;
    Ok(Json(days))
}

/// `POST /analyze-menu`
pub async fn analyze_menu_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<AnalyzeMenuInput>, JsonRejection>,
) -> Result<Json<MenuAnalysis>> {
    let Json(input) = payload?;
    let analysis = actions::analyze_menu(input, &state.server_deps).await?;
    Ok(Json(analysis))
}
