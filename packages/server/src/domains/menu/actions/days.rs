use tracing::info;

use crate::domains::menu::data::AvailableDays;
use crate::domains::menu::errors::MenuError;
use crate::kernel::ServerDeps;

/// Distinct days in the current artifact, ascending.
pub async fn list_available_days(deps: &ServerDeps) -> Result<AvailableDays, MenuError> {
    let book = deps.menu_store.load().await?;
    let days = book.days();
    info!(count = days.len(), "Listing available days");
    Ok(AvailableDays { days })
}
