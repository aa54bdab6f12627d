use crate::api::errors::APIErrors;
use crate::api::response::MenuEntryResponse;
use crate::api::state::AppState;
use crate::services::catalog_service::CatalogService;
use axum::Json;
use axum::extract::State;
use std::collections::BTreeMap;

pub async fn health() -> &'static str {
    "Kiosk server is running!"
}

/// Available items grouped by category.
pub async fn get_menu(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<MenuEntryResponse>>>, APIErrors> {
    let menu = CatalogService::new(state.db).list_available().await?;

    let response = menu
        .into_iter()
        .map(|(category, items)| {
            let entries = items.into_iter().map(MenuEntryResponse::from).collect();
            (category, entries)
        })
        .collect();

    Ok(Json(response))
}
