use crate::api::controllers::menu_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu_controller::health))
        .route("/menu", get(menu_controller::get_menu))
}
