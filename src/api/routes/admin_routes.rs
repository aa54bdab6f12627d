use crate::api::controllers::admin_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post, put};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_controller::dashboard))
        .route("/admin/menu/add", post(admin_controller::add_menu_item))
        .route("/admin/menu/update/{id}", put(admin_controller::update_menu_item))
        .route("/admin/order/{id}/status", put(admin_controller::update_order_status))
}
