use crate::api::controllers::order_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/order", post(order_controller::place_order_lines))
        .route("/place_order", post(order_controller::place_single_order))
        .route("/my-orders", get(order_controller::my_orders))
}
