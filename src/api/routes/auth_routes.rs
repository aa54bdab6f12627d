use crate::api::controllers::auth_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth_controller::register))
        .route(
            "/login",
            get(auth_controller::login_page).post(auth_controller::login),
        )
        .route("/logout", get(auth_controller::logout))
}
