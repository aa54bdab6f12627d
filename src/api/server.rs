use crate::api::config::Config;
use crate::api::routes::{admin_routes, auth_routes, menu_routes, order_routes};
use crate::api::state::AppState;
use crate::data::database::Database;
use axum::Router;
use std::io;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// The full kiosk API over the given state.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(menu_routes::routes())
        .merge(auth_routes::routes())
        .merge(order_routes::routes())
        .merge(admin_routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Binds the configured address and serves until the process is stopped.
pub async fn start(config: Config, db: Database) -> io::Result<()> {
    let bind_address = config.bind_address;
    let router = build_router(AppState::new(db, &config));

    let listener = TcpListener::bind(bind_address).await?;

    tracing::info!("Server running on http://{}", bind_address);

    axum::serve(listener, router).await
}
