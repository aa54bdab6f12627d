#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use bigdecimal::BigDecimal;
use http_body_util::BodyExt;
use kiosk_server_lib::api::config::{Config, DEFAULT_ADMIN_PASSWORD};
use kiosk_server_lib::api::server::build_router;
use kiosk_server_lib::api::state::AppState;
use kiosk_server_lib::data::database::Database;
use kiosk_server_lib::data::models::account::{Account, NewAccount};
use kiosk_server_lib::data::models::menu_item::NewMenuItem;
use kiosk_server_lib::data::models::money::Money;
use kiosk_server_lib::data::repos::implementors::account_repo::AccountRepo;
use kiosk_server_lib::data::repos::implementors::catalog_repo::CatalogRepo;
use kiosk_server_lib::data::repos::traits::repository::Repository;
use kiosk_server_lib::security::auth::PasswordService;
use serde_json::Value;
use std::str::FromStr;
use tower::ServiceExt;

pub const PASSWORD: &str = "password123";

pub fn money(value: &str) -> Money {
    Money::new(BigDecimal::from_str(value).expect("valid decimal"))
}

pub fn test_config() -> Config {
    Config {
        database_url: ":memory:".to_string(),
        bind_address: "127.0.0.1:0".parse().expect("valid address"),
        jwt_secret: "test-secret".to_string(),
        jwt_expiration_minutes: 5,
        admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        seed_menu: false,
        db_max_connections: 1,
    }
}

pub async fn test_db() -> Database {
    Database::in_memory()
        .await
        .expect("Failed to create in-memory database")
}

pub async fn test_state() -> AppState {
    AppState::new(test_db().await, &test_config())
}

pub async fn create_account(db: &Database, username: &str, is_admin: bool) -> Account {
    let hashed = PasswordService::new()
        .hash_password(PASSWORD)
        .await
        .expect("Hashing failed");
    let email = format!("{username}@example.com");

    let repo = AccountRepo::new(db.clone());
    let id = repo
        .add(NewAccount {
            username,
            email: &email,
            password_hash: &hashed,
            is_admin,
        })
        .await
        .expect("Failed to add account");

    repo.get_by_id(id)
        .await
        .expect("Failed to get account")
        .expect("Account not found")
}

pub async fn add_item(db: &Database, name: &str, price: &str, category: &str, available: bool) -> i32 {
    CatalogRepo::new(db.clone())
        .add(NewMenuItem {
            name,
            price: money(price),
            category,
            description: "",
            available,
        })
        .await
        .expect("Failed to add menu item")
}

pub fn token_for(state: &AppState, account: &Account) -> String {
    state
        .jwt
        .generate_token(account.account_id)
        .expect("Failed to create token")
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("Failed to build request")
}

pub async fn call(state: &AppState, request: Request<Body>) -> Response {
    build_router(state.clone())
        .oneshot(request)
        .await
        .expect("Router failed")
}

/// Sends the request and parses the body as JSON (`Value::Null` when empty).
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = call(state, request).await;
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, body)
}
