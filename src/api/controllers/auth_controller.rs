use crate::api::errors::{APIErrors, LOGIN_PATH};
use crate::api::request::{LoginRequest, RegisterRequest};
use crate::api::response::{LoginResponse, MessageResponse};
use crate::api::state::AppState;
use crate::security::session::{cleared_session_cookie, session_cookie};
use crate::services::account_service::{AccountService, Registration};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;

/// Where logging out lands.
const AFTER_LOGOUT: &str = "/menu";

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, APIErrors> {
    let Json(form) = payload?;
    let service = AccountService::new(state.db);

    service
        .register(Registration {
            username: &form.username,
            email: &form.email,
            password: &form.password,
            password_confirmation: form.password2.as_deref(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::message(
            "Congratulations, you are now a registered user!",
        )),
    ))
}

/// Returns the token in the body and also sets it as the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, APIErrors> {
    let Json(credentials) = payload?;
    let service = AccountService::new(state.db.clone());

    let account = service
        .authenticate(&credentials.username, &credentials.password)
        .await?;

    let token = state.jwt.generate_token(account.account_id)?;

    tracing::info!(account_id = account.account_id, "Login successful");

    Ok((
        jar.add(session_cookie(token.clone())),
        Json(LoginResponse {
            token,
            message: "Login successful".to_string(),
        }),
    ))
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        jar.add(cleared_session_cookie()),
        [(header::LOCATION, AFTER_LOGOUT)],
    )
}

/// Login is JSON-only; a GET here just names the endpoint to post to.
pub async fn login_page() -> impl IntoResponse {
    Json(MessageResponse::message(format!(
        "POST credentials to {LOGIN_PATH} to sign in"
    )))
}
