use crate::api::response::ErrorResponse;
use crate::security::errors::AuthError;
use crate::services::errors::{AccountServiceError, CatalogServiceError, OrderServiceError};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Where browsers without a session are sent.
pub const LOGIN_PATH: &str = "/login";

#[derive(Error, Debug, PartialEq)]
pub enum APIErrors {
    #[error("{0}")]
    BadRequest(String),
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Admin privileges required")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        let status = match &self {
            APIErrors::BadRequest(_) => StatusCode::BAD_REQUEST,
            APIErrors::Unauthenticated => {
                return (StatusCode::FOUND, [(header::LOCATION, LOGIN_PATH)]).into_response();
            }
            APIErrors::InvalidCredentials => StatusCode::UNAUTHORIZED,
            APIErrors::Forbidden => StatusCode::FORBIDDEN,
            APIErrors::NotFound(_) => StatusCode::NOT_FOUND,
            APIErrors::Conflict(_) => StatusCode::CONFLICT,
            APIErrors::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<AccountServiceError> for APIErrors {
    fn from(e: AccountServiceError) -> Self {
        match e {
            AccountServiceError::InvalidCredentials => APIErrors::InvalidCredentials,
            AccountServiceError::DuplicateUsername | AccountServiceError::DuplicateEmail => {
                APIErrors::Conflict(e.to_string())
            }
            AccountServiceError::InvalidInput(msg) => APIErrors::BadRequest(msg),
            AccountServiceError::HashingError | AccountServiceError::DatabaseError => {
                APIErrors::Internal
            }
        }
    }
}

impl From<CatalogServiceError> for APIErrors {
    fn from(e: CatalogServiceError) -> Self {
        match e {
            CatalogServiceError::ItemNotFound => APIErrors::NotFound(e.to_string()),
            CatalogServiceError::InvalidInput(msg) => APIErrors::BadRequest(msg),
            CatalogServiceError::DatabaseError => APIErrors::Internal,
        }
    }
}

impl From<OrderServiceError> for APIErrors {
    fn from(e: OrderServiceError) -> Self {
        match e {
            OrderServiceError::OrderNotFound | OrderServiceError::ItemNotFound => {
                APIErrors::NotFound(e.to_string())
            }
            OrderServiceError::MissingItemId
            | OrderServiceError::ItemUnavailable
            | OrderServiceError::InvalidQuantity
            | OrderServiceError::MissingStatus => APIErrors::BadRequest(e.to_string()),
            OrderServiceError::DatabaseError => APIErrors::Internal,
        }
    }
}

impl From<AuthError> for APIErrors {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthenticated | AuthError::InvalidToken => APIErrors::Unauthenticated,
            AuthError::Forbidden => APIErrors::Forbidden,
            AuthError::VerificationError => APIErrors::InvalidCredentials,
            AuthError::HashingError | AuthError::TokenCreationError | AuthError::DatabaseError => {
                APIErrors::Internal
            }
        }
    }
}

impl From<JsonRejection> for APIErrors {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        APIErrors::BadRequest("Invalid request body".to_string())
    }
}
