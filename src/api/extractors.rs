use crate::api::errors::APIErrors;
use crate::api::state::AppState;
use crate::data::models::account::Account;
use crate::security::guard::require_admin;
use crate::security::session::token_from_parts;
use crate::services::account_service::AccountService;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// The account behind the request's session token.
///
/// Rejects with a redirect to the login page when the token is missing,
/// invalid, expired, or names an account that no longer exists.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts).await.ok_or_else(|| {
            tracing::debug!("Request without session token");
            APIErrors::Unauthenticated
        })?;

        let claims = state.jwt.decode_token(&token).map_err(|e| {
            tracing::warn!("Token decoding error: {:?}", e);
            APIErrors::Unauthenticated
        })?;

        match AccountService::new(state.db.clone()).get_account(claims.sub).await? {
            Some(account) => Ok(CurrentAccount(account)),
            None => {
                tracing::warn!(account_id = claims.sub, "Token for unknown account");
                Err(APIErrors::Unauthenticated)
            }
        }
    }
}

/// A [`CurrentAccount`] that also holds the admin flag; non-admins get 403.
#[derive(Debug, Clone)]
pub struct AdminAccount(pub Account);

impl FromRequestParts<AppState> for AdminAccount {
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentAccount(account) = CurrentAccount::from_request_parts(parts, state).await?;
        require_admin(&account)?;
        Ok(AdminAccount(account))
    }
}
