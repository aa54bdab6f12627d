use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("Password hashing failed")]
    HashingError,
    #[error("Password verification failed")]
    VerificationError,
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Admin privileges required")]
    Forbidden,
    #[error("Token creation failed")]
    TokenCreationError,
    #[error("Invalid token credentials provided.")]
    InvalidToken,
    #[error("Database error")]
    DatabaseError,
}

impl From<diesel::result::Error> for AuthError {
    fn from(e: diesel::result::Error) -> Self {
        tracing::error!("Database error while authenticating: {}", e);
        AuthError::DatabaseError
    }
}
