use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AccountServiceError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Please use a different username.")]
    DuplicateUsername,
    #[error("Please use a different email address.")]
    DuplicateEmail,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Password hashing failed")]
    HashingError,
    #[error("Database error")]
    DatabaseError,
}

#[derive(Error, Debug, PartialEq)]
pub enum CatalogServiceError {
    #[error("Menu item not found")]
    ItemNotFound,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Database error")]
    DatabaseError,
}

#[derive(Error, Debug, PartialEq)]
pub enum OrderServiceError {
    #[error("Order not found")]
    OrderNotFound,
    #[error("Item ID is required")]
    MissingItemId,
    #[error("Item not found")]
    ItemNotFound,
    #[error("Item not available")]
    ItemUnavailable,
    #[error("Quantity must be a positive integer")]
    InvalidQuantity,
    #[error("Status is required")]
    MissingStatus,
    #[error("Database error")]
    DatabaseError,
}

#[derive(Error, Debug, PartialEq)]
pub enum SeedError {
    #[error("Password hashing failed")]
    HashingError,
    #[error("Invalid sample price {0}")]
    InvalidPrice(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}
