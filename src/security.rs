pub mod auth;
pub mod errors;
pub mod guard;
pub mod jwt;
pub mod session;
