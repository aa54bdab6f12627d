pub mod account_service;
pub mod catalog_service;
pub mod errors;
pub mod order_service;
pub mod seed_service;
