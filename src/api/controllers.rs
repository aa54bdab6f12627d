pub mod admin_controller;
pub mod auth_controller;
pub mod menu_controller;
pub mod order_controller;
