pub mod admin_routes;
pub mod auth_routes;
pub mod menu_routes;
pub mod order_routes;
