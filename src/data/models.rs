pub mod account;
pub mod menu_item;
pub mod money;
pub mod order;
pub mod order_item;
pub mod schema;
