use crate::data::models::money::Money;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

/// Body of every successful write: `{message}` for admin actions,
/// `{status, message, order_id}` for order placement.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub status: Option<String>,
    pub message: String,
    pub order_id: Option<i32>,
}

impl MessageResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            order_id: None,
        }
    }

    pub fn order_placed(order_id: i32) -> Self {
        Self {
            status: Some("success".to_string()),
            message: "Order placed successfully!".to_string(),
            order_id: Some(order_id),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Menu entry as shown to customers, grouped under its category.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MenuEntryResponse {
    pub id: i32,
    pub name: String,
    pub price: Money,
    pub description: String,
}

/// Full menu item as shown on the admin dashboard.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MenuItemResponse {
    pub id: i32,
    pub name: String,
    pub price: Money,
    pub category: String,
    pub description: String,
    pub available: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderLineResponse {
    pub menu_item_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price_at_time: Money,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderResponse {
    pub order_id: i32,
    pub account_id: i32,
    pub total_amount: Money,
    pub status: String,
    pub created_at: String,
    pub items: Vec<OrderLineResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DashboardResponse {
    pub orders: Vec<OrderResponse>,
    pub menu_items: Vec<MenuItemResponse>,
}
