use crate::data::models::money::Money;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Confirmation field; checked against `password` when present.
    pub password2: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub price: Money,
    pub category: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpdateOrderStatusRequest {
    pub status: Option<String>,
}

/// Body of `POST /place_order`.
#[derive(Deserialize, Debug, Clone)]
pub struct PlaceOrderRequest {
    #[serde(alias = "itemId")]
    pub item_id: Option<i32>,
    pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LineQuantity {
    pub quantity: Option<i64>,
}

/// Body of `POST /order`: `{"<menu item id>": {"quantity": n}, ...}`.
///
/// Entries keep the order they had in the request body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderLinesRequest {
    pub lines: Vec<(String, LineQuantity)>,
}

impl<'de> Deserialize<'de> for OrderLinesRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinesVisitor;

        impl<'de> Visitor<'de> for LinesVisitor {
            type Value = OrderLinesRequest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of menu item id to {\"quantity\": n}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut lines = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, LineQuantity>()? {
                    lines.push((key, value));
                }
                Ok(OrderLinesRequest { lines })
            }
        }

        deserializer.deserialize_map(LinesVisitor)
    }
}
