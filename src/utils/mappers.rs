use crate::api::response::{MenuEntryResponse, MenuItemResponse, OrderLineResponse, OrderResponse};
use crate::data::models::menu_item::MenuItem;
use crate::data::models::money::Money;
use crate::data::models::order_item::OrderItem;
use crate::data::repos::implementors::order_repo::OrderWithItems;
use bigdecimal::BigDecimal;
use diesel::deserialize::FromSql;
use diesel::serialize::{IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::{Sqlite, SqliteValue};
use diesel::{deserialize, serialize};
use std::str::FromStr;

impl ToSql<Text, Sqlite> for Money {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.0.to_string());
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Sqlite> for Money {
    fn from_sql(bytes: SqliteValue<'_, '_, '_>) -> deserialize::Result<Self> {
        let text = <String as FromSql<Text, Sqlite>>::from_sql(bytes)?;
        Ok(Money::new(BigDecimal::from_str(text.trim())?))
    }
}

impl From<MenuItem> for MenuEntryResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.menu_item_id,
            name: item.name,
            price: item.price,
            description: item.description,
        }
    }
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.menu_item_id,
            name: item.name,
            price: item.price,
            category: item.category,
            description: item.description,
            available: item.available,
        }
    }
}

impl From<(OrderItem, MenuItem)> for OrderLineResponse {
    fn from((line, item): (OrderItem, MenuItem)) -> Self {
        Self {
            menu_item_id: line.menu_item_id,
            name: item.name,
            quantity: line.quantity,
            price_at_time: line.price_at_time,
        }
    }
}

impl From<OrderWithItems> for OrderResponse {
    fn from((order, items): OrderWithItems) -> Self {
        Self {
            order_id: order.order_id,
            account_id: order.account_id,
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            items: items.into_iter().map(OrderLineResponse::from).collect(),
        }
    }
}
