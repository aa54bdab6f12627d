use crate::data::models::menu_item::MenuItem;
use crate::data::models::money::Money;
use crate::data::models::order::Order;
use crate::data::models::schema::*;
use diesel::prelude::*;

/// A line item; `price_at_time` is the menu price copied when the order was placed.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
#[diesel(primary_key(order_item_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(belongs_to(MenuItem, foreign_key = menu_item_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price_at_time: Money,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price_at_time: Money,
}

/// A line the ordering workflow accepted, before the order id exists.
#[derive(PartialEq, Debug, Clone)]
pub struct AcceptedLine {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price_at_time: Money,
}

impl AcceptedLine {
    pub fn line_total(&self) -> Money {
        self.price_at_time.times(self.quantity)
    }
}
