use std::collections::HashMap;
use crate::data::database::Database;
use crate::data::models::menu_item::MenuItem;
use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_item::{AcceptedLine, NewOrderItem, OrderItem};
use crate::data::repos::implementors::last_insert_rowid;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

/// An order together with its line items and the menu items they reference.
pub type OrderWithItems = (Order, Vec<(OrderItem, MenuItem)>);

pub struct OrderRepo {
    db: Database,
}

impl OrderRepo {
    pub fn new(db: Database) -> Self {
        OrderRepo { db }
    }

    /// Retrieves all orders placed by an account, oldest first.
    pub async fn get_by_account_id(
        &self,
        account_id_query: i32,
    ) -> Result<Vec<Order>, result::Error> {
        use crate::data::models::schema::orders::dsl::{account_id, order_id, orders};

        let mut conn = self.db.get_connection().await?;

        orders
            .filter(account_id.eq(account_id_query))
            .order(order_id.asc())
            .select(Order::as_select())
            .load(&mut conn)
            .await
    }

    /// Writes the order row and all of its line items in one transaction and
    /// returns the new order id. Nothing is written if any insert fails.
    pub async fn create_with_items(
        &self,
        new_order: NewOrder,
        lines: Vec<AcceptedLine>,
    ) -> Result<i32, result::Error> {
        use crate::data::models::schema::order_items::dsl::order_items;
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = self.db.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(orders)
                    .values(&new_order)
                    .execute(connection)
                    .await?;

                let new_id = last_insert_rowid(connection).await?;

                for line in lines {
                    let new_item = NewOrderItem {
                        order_id: new_id,
                        menu_item_id: line.menu_item_id,
                        quantity: line.quantity,
                        price_at_time: line.price_at_time,
                    };

                    diesel::insert_into(order_items)
                        .values(&new_item)
                        .execute(connection)
                        .await?;
                }

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    /// Pairs each order with its line items, preserving the order of `orders_list`.
    pub async fn attach_items(
        &self,
        orders_list: Vec<Order>,
    ) -> Result<Vec<OrderWithItems>, result::Error> {
        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        use crate::data::models::schema::menu_items;
        use crate::data::models::schema::order_items::dsl::{order_id, order_item_id, order_items};

        let mut conn = self.db.get_connection().await?;

        let ids: Vec<i32> = orders_list.iter().map(|o| o.order_id).collect();

        let items_data: Vec<(OrderItem, MenuItem)> = order_items
            .inner_join(menu_items::table)
            .filter(order_id.eq_any(ids))
            .order(order_item_id.asc())
            .select((OrderItem::as_select(), MenuItem::as_select()))
            .load(&mut conn)
            .await?;

        let mut map: HashMap<i32, Vec<(OrderItem, MenuItem)>> = HashMap::new();

        for item in items_data {
            map.entry(item.0.order_id).or_default().push(item);
        }

        let result = orders_list
            .into_iter()
            .map(|o| {
                let items = map.remove(&o.order_id).unwrap_or_default();
                (o, items)
            })
            .collect();

        Ok(result)
    }
}

#[async_trait]
impl Repository for OrderRepo {
    type Id = i32;
    type Item = Order;
    type NewItem<'a> = NewOrder;
    type UpdateForm<'a> = UpdateOrder<'a>;

    async fn get_all(&self) -> Result<Vec<Self::Item>, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = self.db.get_connection().await?;

        orders
            .order(order_id.asc())
            .select(Order::as_select())
            .load(&mut conn)
            .await
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = self.db.get_connection().await?;

        orders
            .filter(order_id.eq(id))
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// Inserts a bare order with no line items.
    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        self.create_with_items(item, Vec::new()).await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<usize, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = self.db.get_connection().await?;

        diesel::update(orders.filter(order_id.eq(id)))
            .set(&item)
            .execute(&mut conn)
            .await
    }
}
