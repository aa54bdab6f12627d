use crate::data::database::Database;
use crate::data::models::menu_item::MenuItem;
use crate::data::models::money::Money;
use crate::data::models::order::{NewOrder, UpdateOrder};
use crate::data::models::order_item::AcceptedLine;
use crate::data::repos::implementors::catalog_repo::CatalogRepo;
use crate::data::repos::implementors::order_repo::{OrderRepo, OrderWithItems};
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::OrderServiceError;
use std::collections::HashMap;

/// Well-known order statuses. Admins may store any non-empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// One `(item id, quantity)` entry of a multi-item order, exactly as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestedLine<'a> {
    pub item_key: &'a str,
    pub quantity: Option<i64>,
}

pub struct OrderService {
    orders: OrderRepo,
    catalog: CatalogRepo,
}

impl OrderService {
    pub fn new(db: Database) -> Self {
        OrderService {
            orders: OrderRepo::new(db.clone()),
            catalog: CatalogRepo::new(db),
        }
    }

    /// Places an order from every usable line and drops the rest without
    /// comment. The order is created even when nothing is accepted.
    pub async fn place_multi_item_order(
        &self,
        account_id: i32,
        requested: &[RequestedLine<'_>],
    ) -> Result<i32, OrderServiceError> {
        let parsed: Vec<(i32, i32)> = requested
            .iter()
            .filter_map(|line| {
                let id = line.item_key.trim().parse::<i32>().ok()?;
                let quantity = positive_quantity(line.quantity).ok()?;
                Some((id, quantity))
            })
            .collect();

        let ids: Vec<i32> = parsed.iter().map(|(id, _)| *id).collect();
        let items: HashMap<i32, MenuItem> = self
            .catalog
            .get_by_ids(ids)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(|item| (item.menu_item_id, item))
            .collect();

        let accepted: Vec<AcceptedLine> = parsed
            .into_iter()
            .filter_map(|(id, quantity)| {
                let item = items.get(&id).filter(|item| item.available)?;
                Some(AcceptedLine {
                    menu_item_id: id,
                    quantity,
                    price_at_time: item.price.clone(),
                })
            })
            .collect();

        tracing::debug!(
            requested = requested.len(),
            accepted = accepted.len(),
            "Multi-item order lines resolved"
        );

        self.create_order(account_id, accepted).await
    }

    /// Places a one-line order, failing before any write if the line is unusable.
    pub async fn place_single_item_order(
        &self,
        account_id: i32,
        item_id: Option<i32>,
        quantity: Option<i64>,
    ) -> Result<i32, OrderServiceError> {
        let item_id = item_id.ok_or(OrderServiceError::MissingItemId)?;
        let quantity = positive_quantity(quantity.or(Some(1)))?;

        let item = self
            .catalog
            .get_by_id(item_id)
            .await
            .map_err(db_error)?
            .ok_or(OrderServiceError::ItemNotFound)?;

        if !item.available {
            tracing::warn!(menu_item_id = item_id, "Order for unavailable item rejected");
            return Err(OrderServiceError::ItemUnavailable);
        }

        let line = AcceptedLine {
            menu_item_id: item.menu_item_id,
            quantity,
            price_at_time: item.price,
        };

        self.create_order(account_id, vec![line]).await
    }

    /// Orders placed by the account, oldest first, with their lines.
    pub async fn list_orders(&self, account_id: i32) -> Result<Vec<OrderWithItems>, OrderServiceError> {
        let orders = self
            .orders
            .get_by_account_id(account_id)
            .await
            .map_err(db_error)?;

        self.orders.attach_items(orders).await.map_err(db_error)
    }

    pub async fn list_all_orders(&self) -> Result<Vec<OrderWithItems>, OrderServiceError> {
        let orders = self.orders.get_all().await.map_err(db_error)?;
        self.orders.attach_items(orders).await.map_err(db_error)
    }

    /// Overwrites the status; there is no transition table.
    pub async fn set_status(&self, order_id: i32, status: Option<&str>) -> Result<(), OrderServiceError> {
        let status = status
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(OrderServiceError::MissingStatus)?;

        let form = UpdateOrder {
            status: Some(status),
            updated_at: chrono::Utc::now().naive_utc(),
        };

        let rows = self.orders.update(order_id, form).await.map_err(db_error)?;
        if rows == 0 {
            return Err(OrderServiceError::OrderNotFound);
        }

        tracing::info!(order_id, status, "Order status updated");

        Ok(())
    }

    async fn create_order(
        &self,
        account_id: i32,
        lines: Vec<AcceptedLine>,
    ) -> Result<i32, OrderServiceError> {
        let total_amount: Money = lines.iter().map(AcceptedLine::line_total).sum();
        let now = chrono::Utc::now().naive_utc();
        let line_count = lines.len();

        let new_order = NewOrder {
            account_id,
            total_amount: total_amount.clone(),
            status: OrderStatus::Pending.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };

        let order_id = self
            .orders
            .create_with_items(new_order, lines)
            .await
            .map_err(db_error)?;

        tracing::info!(order_id, account_id, %total_amount, line_count, "Order placed");

        Ok(order_id)
    }
}

fn db_error(e: diesel::result::Error) -> OrderServiceError {
    tracing::error!("Order store error: {}", e);
    OrderServiceError::DatabaseError
}

fn positive_quantity(quantity: Option<i64>) -> Result<i32, OrderServiceError> {
    quantity
        .filter(|q| *q >= 1)
        .and_then(|q| i32::try_from(q).ok())
        .ok_or(OrderServiceError::InvalidQuantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities_must_be_positive_and_fit() {
        assert_eq!(positive_quantity(Some(3)), Ok(3));
        assert_eq!(positive_quantity(Some(0)), Err(OrderServiceError::InvalidQuantity));
        assert_eq!(positive_quantity(Some(-2)), Err(OrderServiceError::InvalidQuantity));
        assert_eq!(positive_quantity(None), Err(OrderServiceError::InvalidQuantity));
        assert_eq!(
            positive_quantity(Some(i64::from(i32::MAX) + 1)),
            Err(OrderServiceError::InvalidQuantity)
        );
    }
}
