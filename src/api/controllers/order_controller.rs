use crate::api::errors::APIErrors;
use crate::api::extractors::CurrentAccount;
use crate::api::request::{OrderLinesRequest, PlaceOrderRequest};
use crate::api::response::{MessageResponse, OrderResponse};
use crate::api::state::AppState;
use crate::services::order_service::{OrderService, RequestedLine};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

/// `POST /order`: unusable lines are dropped, the rest become one order.
pub async fn place_order_lines(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    payload: Result<Json<OrderLinesRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, APIErrors> {
    let Json(body) = payload?;

    let requested: Vec<RequestedLine> = body
        .lines
        .iter()
        .map(|(key, line)| RequestedLine {
            item_key: key,
            quantity: line.quantity,
        })
        .collect();

    let order_id = OrderService::new(state.db)
        .place_multi_item_order(account.account_id, &requested)
        .await?;

    Ok(Json(MessageResponse::order_placed(order_id)))
}

/// `POST /place_order`: one item, rejected outright if it cannot be ordered.
pub async fn place_single_order(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, APIErrors> {
    let Json(body) = payload?;

    let order_id = OrderService::new(state.db)
        .place_single_item_order(account.account_id, body.item_id, body.quantity)
        .await?;

    Ok(Json(MessageResponse::order_placed(order_id)))
}

pub async fn my_orders(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
) -> Result<Json<Vec<OrderResponse>>, APIErrors> {
    let orders = OrderService::new(state.db)
        .list_orders(account.account_id)
        .await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
