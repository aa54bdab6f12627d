use crate::api::errors::APIErrors;
use crate::api::extractors::AdminAccount;
use crate::api::request::{CreateMenuItemRequest, UpdateMenuItemRequest, UpdateOrderStatusRequest};
use crate::api::response::{DashboardResponse, MenuItemResponse, MessageResponse, OrderResponse};
use crate::api::state::AppState;
use crate::services::catalog_service::{CatalogService, MenuItemChanges};
use crate::services::order_service::OrderService;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

pub async fn dashboard(
    State(state): State<AppState>,
    AdminAccount(_admin): AdminAccount,
) -> Result<Json<DashboardResponse>, APIErrors> {
    let orders = OrderService::new(state.db.clone()).list_all_orders().await?;
    let menu_items = CatalogService::new(state.db).list_all().await?;

    Ok(Json(DashboardResponse {
        orders: orders.into_iter().map(OrderResponse::from).collect(),
        menu_items: menu_items.into_iter().map(MenuItemResponse::from).collect(),
    }))
}

pub async fn add_menu_item(
    State(state): State<AppState>,
    AdminAccount(admin): AdminAccount,
    payload: Result<Json<CreateMenuItemRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, APIErrors> {
    let Json(item) = payload?;

    CatalogService::new(state.db)
        .create(
            &item.name,
            &item.price,
            &item.category,
            item.description.as_deref(),
        )
        .await?;

    tracing::debug!(admin = admin.account_id, "Menu item added");

    Ok(Json(MessageResponse::message("Menu item added successfully!")))
}

pub async fn update_menu_item(
    State(state): State<AppState>,
    AdminAccount(_admin): AdminAccount,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateMenuItemRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, APIErrors> {
    let Json(changes) = payload?;

    CatalogService::new(state.db)
        .update(
            id,
            MenuItemChanges {
                name: changes.name.as_deref(),
                price: changes.price.as_ref(),
                category: changes.category.as_deref(),
                description: changes.description.as_deref(),
                available: changes.available,
            },
        )
        .await?;

    Ok(Json(MessageResponse::message("Menu item updated successfully!")))
}

pub async fn update_order_status(
    State(state): State<AppState>,
    AdminAccount(_admin): AdminAccount,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateOrderStatusRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, APIErrors> {
    let Json(body) = payload?;

    OrderService::new(state.db)
        .set_status(id, body.status.as_deref())
        .await?;

    Ok(Json(MessageResponse::message("Order status updated successfully!")))
}
