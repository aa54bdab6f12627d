mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{add_item, call, create_account, get_request, json_request, send, test_state, token_for};
use kiosk_server_lib::data::repos::implementors::order_repo::OrderRepo;
use kiosk_server_lib::data::repos::traits::repository::Repository;
use serde_json::json;

#[tokio::test]
async fn test_unauthenticated_order_redirects_to_login() {
    let state = test_state().await;
    let burger = add_item(&state.db, "Burger", "8.99", "Burgers", true).await;

    let response = call(
        &state,
        json_request("POST", "/order", None, json!({burger.to_string(): {"quantity": 1}})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    assert!(OrderRepo::new(state.db.clone()).get_all().await.unwrap().is_empty());

    let response = call(&state, get_request("/my-orders", Some("garbage"))).await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_multi_item_order_scenario() {
    let state = test_state().await;
    let account = create_account(&state.db, "hungry", false).await;
    let token = token_for(&state, &account);
    let burger = add_item(&state.db, "Burger", "8.99", "Burgers", true).await;
    let fries = add_item(&state.db, "Fries", "3.99", "Sides", false).await;

    let (status, body) = send(
        &state,
        json_request(
            "POST",
            "/order",
            Some(&token),
            json!({burger.to_string(): {"quantity": 2}, fries.to_string(): {"quantity": 1}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Order placed successfully!");
    let order_id = body["order_id"].as_i64().unwrap();

    let (status, orders) = send(&state, get_request("/my-orders", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["order_id"].as_i64().unwrap(), order_id);
    assert_eq!(orders[0]["total_amount"], "17.98");
    assert_eq!(orders[0]["status"], "pending");
    assert_eq!(
        orders[0]["items"],
        json!([{"menu_item_id": burger, "name": "Burger", "quantity": 2, "price_at_time": "8.99"}])
    );
}

#[tokio::test]
async fn test_multi_item_order_rejects_malformed_body() {
    let state = test_state().await;
    let account = create_account(&state.db, "sloppy", false).await;
    let token = token_for(&state, &account);

    let (status, body) = send(
        &state,
        json_request("POST", "/order", Some(&token), json!([1, 2, 3])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_place_order_unavailable_item_writes_nothing() {
    let state = test_state().await;
    let account = create_account(&state.db, "unlucky", false).await;
    let token = token_for(&state, &account);
    let fries = add_item(&state.db, "Fries", "3.99", "Sides", false).await;

    let (status, body) = send(
        &state,
        json_request(
            "POST",
            "/place_order",
            Some(&token),
            json!({"item_id": fries, "quantity": 1}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Item not available");
    assert!(OrderRepo::new(state.db.clone()).get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_place_order_errors() {
    let state = test_state().await;
    let account = create_account(&state.db, "careless", false).await;
    let token = token_for(&state, &account);
    let burger = add_item(&state.db, "Burger", "8.99", "Burgers", true).await;

    let (status, body) = send(
        &state,
        json_request("POST", "/place_order", Some(&token), json!({"quantity": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Item ID is required");

    let (status, body) = send(
        &state,
        json_request("POST", "/place_order", Some(&token), json!({"item_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Item not found");

    let (status, _) = send(
        &state,
        json_request(
            "POST",
            "/place_order",
            Some(&token),
            json!({"item_id": burger, "quantity": 0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_place_order_with_session_cookie() {
    let state = test_state().await;
    let account = create_account(&state.db, "browser", false).await;
    let token = token_for(&state, &account);
    let cola = add_item(&state.db, "Cola", "2.49", "Drinks", true).await;

    let request = Request::builder()
        .method("POST")
        .uri("/place_order")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, format!("kiosk_session={token}"))
        .body(Body::from(json!({"itemId": cola, "quantity": 3}).to_string()))
        .unwrap();

    let (status, body) = send(&state, request).await;
    assert_eq!(status, StatusCode::OK);

    let order_id = body["order_id"].as_i64().unwrap() as i32;
    let order = OrderRepo::new(state.db.clone())
        .get_by_id(order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.account_id, account.account_id);
    assert_eq!(order.total_amount.to_string(), "7.47");
}

#[tokio::test]
async fn test_my_orders_only_shows_own_orders() {
    let state = test_state().await;
    let alice = create_account(&state.db, "alice", false).await;
    let bob = create_account(&state.db, "bob", false).await;
    let cola = add_item(&state.db, "Cola", "2.49", "Drinks", true).await;

    send(
        &state,
        json_request(
            "POST",
            "/place_order",
            Some(&token_for(&state, &alice)),
            json!({"item_id": cola}),
        ),
    )
    .await;

    let (status, orders) = send(
        &state,
        get_request("/my-orders", Some(&token_for(&state, &bob))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders, json!([]));
}
