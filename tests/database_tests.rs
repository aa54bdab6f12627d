mod common;

use common::{add_item, create_account, test_db};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use kiosk_server_lib::data::database::Database;
use kiosk_server_lib::data::repos::implementors::catalog_repo::CatalogRepo;
use kiosk_server_lib::data::repos::implementors::order_repo::OrderRepo;
use kiosk_server_lib::data::repos::traits::repository::Repository;
use kiosk_server_lib::services::order_service::OrderService;
use std::path::PathBuf;

/// A SQLite file under the temp dir, removed (with its WAL files) on drop.
struct TempDbFile(PathBuf);

impl TempDbFile {
    fn new(name: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        TempDbFile(std::env::temp_dir().join(format!(
            "kiosk-{name}-{}-{nanos}.db",
            std::process::id()
        )))
    }

    fn url(&self) -> &str {
        self.0.to_str().unwrap()
    }
}

impl Drop for TempDbFile {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.0.display()));
        }
    }
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = test_db().await;
    add_item(&db, "Cola", "2.49", "Drinks", true).await;

    db.run_migrations().await.expect("Second migration run failed");

    let items = CatalogRepo::new(db.clone()).get_all().await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_in_memory_databases_are_isolated() {
    let first = test_db().await;
    let second = test_db().await;

    add_item(&first, "Cola", "2.49", "Drinks", true).await;

    assert_eq!(CatalogRepo::new(first).get_all().await.unwrap().len(), 1);
    assert!(CatalogRepo::new(second).get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_foreign_keys_are_enforced() {
    let db = test_db().await;
    let mut conn = db.get_connection().await.expect("No connection");

    use kiosk_server_lib::data::models::schema::orders::dsl::{
        account_id, orders, status, total_amount,
    };

    let result = diesel::insert_into(orders)
        .values((account_id.eq(999), total_amount.eq("0.00"), status.eq("pending")))
        .execute(&mut conn)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_memory_url_keeps_schema_across_checkouts() {
    let db = Database::connect(":memory:", 16).expect("Pool creation failed");
    db.run_migrations().await.expect("Migrations failed");

    let account = create_account(&db, "alice", false).await;
    assert_eq!(account.username, "alice");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_orders_on_file_database() {
    let file = TempDbFile::new("concurrent-orders");
    let db = Database::connect(file.url(), 8).expect("Pool creation failed");
    db.run_migrations().await.expect("Migrations failed");

    let customer = create_account(&db, "alice", false).await;
    let burger = add_item(&db, "Burger", "8.99", "Burgers", true).await;

    let tasks: Vec<_> = (0..64)
        .map(|_| {
            let service = OrderService::new(db.clone());
            let account_id = customer.account_id;
            tokio::spawn(async move {
                service
                    .place_single_item_order(account_id, Some(burger), Some(1))
                    .await
            })
        })
        .collect();

    for task in tasks {
        task.await.expect("Order task panicked").expect("Order failed");
    }

    let orders = OrderRepo::new(db).get_all().await.unwrap();
    assert_eq!(orders.len(), 64);
}

#[tokio::test]
async fn test_foreign_keys_hold_on_every_pooled_connection() {
    let file = TempDbFile::new("foreign-keys");
    let db = Database::connect(file.url(), 4).expect("Pool creation failed");
    db.run_migrations().await.expect("Migrations failed");

    use kiosk_server_lib::data::models::schema::orders::dsl::{
        account_id, orders, status, total_amount,
    };

    // Hold the first connection so the insert below runs on a different one.
    let _first = db.get_connection().await.expect("No connection");
    let mut second = db.get_connection().await.expect("No connection");

    let result = diesel::insert_into(orders)
        .values((account_id.eq(999), total_amount.eq("0.00"), status.eq("pending")))
        .execute(&mut second)
        .await;

    assert!(result.is_err());
}
