mod common;

use common::{create_account, test_db};
use diesel::result::{DatabaseErrorKind, Error};
use kiosk_server_lib::data::models::account::{NewAccount, UpdateAccount};
use kiosk_server_lib::data::repos::implementors::account_repo::AccountRepo;
use kiosk_server_lib::data::repos::traits::repository::Repository;

#[tokio::test]
async fn test_add_and_lookup_account() {
    let db = test_db().await;
    let created = create_account(&db, "testuser", false).await;
    let repo = AccountRepo::new(db);

    let by_name = repo.get_by_username("testuser").await.unwrap().unwrap();
    let by_email = repo
        .get_by_email("testuser@example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(by_name, created);
    assert_eq!(by_email.account_id, created.account_id);
    assert!(!created.is_admin);
    assert_ne!(created.password_hash, common::PASSWORD);
}

#[tokio::test]
async fn test_missing_account_is_none() {
    let repo = AccountRepo::new(test_db().await);

    assert!(repo.get_by_username("ghost").await.unwrap().is_none());
    assert!(repo.get_by_id(42).await.unwrap().is_none());
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_username_is_unique_violation() {
    let db = test_db().await;
    create_account(&db, "taken", false).await;

    let result = AccountRepo::new(db)
        .add(NewAccount {
            username: "taken",
            email: "other@example.com",
            password_hash: "x",
            is_admin: false,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _))
    ));
}

#[tokio::test]
async fn test_promote_to_admin() {
    let db = test_db().await;
    let account = create_account(&db, "promoted", false).await;
    let repo = AccountRepo::new(db);

    assert!(repo.get_admins().await.unwrap().is_empty());

    let rows = repo
        .update(
            account.account_id,
            UpdateAccount {
                is_admin: Some(true),
            },
        )
        .await
        .unwrap();

    assert_eq!(rows, 1);
    let admins = repo.get_admins().await.unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].account_id, account.account_id);
}
