//! Order repository tests: CRUD plus the invoice cascade.

mod common;

use std::time::Duration;

use backoffice_server::billing::InvoiceService;
use backoffice_server::db::models::{OrderCreate, OrderUpdate, PaymentMethod};
use backoffice_server::db::repository::{OrderRepository, RepoError};
use validator::Validate;

#[tokio::test]
async fn create_joins_product_and_generates_number() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 75.0).await;

    let repo = OrderRepository::new(db.clone());
    let order = repo
        .create(OrderCreate {
            product: product.id.clone().unwrap().to_string(),
            user_id: "US1001".to_string(),
            quantity: 2,
        })
        .await
        .unwrap();

    assert!(order.order_number.starts_with("OR"));
    assert_eq!(order.user_id, "US1001");
    assert_eq!(order.quantity, 2);
    assert_eq!(order.product.product_number, "PD1");
    assert_eq!(order.product.price, 75.0);
    assert_eq!(order.created_at, order.updated_at);
}

#[tokio::test]
async fn create_against_unknown_product_writes_nothing() {
    let (_tmp, db) = common::open_db().await;
    let repo = OrderRepository::new(db.clone());

    let err = repo
        .create(OrderCreate {
            product: "product:missing".to_string(),
            user_id: "US1001".to_string(),
            quantity: 1,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)), "got {:?}", err);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn quantity_below_one_fails_boundary_validation() {
    let payload = OrderCreate {
        product: "product:abc".to_string(),
        user_id: "US1001".to_string(),
        quantity: 0,
    };
    assert!(payload.validate().is_err());
}

#[tokio::test]
async fn update_changes_quantity_and_bumps_updated_at() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 20.0).await;
    let order = common::seed_order(&db, &product, "US1001", 1).await;

    tokio::time::sleep(Duration::from_millis(5)).await;
    let repo = OrderRepository::new(db.clone());
    let updated = repo
        .update(
            &order.order_number,
            OrderUpdate {
                product: None,
                user_id: None,
                quantity: Some(5),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.user_id, "US1001");
    assert!(updated.updated_at > order.updated_at);
}

#[tokio::test]
async fn update_rechecks_a_swapped_product() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 20.0).await;
    let replacement = common::seed_product(&db, "PD2", 35.0).await;
    let order = common::seed_order(&db, &product, "US1001", 1).await;

    let repo = OrderRepository::new(db.clone());

    // unknown replacement is rejected and the order is untouched
    let err = repo
        .update(
            &order.order_number,
            OrderUpdate {
                product: Some("product:missing".to_string()),
                user_id: None,
                quantity: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)), "got {:?}", err);
    let unchanged = repo
        .find_detail_by_number(&order.order_number)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.product.product_number, "PD1");

    // a real replacement goes through
    let updated = repo
        .update(
            &order.order_number,
            OrderUpdate {
                product: Some(replacement.id.clone().unwrap().to_string()),
                user_id: None,
                quantity: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.product.product_number, "PD2");
}

#[tokio::test]
async fn update_unknown_order_is_not_found() {
    let (_tmp, db) = common::open_db().await;
    let repo = OrderRepository::new(db.clone());

    let err = repo
        .update(
            "OR0",
            OrderUpdate {
                product: None,
                user_id: None,
                quantity: Some(2),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn delete_cascade_removes_order_and_its_invoice() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 50.0).await;
    let order = common::seed_order(&db, &product, "US1001", 2).await;

    let service = InvoiceService::new(db.clone());
    service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();

    let repo = OrderRepository::new(db.clone());
    repo.delete_cascade(&order.order_number).await.unwrap();

    assert!(
        repo.find_detail_by_number(&order.order_number)
            .await
            .unwrap()
            .is_none()
    );
    assert!(service.list_invoices().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_cascade_on_unknown_order_is_not_found() {
    let (_tmp, db) = common::open_db().await;
    let repo = OrderRepository::new(db.clone());

    let err = repo.delete_cascade("OR0").await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)), "got {:?}", err);
}
