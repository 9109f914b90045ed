//! Invoice derivation workflow tests
//!
//! Exercises the service against a real embedded database: derivation
//! math, the one-invoice-per-order invariant, the status lifecycle, and
//! snapshot semantics.

mod common;

use std::time::Duration;

use backoffice_server::billing::InvoiceService;
use backoffice_server::db::models::{InvoicePatch, InvoiceStatus, PaymentMethod, Product};
use backoffice_server::db::repository::RepoError;
use backoffice_server::utils::time::DAY_MILLIS;

#[tokio::test]
async fn derives_amount_total_and_due_date() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 1_000_000.0).await;
    let order = common::seed_order(&db, &product, "US1001", 3).await;

    let service = InvoiceService::new(db.clone());
    let invoice = service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();

    assert_eq!(invoice.amount, 1_000_000.0);
    assert_eq!(invoice.total, 3_000_000.0);
    assert_eq!(invoice.status, InvoiceStatus::Pending);
    assert_eq!(invoice.payment_method, PaymentMethod::Cash);
    assert_eq!(invoice.due_at - invoice.issued_at, 7 * DAY_MILLIS);
    assert!(invoice.invoice_number.starts_with("INV"));
    assert_eq!(invoice.user_id, "US1001");

    // joined read model reaches through to the order and product
    assert_eq!(invoice.order.order_number, order.order_number);
    assert_eq!(invoice.order.quantity, 3);
    assert_eq!(invoice.order.product.price, 1_000_000.0);
}

#[tokio::test]
async fn second_invoice_for_same_order_conflicts() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 250.0).await;
    let order = common::seed_order(&db, &product, "US1001", 2).await;

    let service = InvoiceService::new(db.clone());
    service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();

    let err = service
        .create_invoice(&order.order_number, PaymentMethod::CreditCard)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)), "got {:?}", err);

    // exactly one invoice survived both calls
    let invoices = service.list_invoices().await.unwrap();
    assert_eq!(invoices.len(), 1);
}

#[tokio::test]
async fn create_for_unknown_order_writes_nothing() {
    let (_tmp, db) = common::open_db().await;
    let service = InvoiceService::new(db.clone());

    let err = service
        .create_invoice("OR0", PaymentMethod::Cash)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)), "got {:?}", err);
    assert!(service.list_invoices().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_dangling_product_link_is_not_found() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 10.0).await;
    let order = common::seed_order(&db, &product, "US1001", 1).await;

    // the external catalog removes the product out from under the order
    let _deleted: Option<Product> = db.delete(product.id.clone().unwrap()).await.unwrap();

    let service = InvoiceService::new(db.clone());
    let err = service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)), "got {:?}", err);
    assert!(service.list_invoices().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_moves_status_and_bumps_updated_at() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 40.0).await;
    let order = common::seed_order(&db, &product, "US1001", 1).await;

    let service = InvoiceService::new(db.clone());
    let created = service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    let updated = service
        .update_invoice(
            &created.invoice_number,
            InvoicePatch {
                status: Some(InvoiceStatus::Paid),
                payment_method: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert!(updated.updated_at > created.updated_at);
    // snapshots are untouched by status changes
    assert_eq!(updated.amount, created.amount);
    assert_eq!(updated.total, created.total);
    assert_eq!(updated.due_at, created.due_at);
}

#[tokio::test]
async fn status_transitions_are_unrestricted() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 12.5).await;
    let order = common::seed_order(&db, &product, "US1001", 4).await;

    let service = InvoiceService::new(db.clone());
    let created = service
        .create_invoice(&order.order_number, PaymentMethod::BankTransfer)
        .await
        .unwrap();

    // pending -> paid -> pending -> cancelled: every hop is legal
    for status in [
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Cancelled,
    ] {
        let updated = service
            .update_invoice(
                &created.invoice_number,
                InvoicePatch {
                    status: Some(status),
                    payment_method: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, status);
    }
}

#[tokio::test]
async fn update_can_change_payment_method_alone() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 99.0).await;
    let order = common::seed_order(&db, &product, "US1001", 1).await;

    let service = InvoiceService::new(db.clone());
    let created = service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();

    let updated = service
        .update_invoice(
            &created.invoice_number,
            InvoicePatch {
                status: None,
                payment_method: Some(PaymentMethod::BankTransfer),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.payment_method, PaymentMethod::BankTransfer);
    assert_eq!(updated.status, InvoiceStatus::Pending);
}

#[tokio::test]
async fn update_unknown_invoice_is_not_found() {
    let (_tmp, db) = common::open_db().await;
    let service = InvoiceService::new(db.clone());

    let err = service
        .update_invoice("INV0", InvoicePatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn unknown_status_never_reaches_the_store() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 5.0).await;
    let order = common::seed_order(&db, &product, "US1001", 1).await;

    let service = InvoiceService::new(db.clone());
    let created = service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();

    // the boundary rejects the value, so no patch is ever built
    assert!("archived".parse::<InvoiceStatus>().is_err());

    let current = service
        .get_invoice(&created.invoice_number)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.status, InvoiceStatus::Pending);
}

#[tokio::test]
async fn delete_removes_the_invoice_only_once() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 15.0).await;
    let order = common::seed_order(&db, &product, "US1001", 2).await;

    let service = InvoiceService::new(db.clone());
    let created = service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();

    service.delete_invoice(&created.invoice_number).await.unwrap();
    assert!(
        service
            .get_invoice(&created.invoice_number)
            .await
            .unwrap()
            .is_none()
    );

    let err = service
        .delete_invoice(&created.invoice_number)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 10.0).await;
    let first_order = common::seed_order(&db, &product, "US1001", 1).await;
    // time-token business keys need distinct millis
    tokio::time::sleep(Duration::from_millis(2)).await;
    let second_order = common::seed_order(&db, &product, "US1002", 2).await;

    let service = InvoiceService::new(db.clone());
    let first = service
        .create_invoice(&first_order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = service
        .create_invoice(&second_order.order_number, PaymentMethod::CreditCard)
        .await
        .unwrap();

    let invoices = service.list_invoices().await.unwrap();
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0].invoice_number, second.invoice_number);
    assert_eq!(invoices[1].invoice_number, first.invoice_number);
    assert!(invoices[0].created_at > invoices[1].created_at);
}

#[tokio::test]
async fn amount_and_total_are_snapshots() {
    let (_tmp, db) = common::open_db().await;
    let product = common::seed_product(&db, "PD1", 100.0).await;
    let order = common::seed_order(&db, &product, "US1001", 2).await;

    let service = InvoiceService::new(db.clone());
    let created = service
        .create_invoice(&order.order_number, PaymentMethod::Cash)
        .await
        .unwrap();

    // a later catalog price change must not leak into the invoice
    db.query("UPDATE $product SET price = 999.0")
        .bind(("product", product.id.clone().unwrap()))
        .await
        .unwrap()
        .check()
        .unwrap();

    let fetched = service
        .get_invoice(&created.invoice_number)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.amount, 100.0);
    assert_eq!(fetched.total, 200.0);
    // while the joined product reflects the current catalog state
    assert_eq!(fetched.order.product.price, 999.0);
}
