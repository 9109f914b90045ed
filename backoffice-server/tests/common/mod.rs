//! Shared test harness: embedded database in a temp dir plus seed helpers.

#![allow(dead_code)]

use backoffice_server::db::models::{OrderCreate, OrderDetail, Product};
use backoffice_server::db::repository::OrderRepository;
use backoffice_server::db::schema;
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::{RecordId, Surreal};
use tempfile::TempDir;

/// Open a fresh database with the schema applied. The `TempDir` guard must
/// stay alive for the duration of the test.
pub async fn open_db() -> (TempDir, Surreal<Db>) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    schema::define(&db).await.unwrap();
    (tmp, db)
}

/// Insert a product the way the external catalog would
pub async fn seed_product(db: &Surreal<Db>, product_number: &str, price: f64) -> Product {
    let product = Product {
        id: None,
        product_number: product_number.to_string(),
        code: format!("C-{}", product_number),
        name: format!("Product {}", product_number),
        price,
        category: RecordId::from_table_key("category", "general"),
    };
    let created: Option<Product> = db.create("product").content(product).await.unwrap();
    created.unwrap()
}

/// Create an order for `product` through the repository
pub async fn seed_order(
    db: &Surreal<Db>,
    product: &Product,
    user_id: &str,
    quantity: i64,
) -> OrderDetail {
    let repo = OrderRepository::new(db.clone());
    repo.create(OrderCreate {
        product: product.id.clone().unwrap().to_string(),
        user_id: user_id.to_string(),
        quantity,
    })
    .await
    .unwrap()
}
