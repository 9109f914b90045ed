//! Order Repository
//!
//! Order mutations are plain single-statement writes except for
//! `delete_cascade`, which removes the order and its invoices in one
//! transaction.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Order, OrderCreate, OrderDetail, OrderUpdate, Product};
use crate::db::tx;
use crate::utils::time::now_millis;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "order";

const DELETE_CASCADE: &str = r#"
BEGIN TRANSACTION;
LET $target = (SELECT VALUE id FROM order WHERE order_number = $order_number LIMIT 1)[0];
IF $target == NONE { THROW 'not_found:Order not found'; };
DELETE invoice WHERE order_id = $target;
DELETE $target;
COMMIT TRANSACTION;
"#;

/// Parse a caller-supplied product reference ("product:xyz" or bare "xyz")
fn product_record_id(raw: &str) -> RepoResult<RecordId> {
    if raw.contains(':') {
        raw.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid product id: {}", raw)))
    } else {
        Ok(RecordId::from_table_key("product", raw))
    }
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All orders joined with their product, most recent first
    pub async fn find_all(&self) -> RepoResult<Vec<OrderDetail>> {
        let orders: Vec<OrderDetail> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC FETCH product")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Single order joined with its product
    pub async fn find_detail_by_number(
        &self,
        order_number: &str,
    ) -> RepoResult<Option<OrderDetail>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE order_number = $order_number LIMIT 1 FETCH product")
            .bind(("order_number", order_number.to_string()))
            .await?;
        let orders: Vec<OrderDetail> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Single order with the product as a raw record link
    pub async fn find_by_number(&self, order_number: &str) -> RepoResult<Option<Order>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE order_number = $order_number LIMIT 1")
            .bind(("order_number", order_number.to_string()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Create a new order; the product reference must resolve
    pub async fn create(&self, data: OrderCreate) -> RepoResult<OrderDetail> {
        let product_id = product_record_id(&data.product)?;
        let product: Option<Product> = self.base.db().select(product_id.clone()).await?;
        if product.is_none() {
            return Err(RepoError::NotFound("Product not found".to_string()));
        }

        let now = now_millis();
        let order = Order {
            id: None,
            order_number: format!("OR{}", now),
            product: product_id,
            user_id: data.user_id,
            quantity: data.quantity,
            created_at: now,
            updated_at: now,
        };
        let order_number = order.order_number.clone();

        let created: Option<Order> = self
            .base
            .db()
            .create(TABLE)
            .content(order)
            .await
            .map_err(tx::map_tx_error)?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))?;

        self.find_detail_by_number(&order_number)
            .await?
            .ok_or_else(|| RepoError::Database("Order not readable after create".to_string()))
    }

    /// Partial update; re-checks the product reference when it changes
    pub async fn update(&self, order_number: &str, data: OrderUpdate) -> RepoResult<OrderDetail> {
        let existing = self
            .find_by_number(order_number)
            .await?
            .ok_or_else(|| RepoError::NotFound("Order not found".to_string()))?;
        let order_id = existing
            .id
            .ok_or_else(|| RepoError::Database("Order record missing id".to_string()))?;

        let product = match data.product.as_deref() {
            Some(raw) => {
                let product_id = product_record_id(raw)?;
                let found: Option<Product> = self.base.db().select(product_id.clone()).await?;
                if found.is_none() {
                    return Err(RepoError::NotFound("Product not found".to_string()));
                }
                Some(product_id)
            }
            None => None,
        };

        #[derive(Serialize)]
        struct OrderMergeDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            product: Option<RecordId>,
            #[serde(skip_serializing_if = "Option::is_none")]
            user_id: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            quantity: Option<i64>,
            updated_at: i64,
        }

        let merge = OrderMergeDb {
            product,
            user_id: data.user_id,
            quantity: data.quantity,
            updated_at: now_millis(),
        };

        self.base
            .db()
            .query("UPDATE $order MERGE $data")
            .bind(("order", order_id))
            .bind(("data", merge))
            .await?
            .check()?;

        self.find_detail_by_number(order_number)
            .await?
            .ok_or_else(|| RepoError::NotFound("Order not found".to_string()))
    }

    /// Delete an order and every invoice referencing it, atomically
    pub async fn delete_cascade(&self, order_number: &str) -> RepoResult<()> {
        self.base
            .db()
            .query(DELETE_CASCADE)
            .bind(("order_number", order_number.to_string()))
            .await
            .map_err(tx::map_tx_error)?
            .check()
            .map_err(tx::map_tx_error)?;
        Ok(())
    }
}
