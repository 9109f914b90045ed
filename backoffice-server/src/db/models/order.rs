//! Order Model

use super::serde_helpers;
use super::Product;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

pub type OrderId = RecordId;

/// Order as stored: `product` is a native record link so the repository can
/// compare and `FETCH` it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    /// Business key, time-based token (e.g. "OR1700000000000")
    pub order_number: String,
    /// Record link to product
    pub product: RecordId,
    /// User business key
    pub user_id: String,
    pub quantity: i64,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis
    pub updated_at: i64,
}

/// Order joined with its product (the read model returned by the API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    pub order_number: String,
    pub product: Product,
    pub user_id: String,
    pub quantity: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderCreate {
    /// Product record id, "product:xyz" or bare "xyz"
    #[validate(length(min = 1, message = "product is required"))]
    pub product: String,
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderUpdate {
    pub product: Option<String>,
    pub user_id: Option<String>,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: Option<i64>,
}
