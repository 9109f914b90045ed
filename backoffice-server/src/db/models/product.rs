//! Product Model
//!
//! Products are reference data maintained by the catalog side of the
//! marketplace; this service only ever reads them.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type ProductId = RecordId;

/// Product model (read-only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<ProductId>,
    /// Business key (e.g. "PD1001")
    pub product_number: String,
    pub code: String,
    pub name: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Category reference, display-only
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
}
