//! Schema bootstrap
//!
//! Idempotent `DEFINE` pass run at startup. The unique index on
//! `invoice.order` is what guarantees at most one invoice per order when
//! two creations race; business-key indexes mirror the lookups the API
//! performs.

use super::repository::RepoResult;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
DEFINE INDEX IF NOT EXISTS product_number_unique ON TABLE product COLUMNS product_number UNIQUE;

DEFINE TABLE IF NOT EXISTS order SCHEMALESS;
DEFINE INDEX IF NOT EXISTS order_number_unique ON TABLE order COLUMNS order_number UNIQUE;

DEFINE TABLE IF NOT EXISTS invoice SCHEMALESS;
DEFINE INDEX IF NOT EXISTS invoice_number_unique ON TABLE invoice COLUMNS invoice_number UNIQUE;
DEFINE INDEX IF NOT EXISTS invoice_order_unique ON TABLE invoice COLUMNS order_id UNIQUE;
DEFINE INDEX IF NOT EXISTS invoice_status_idx ON TABLE invoice COLUMNS status;
"#;

/// Apply table and index definitions
pub async fn define(db: &Surreal<Db>) -> RepoResult<()> {
    db.query(SCHEMA).await?.check()?;
    tracing::debug!("Database schema definitions applied");
    Ok(())
}
