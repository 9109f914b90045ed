//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine). The `Surreal<Db>` handle is cheap
//! to clone and shared through `ServerState`.

pub mod models;
pub mod repository;
pub mod schema;
pub mod tx;

use crate::core::Config;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "marketplace";
const DATABASE: &str = "backoffice";

/// Open the embedded database and apply schema definitions
pub async fn connect(config: &Config) -> Result<Surreal<Db>, AppError> {
    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| AppError::Internal(format!("Failed to create data dir: {e}")))?;

    let db = Surreal::new::<RocksDb>(data_dir.as_path())
        .await
        .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::Database(format!("Failed to select namespace: {e}")))?;

    schema::define(&db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to apply schema: {e}")))?;

    tracing::info!(path = %data_dir.display(), "Database connection established");
    Ok(db)
}
