//! Server state
//!
//! [`ServerState`] holds the shared handles every request needs. The
//! SurrealDB handle is internally reference-counted, so cloning the state
//! per request is cheap.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db;
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Open the database and build the shared state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = db::connect(config).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }

    /// Build state around an already-open database (tests)
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }
}
