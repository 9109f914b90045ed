//! Product Repository
//!
//! Read-only: products are maintained by the catalog side of the
//! marketplace and only referenced here.

use super::{BaseRepository, RepoResult};
use crate::db::models::Product;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a product by record identity
    ///
    /// Returns `None` for dangling references (a product deleted out from
    /// under an order by the external catalog).
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self.base.db().select(id.clone()).await?;
        Ok(product)
    }
}
