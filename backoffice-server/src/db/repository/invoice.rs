//! Invoice Repository
//!
//! Reads join the invoice with its order and product (`FETCH`). Every
//! mutation runs as one transaction; the in-transaction guards re-check
//! what the service layer already verified, so racing writers cannot slip
//! past the one-invoice-per-order invariant.

use super::{BaseRepository, RepoResult};
use crate::db::models::{Invoice, InvoiceDetail, InvoicePatch, InvoiceStatus, PaymentMethod};
use crate::db::tx;
use crate::utils::time::now_millis;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const CREATE_INVOICE: &str = r#"
BEGIN TRANSACTION;
LET $existing = (SELECT VALUE id FROM invoice WHERE order_id = $order LIMIT 1)[0];
IF $existing != NONE { THROW 'conflict:Invoice already exists for this order'; };
CREATE invoice CONTENT $data;
COMMIT TRANSACTION;
"#;

const UPDATE_INVOICE: &str = r#"
BEGIN TRANSACTION;
LET $target = (SELECT VALUE id FROM invoice WHERE invoice_number = $invoice_number LIMIT 1)[0];
IF $target == NONE { THROW 'not_found:Invoice not found'; };
UPDATE $target MERGE $data;
COMMIT TRANSACTION;
"#;

const DELETE_INVOICE: &str = r#"
BEGIN TRANSACTION;
LET $target = (SELECT VALUE id FROM invoice WHERE invoice_number = $invoice_number LIMIT 1)[0];
IF $target == NONE { THROW 'not_found:Invoice not found'; };
DELETE $target;
COMMIT TRANSACTION;
"#;

#[derive(Clone)]
pub struct InvoiceRepository {
    base: BaseRepository,
}

impl InvoiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All invoices joined with order and product, most recent first
    pub async fn find_all(&self) -> RepoResult<Vec<InvoiceDetail>> {
        let invoices: Vec<InvoiceDetail> = self
            .base
            .db()
            .query("SELECT * FROM invoice ORDER BY created_at DESC FETCH order_id, order_id.product")
            .await?
            .take(0)?;
        Ok(invoices)
    }

    /// Single invoice joined with order and product
    pub async fn find_detail_by_number(
        &self,
        invoice_number: &str,
    ) -> RepoResult<Option<InvoiceDetail>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM invoice WHERE invoice_number = $invoice_number LIMIT 1 \
                 FETCH order_id, order_id.product",
            )
            .bind(("invoice_number", invoice_number.to_string()))
            .await?;
        let invoices: Vec<InvoiceDetail> = result.take(0)?;
        Ok(invoices.into_iter().next())
    }

    /// Record id of the invoice referencing `order`, if any
    pub async fn find_by_order(&self, order: &RecordId) -> RepoResult<Option<RecordId>> {
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE id FROM invoice WHERE order_id = $order LIMIT 1")
            .bind(("order", order.clone()))
            .await?;
        let ids: Vec<RecordId> = result.take(0)?;
        Ok(ids.into_iter().next())
    }

    /// Persist a derived invoice; fails with Duplicate when the order is
    /// already invoiced
    pub async fn create_atomic(&self, invoice: Invoice) -> RepoResult<()> {
        self.base
            .db()
            .query(CREATE_INVOICE)
            .bind(("order", invoice.order.clone()))
            .bind(("data", invoice))
            .await
            .map_err(tx::map_tx_error)?
            .check()
            .map_err(tx::map_tx_error)?;
        Ok(())
    }

    /// Apply a status/payment-method patch and bump `updated_at`
    pub async fn update_atomic(
        &self,
        invoice_number: &str,
        patch: &InvoicePatch,
    ) -> RepoResult<()> {
        #[derive(Serialize)]
        struct InvoiceMergeDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<InvoiceStatus>,
            #[serde(skip_serializing_if = "Option::is_none")]
            payment_method: Option<PaymentMethod>,
            updated_at: i64,
        }

        let merge = InvoiceMergeDb {
            status: patch.status,
            payment_method: patch.payment_method,
            updated_at: now_millis(),
        };

        self.base
            .db()
            .query(UPDATE_INVOICE)
            .bind(("invoice_number", invoice_number.to_string()))
            .bind(("data", merge))
            .await
            .map_err(tx::map_tx_error)?
            .check()
            .map_err(tx::map_tx_error)?;
        Ok(())
    }

    /// Delete an invoice by business key
    pub async fn delete_atomic(&self, invoice_number: &str) -> RepoResult<()> {
        self.base
            .db()
            .query(DELETE_INVOICE)
            .bind(("invoice_number", invoice_number.to_string()))
            .await
            .map_err(tx::map_tx_error)?
            .check()
            .map_err(tx::map_tx_error)?;
        Ok(())
    }
}
