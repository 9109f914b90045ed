//! Invoice derivation service
//!
//! Computes invoice fields from an order and its product at creation time,
//! enforces the one-invoice-per-order invariant, and manages the status
//! lifecycle. Amount and total are snapshots: `amount` holds the unit price
//! and `total = amount * quantity`, frozen at creation.

use super::money;
use crate::db::models::{Invoice, InvoiceDetail, InvoicePatch, InvoiceStatus, PaymentMethod};
use crate::db::repository::{
    InvoiceRepository, OrderRepository, ProductRepository, RepoError, RepoResult,
};
use crate::utils::time::{now_millis, plus_days};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Payment terms: due date is the issue date plus this many days
const DUE_DAYS: i64 = 7;

pub struct InvoiceService {
    orders: OrderRepository,
    products: ProductRepository,
    invoices: InvoiceRepository,
}

impl InvoiceService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            invoices: InvoiceRepository::new(db),
        }
    }

    /// Derive and persist an invoice for an order
    ///
    /// Fails with NotFound when the order (or its product link) does not
    /// resolve, and with Duplicate when the order is already invoiced. The
    /// write itself re-checks uniqueness inside the transaction, so of two
    /// racing calls exactly one succeeds.
    pub async fn create_invoice(
        &self,
        order_number: &str,
        payment_method: PaymentMethod,
    ) -> RepoResult<InvoiceDetail> {
        let order = self
            .orders
            .find_by_number(order_number)
            .await?
            .ok_or_else(|| RepoError::NotFound("Order not found".to_string()))?;
        let order_id = order
            .id
            .ok_or_else(|| RepoError::Database("Order record missing id".to_string()))?;

        let product = self
            .products
            .find_by_id(&order.product)
            .await?
            .ok_or_else(|| RepoError::NotFound("Product not found".to_string()))?;

        if self.invoices.find_by_order(&order_id).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Invoice already exists for this order".to_string(),
            ));
        }

        let amount = product.price;
        let total = money::line_total(amount, order.quantity).ok_or_else(|| {
            RepoError::Validation(format!(
                "Product price {} is not a valid amount",
                product.price
            ))
        })?;

        let issued_at = now_millis();
        let invoice = Invoice {
            id: None,
            invoice_number: format!("INV{}", issued_at),
            order: order_id,
            user_id: order.user_id,
            amount,
            total,
            status: InvoiceStatus::Pending,
            payment_method,
            issued_at,
            due_at: plus_days(issued_at, DUE_DAYS),
            created_at: issued_at,
            updated_at: issued_at,
        };
        let invoice_number = invoice.invoice_number.clone();

        self.invoices.create_atomic(invoice).await?;
        tracing::info!(
            invoice_number = %invoice_number,
            order_number = %order_number,
            total,
            "Invoice created"
        );

        self.invoices
            .find_detail_by_number(&invoice_number)
            .await?
            .ok_or_else(|| RepoError::Database("Invoice not readable after create".to_string()))
    }

    /// Single invoice joined with its order and product
    pub async fn get_invoice(&self, invoice_number: &str) -> RepoResult<Option<InvoiceDetail>> {
        self.invoices.find_detail_by_number(invoice_number).await
    }

    /// All invoices, most recent first
    pub async fn list_invoices(&self) -> RepoResult<Vec<InvoiceDetail>> {
        self.invoices.find_all().await
    }

    /// Apply a status/payment-method patch
    ///
    /// Transitions are unrestricted among the enumerated values; the patch
    /// always bumps `updated_at`.
    pub async fn update_invoice(
        &self,
        invoice_number: &str,
        patch: InvoicePatch,
    ) -> RepoResult<InvoiceDetail> {
        self.invoices.update_atomic(invoice_number, &patch).await?;
        self.invoices
            .find_detail_by_number(invoice_number)
            .await?
            .ok_or_else(|| RepoError::NotFound("Invoice not found".to_string()))
    }

    /// Delete an invoice; invoices have no dependents, so no cascade
    pub async fn delete_invoice(&self, invoice_number: &str) -> RepoResult<()> {
        self.invoices.delete_atomic(invoice_number).await
    }
}
