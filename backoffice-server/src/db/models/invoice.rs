//! Invoice Model
//!
//! An invoice snapshots its order at creation time: `amount` is the unit
//! price of the product and `total` is `amount * quantity`. Neither is
//! recomputed when the product price changes later.

use super::serde_helpers;
use super::OrderDetail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use surrealdb::RecordId;
use validator::Validate;

pub type InvoiceId = RecordId;

/// Invoice status
///
/// Transitions are unrestricted: any status may move to any other. Callers
/// rely on being able to reopen a paid invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("Invalid invoice status: {}", other)),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "credit_card",
            Self::BankTransfer => "bank_transfer",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "credit_card" => Ok(Self::CreditCard),
            "bank_transfer" => Ok(Self::BankTransfer),
            other => Err(format!("Invalid payment method: {}", other)),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice as stored: `order` is a native record link, unique per invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<InvoiceId>,
    /// Business key, time-based token (e.g. "INV1700000000000")
    pub invoice_number: String,
    /// Record link to the invoiced order (at most one invoice per order).
    /// Stored under `order_id` to keep queries clear of the ORDER keyword.
    #[serde(rename = "order_id")]
    pub order: RecordId,
    /// User business key, copied from the order
    pub user_id: String,
    /// Unit price snapshot
    pub amount: f64,
    /// amount * quantity snapshot
    pub total: f64,
    pub status: InvoiceStatus,
    pub payment_method: PaymentMethod,
    /// Issue date, Unix millis
    pub issued_at: i64,
    /// Due date, issued_at + 7 days
    pub due_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Invoice joined with its order and product (the read model returned by
/// the API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDetail {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<InvoiceId>,
    pub invoice_number: String,
    /// Joined order (the `order_id` link with order and product fetched)
    #[serde(rename = "order_id")]
    pub order: OrderDetail,
    pub user_id: String,
    pub amount: f64,
    pub total: f64,
    pub status: InvoiceStatus,
    pub payment_method: PaymentMethod,
    pub issued_at: i64,
    pub due_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InvoiceCreate {
    /// Business key of the order to invoice
    #[validate(length(min = 1, message = "order_number is required"))]
    pub order_number: String,
    /// One of cash | credit_card | bank_transfer
    #[validate(length(min = 1, message = "payment_method is required"))]
    pub payment_method: String,
}

/// Partial update; enum values are validated at the API boundary
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceUpdate {
    pub status: Option<String>,
    pub payment_method: Option<String>,
}

/// Typed form of [`InvoiceUpdate`], produced at the API boundary after
/// exhaustive enum matching. An empty patch is legal and still bumps
/// `updated_at`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoicePatch {
    pub status: Option<InvoiceStatus>,
    pub payment_method: Option<PaymentMethod>,
}
