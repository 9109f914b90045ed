//! Database models

pub mod invoice;
pub mod order;
pub mod product;
pub mod serde_helpers;

pub use invoice::{
    Invoice, InvoiceCreate, InvoiceDetail, InvoicePatch, InvoiceStatus, InvoiceUpdate,
    PaymentMethod,
};
pub use order::{Order, OrderCreate, OrderDetail, OrderUpdate};
pub use product::Product;
