//! Billing domain: the order → invoice derivation workflow

pub mod money;
mod service;

pub use service::InvoiceService;
