//! Marketplace Back Office Server
//!
//! REST back office for a marketplace, backed by an embedded document
//! database. The core is the order → invoice derivation workflow: invoice
//! totals are computed from order and product data at creation time, each
//! order carries at most one invoice, and every invoice mutation runs as
//! one database transaction.
//!
//! # Module structure
//!
//! ```text
//! backoffice-server/src/
//! ├── core/      # configuration, state, HTTP server
//! ├── api/       # routes and handlers
//! ├── billing/   # invoice derivation service and money arithmetic
//! ├── db/        # embedded SurrealDB, models, repositories, transactions
//! └── utils/     # errors, response envelope, logging, time
//! ```

pub mod api;
pub mod billing;
pub mod core;
pub mod db;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{ApiResponse, AppError, AppResult};
