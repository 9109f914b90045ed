//! Invoice API Handlers
//!
//! Enum-valued fields (`status`, `payment_method`) arrive as strings and
//! are matched exhaustively here; the derivation service only ever sees
//! typed values.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::billing::InvoiceService;
use crate::core::ServerState;
use crate::db::models::{
    InvoiceCreate, InvoiceDetail, InvoicePatch, InvoiceStatus, InvoiceUpdate, PaymentMethod,
};
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /api/invoices - all invoices, most recent first
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<InvoiceDetail>>>> {
    let service = InvoiceService::new(state.db.clone());
    let invoices = service.list_invoices().await?;
    Ok(Json(ApiResponse::success(invoices)))
}

/// GET /api/invoices/{id} - single invoice by business key
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<InvoiceDetail>>> {
    let service = InvoiceService::new(state.db.clone());
    let invoice = service
        .get_invoice(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;
    Ok(Json(ApiResponse::success(invoice)))
}

/// POST /api/invoices - derive an invoice from an order
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<InvoiceDetail>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let payment_method: PaymentMethod = payload
        .payment_method
        .parse()
        .map_err(AppError::Validation)?;

    let service = InvoiceService::new(state.db.clone());
    let invoice = service
        .create_invoice(&payload.order_number, payment_method)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(invoice))))
}

/// PUT /api/invoices/{id} - update status and/or payment method
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InvoiceUpdate>,
) -> AppResult<Json<ApiResponse<InvoiceDetail>>> {
    let patch = parse_patch(&payload)?;

    let service = InvoiceService::new(state.db.clone());
    let invoice = service.update_invoice(&id, patch).await?;
    Ok(Json(ApiResponse::success(invoice)))
}

/// DELETE /api/invoices/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let service = InvoiceService::new(state.db.clone());
    service.delete_invoice(&id).await?;
    Ok(Json(ApiResponse::success_message(
        "Invoice deleted successfully",
    )))
}

/// Exhaustively match the string-valued patch into typed enums
fn parse_patch(payload: &InvoiceUpdate) -> Result<InvoicePatch, AppError> {
    let status = match payload.status.as_deref() {
        Some(s) => Some(s.parse::<InvoiceStatus>().map_err(AppError::Validation)?),
        None => None,
    };
    let payment_method = match payload.payment_method.as_deref() {
        Some(s) => Some(s.parse::<PaymentMethod>().map_err(AppError::Validation)?),
        None => None,
    };
    Ok(InvoicePatch {
        status,
        payment_method,
    })
}
