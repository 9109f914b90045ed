//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{OrderCreate, OrderDetail, OrderUpdate};
use crate::db::repository::OrderRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /api/orders - all orders, most recent first
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<OrderDetail>>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all().await?;
    Ok(Json(ApiResponse::success(orders)))
}

/// GET /api/orders/{id} - single order by business key
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_detail_by_number(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
    Ok(Json(ApiResponse::success(order)))
}

/// POST /api/orders - create an order against an existing product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderDetail>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(order))))
}

/// PUT /api/orders/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update(&id, payload).await?;
    Ok(Json(ApiResponse::success(order)))
}

/// DELETE /api/orders/{id} - delete the order and its invoices
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = OrderRepository::new(state.db.clone());
    repo.delete_cascade(&id).await?;
    Ok(Json(ApiResponse::success_message(
        "Order and associated invoices deleted",
    )))
}
