//! Order management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::orders::{OrderListFilter, OrderService};
use crate::services::PaymentService;
use crate::AppState;
use shared::models::{CancelOrderInput, TransitionOrderInput};
use shared::types::Pagination;

/// List orders with optional status and customer filters
pub async fn list_orders(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<OrderListFilter>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.list(&pagination, &filter).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get an order with its tasting lines
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.get(order_id).await {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get the payment attached to an order
pub async fn get_order_payment(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> impl IntoResponse {
    let service = PaymentService::new(state.db.clone());

    match service.get_by_order(order_id).await {
        Ok(payment) => (StatusCode::OK, Json(payment)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Move an order forward through its lifecycle
pub async fn transition_order(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(order_id): Path<i64>,
    Json(input): Json<TransitionOrderInput>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service
        .transition(order_id, input.status, admin.0.admin_id)
        .await
    {
        Ok(order) => {
            state.storefront.invalidate(&[tags::ORDERS]).await;
            (StatusCode::OK, Json(order)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Confirm payment and mark an order delivered in one step
pub async fn deliver_order(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(order_id): Path<i64>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service
        .confirm_payment_and_deliver(order_id, admin.0.admin_id)
        .await
    {
        Ok(order) => {
            state.storefront.invalidate(&[tags::ORDERS]).await;
            (StatusCode::OK, Json(order)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Cancel an order, returning its stock to tastings and wines
pub async fn cancel_order(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(order_id): Path<i64>,
    Json(input): Json<CancelOrderInput>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service
        .cancel(order_id, admin.0.admin_id, input.refund_confirmed)
        .await
    {
        Ok(order) => {
            state
                .storefront
                .invalidate(&[tags::ORDERS, tags::TASTINGS, tags::WINES])
                .await;
            (StatusCode::OK, Json(order)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
