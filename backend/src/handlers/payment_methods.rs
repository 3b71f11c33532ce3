//! Payment method HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::PaymentMethodService;
use crate::AppState;
use shared::models::{CreatePaymentMethodInput, UpdatePaymentMethodInput};
use shared::types::Pagination;

/// List payment methods
pub async fn list_payment_methods(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = PaymentMethodService::new(state.db.clone());

    match service.list(&pagination).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a payment method by id
pub async fn get_payment_method(
    State(state): State<AppState>,
    Path(method_id): Path<i64>,
) -> impl IntoResponse {
    let service = PaymentMethodService::new(state.db.clone());

    match service.get(method_id).await {
        Ok(method) => (StatusCode::OK, Json(method)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a payment method
pub async fn create_payment_method(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(input): Json<CreatePaymentMethodInput>,
) -> impl IntoResponse {
    let service = PaymentMethodService::new(state.db.clone());

    match service.create(admin.0.admin_id, input).await {
        Ok(method) => {
            state.storefront.invalidate(&[tags::PAYMENT_METHODS]).await;
            (StatusCode::CREATED, Json(method)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Update a payment method
pub async fn update_payment_method(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(method_id): Path<i64>,
    Json(input): Json<UpdatePaymentMethodInput>,
) -> impl IntoResponse {
    let service = PaymentMethodService::new(state.db.clone());

    match service.update(admin.0.admin_id, method_id, input).await {
        Ok(method) => {
            state.storefront.invalidate(&[tags::PAYMENT_METHODS]).await;
            (StatusCode::OK, Json(method)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Soft-delete a payment method
pub async fn delete_payment_method(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(method_id): Path<i64>,
) -> impl IntoResponse {
    let service = PaymentMethodService::new(state.db.clone());

    match service.delete(admin.0.admin_id, method_id).await {
        Ok(()) => {
            state.storefront.invalidate(&[tags::PAYMENT_METHODS]).await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
