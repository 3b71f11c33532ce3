//! Payment HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::PaymentService;
use crate::AppState;
use shared::models::UpdatePaymentStatusInput;

/// Get a payment by id
pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<i64>,
) -> impl IntoResponse {
    let service = PaymentService::new(state.db.clone());

    match service.get(payment_id).await {
        Ok(payment) => (StatusCode::OK, Json(payment)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Set a payment's status
pub async fn update_payment_status(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(payment_id): Path<i64>,
    Json(input): Json<UpdatePaymentStatusInput>,
) -> impl IntoResponse {
    let service = PaymentService::new(state.db.clone());

    match service
        .set_status(admin.0.admin_id, payment_id, input.status)
        .await
    {
        Ok(payment) => {
            state.storefront.invalidate(&[tags::ORDERS]).await;
            (StatusCode::OK, Json(payment)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
