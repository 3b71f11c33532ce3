//! Delivery schedule HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::DeliveryScheduleService;
use crate::AppState;
use shared::models::{CreateDeliveryScheduleInput, UpdateDeliveryScheduleInput};
use shared::types::Pagination;

/// List delivery schedules in calendar order
pub async fn list_delivery_schedules(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = DeliveryScheduleService::new(state.db.clone());

    match service.list(&pagination).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a delivery schedule by id
pub async fn get_delivery_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<i64>,
) -> impl IntoResponse {
    let service = DeliveryScheduleService::new(state.db.clone());

    match service.get(schedule_id).await {
        Ok(schedule) => (StatusCode::OK, Json(schedule)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a delivery schedule
pub async fn create_delivery_schedule(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(input): Json<CreateDeliveryScheduleInput>,
) -> impl IntoResponse {
    let service = DeliveryScheduleService::new(state.db.clone());

    match service.create(admin.0.admin_id, input).await {
        Ok(schedule) => {
            state
                .storefront
                .invalidate(&[tags::DELIVERY_SCHEDULES])
                .await;
            (StatusCode::CREATED, Json(schedule)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Update a delivery schedule
pub async fn update_delivery_schedule(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(schedule_id): Path<i64>,
    Json(input): Json<UpdateDeliveryScheduleInput>,
) -> impl IntoResponse {
    let service = DeliveryScheduleService::new(state.db.clone());

    match service.update(admin.0.admin_id, schedule_id, input).await {
        Ok(schedule) => {
            state
                .storefront
                .invalidate(&[tags::DELIVERY_SCHEDULES])
                .await;
            (StatusCode::OK, Json(schedule)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Soft-delete a delivery schedule
pub async fn delete_delivery_schedule(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(schedule_id): Path<i64>,
) -> impl IntoResponse {
    let service = DeliveryScheduleService::new(state.db.clone());

    match service.delete(admin.0.admin_id, schedule_id).await {
        Ok(()) => {
            state
                .storefront
                .invalidate(&[tags::DELIVERY_SCHEDULES])
                .await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
