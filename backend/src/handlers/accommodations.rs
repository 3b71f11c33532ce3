//! Accommodation HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::AccommodationService;
use crate::AppState;
use shared::models::{CreateAccommodationInput, UpdateAccommodationInput};
use shared::types::Pagination;

/// List accommodations
pub async fn list_accommodations(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = AccommodationService::new(state.db.clone());

    match service.list(&pagination).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get an accommodation by id
pub async fn get_accommodation(
    State(state): State<AppState>,
    Path(accommodation_id): Path<i64>,
) -> impl IntoResponse {
    let service = AccommodationService::new(state.db.clone());

    match service.get(accommodation_id).await {
        Ok(accommodation) => (StatusCode::OK, Json(accommodation)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create an accommodation
pub async fn create_accommodation(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(input): Json<CreateAccommodationInput>,
) -> impl IntoResponse {
    let service = AccommodationService::new(state.db.clone());

    match service.create(admin.0.admin_id, input).await {
        Ok(accommodation) => {
            state.storefront.invalidate(&[tags::ACCOMMODATIONS]).await;
            (StatusCode::CREATED, Json(accommodation)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Update an accommodation
pub async fn update_accommodation(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(accommodation_id): Path<i64>,
    Json(input): Json<UpdateAccommodationInput>,
) -> impl IntoResponse {
    let service = AccommodationService::new(state.db.clone());

    match service
        .update(admin.0.admin_id, accommodation_id, input)
        .await
    {
        Ok(accommodation) => {
            state.storefront.invalidate(&[tags::ACCOMMODATIONS]).await;
            (StatusCode::OK, Json(accommodation)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Soft-delete an accommodation
pub async fn delete_accommodation(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(accommodation_id): Path<i64>,
) -> impl IntoResponse {
    let service = AccommodationService::new(state.db.clone());

    match service.delete(admin.0.admin_id, accommodation_id).await {
        Ok(()) => {
            state.storefront.invalidate(&[tags::ACCOMMODATIONS]).await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
