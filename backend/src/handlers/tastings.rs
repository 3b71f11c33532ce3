//! Tasting management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::tastings::{TastingListFilter, TastingService};
use crate::AppState;
use shared::models::{CreateTastingInput, SetTastingStockInput, UpdateTastingInput};
use shared::types::Pagination;

/// List tastings
pub async fn list_tastings(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<TastingListFilter>,
) -> impl IntoResponse {
    let service = TastingService::new(state.db.clone());

    match service.list(&pagination, &filter).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a tasting with its composing wines
pub async fn get_tasting(
    State(state): State<AppState>,
    Path(tasting_id): Path<i64>,
) -> impl IntoResponse {
    let service = TastingService::new(state.db.clone());

    match service.get(tasting_id).await {
        Ok(tasting) => (StatusCode::OK, Json(tasting)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a tasting
pub async fn create_tasting(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(input): Json<CreateTastingInput>,
) -> impl IntoResponse {
    let service = TastingService::new(state.db.clone());

    match service.create(admin.0.admin_id, input).await {
        Ok(tasting) => {
            state.storefront.invalidate(&[tags::TASTINGS]).await;
            (StatusCode::CREATED, Json(tasting)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Update a tasting's descriptive fields
pub async fn update_tasting(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(tasting_id): Path<i64>,
    Json(input): Json<UpdateTastingInput>,
) -> impl IntoResponse {
    let service = TastingService::new(state.db.clone());

    match service.update(admin.0.admin_id, tasting_id, input).await {
        Ok(tasting) => {
            state.storefront.invalidate(&[tags::TASTINGS]).await;
            (StatusCode::OK, Json(tasting)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Set a tasting's available stock, adjusting the composing wines
pub async fn set_tasting_stock(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(tasting_id): Path<i64>,
    Json(input): Json<SetTastingStockInput>,
) -> impl IntoResponse {
    let service = TastingService::new(state.db.clone());

    match service
        .set_stock(admin.0.admin_id, tasting_id, input.stock)
        .await
    {
        Ok(tasting) => {
            state
                .storefront
                .invalidate(&[tags::TASTINGS, tags::WINES])
                .await;
            (StatusCode::OK, Json(tasting)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Soft-delete a tasting, releasing its reserved wine stock
pub async fn delete_tasting(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(tasting_id): Path<i64>,
) -> impl IntoResponse {
    let service = TastingService::new(state.db.clone());

    match service.delete(admin.0.admin_id, tasting_id).await {
        Ok(()) => {
            state
                .storefront
                .invalidate(&[tags::TASTINGS, tags::WINES])
                .await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
