//! Wine catalog HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::wines::{WineListFilter, WineService};
use crate::AppState;
use shared::models::{CreateWineInput, UpdateWineInput};
use shared::types::Pagination;

/// List wines
pub async fn list_wines(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<WineListFilter>,
) -> impl IntoResponse {
    let service = WineService::new(state.db.clone());

    match service.list(&pagination, &filter).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a wine by id
pub async fn get_wine(
    State(state): State<AppState>,
    Path(wine_id): Path<i64>,
) -> impl IntoResponse {
    let service = WineService::new(state.db.clone());

    match service.get(wine_id).await {
        Ok(wine) => (StatusCode::OK, Json(wine)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a wine
pub async fn create_wine(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(input): Json<CreateWineInput>,
) -> impl IntoResponse {
    let service = WineService::new(state.db.clone());

    match service.create(admin.0.admin_id, input).await {
        Ok(wine) => {
            state.storefront.invalidate(&[tags::WINES]).await;
            (StatusCode::CREATED, Json(wine)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Update a wine
pub async fn update_wine(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(wine_id): Path<i64>,
    Json(input): Json<UpdateWineInput>,
) -> impl IntoResponse {
    let service = WineService::new(state.db.clone());

    match service.update(admin.0.admin_id, wine_id, input).await {
        Ok(wine) => {
            state.storefront.invalidate(&[tags::WINES]).await;
            (StatusCode::OK, Json(wine)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Soft-delete a wine that no active tasting uses
pub async fn delete_wine(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(wine_id): Path<i64>,
) -> impl IntoResponse {
    let service = WineService::new(state.db.clone());

    match service.delete(admin.0.admin_id, wine_id).await {
        Ok(()) => {
            state.storefront.invalidate(&[tags::WINES]).await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
