//! FAQ HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::FaqService;
use crate::AppState;
use shared::models::{CreateFaqInput, UpdateFaqInput};
use shared::types::Pagination;

/// List FAQs in display order
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = FaqService::new(state.db.clone());

    match service.list(&pagination).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a FAQ by id
pub async fn get_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<i64>,
) -> impl IntoResponse {
    let service = FaqService::new(state.db.clone());

    match service.get(faq_id).await {
        Ok(faq) => (StatusCode::OK, Json(faq)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a FAQ
pub async fn create_faq(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(input): Json<CreateFaqInput>,
) -> impl IntoResponse {
    let service = FaqService::new(state.db.clone());

    match service.create(admin.0.admin_id, input).await {
        Ok(faq) => {
            state.storefront.invalidate(&[tags::FAQS]).await;
            (StatusCode::CREATED, Json(faq)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Update a FAQ
pub async fn update_faq(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(faq_id): Path<i64>,
    Json(input): Json<UpdateFaqInput>,
) -> impl IntoResponse {
    let service = FaqService::new(state.db.clone());

    match service.update(admin.0.admin_id, faq_id, input).await {
        Ok(faq) => {
            state.storefront.invalidate(&[tags::FAQS]).await;
            (StatusCode::OK, Json(faq)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Soft-delete a FAQ
pub async fn delete_faq(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(faq_id): Path<i64>,
) -> impl IntoResponse {
    let service = FaqService::new(state.db.clone());

    match service.delete(admin.0.admin_id, faq_id).await {
        Ok(()) => {
            state.storefront.invalidate(&[tags::FAQS]).await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
