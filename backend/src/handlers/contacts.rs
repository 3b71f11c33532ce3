//! Contact submission HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::services::ContactService;
use crate::AppState;
use shared::types::Pagination;

/// List contact-form submissions, newest first
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = ContactService::new(state.db.clone());

    match service.list(&pagination).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a contact submission by id
pub async fn get_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> impl IntoResponse {
    let service = ContactService::new(state.db.clone());

    match service.get(contact_id).await {
        Ok(contact) => (StatusCode::OK, Json(contact)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Permanently delete a contact submission
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> impl IntoResponse {
    let service = ContactService::new(state.db.clone());

    match service.delete(contact_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
