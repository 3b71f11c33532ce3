//! Site settings HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::SettingService;
use crate::AppState;
use shared::models::UpsertSettingInput;

/// List all settings
pub async fn list_settings(State(state): State<AppState>) -> impl IntoResponse {
    let service = SettingService::new(state.db.clone());

    match service.list().await {
        Ok(settings) => (StatusCode::OK, Json(settings)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a setting by key
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let service = SettingService::new(state.db.clone());

    match service.get(&key).await {
        Ok(setting) => (StatusCode::OK, Json(setting)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create or replace a setting's value
pub async fn upsert_setting(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(key): Path<String>,
    Json(input): Json<UpsertSettingInput>,
) -> impl IntoResponse {
    let service = SettingService::new(state.db.clone());

    match service.upsert(admin.0.admin_id, &key, input).await {
        Ok(setting) => {
            state.storefront.invalidate(&[tags::SETTINGS]).await;
            (StatusCode::OK, Json(setting)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
