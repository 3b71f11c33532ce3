//! Wine stock movement ledger HTTP handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::external::storefront::tags;
use crate::middleware::CurrentAdmin;
use crate::services::stock_movements::{MovementListFilter, StockMovementService};
use crate::AppState;
use shared::models::RecordMovementInput;
use shared::types::Pagination;

/// List recorded movements, newest first
pub async fn list_stock_movements(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<MovementListFilter>,
) -> impl IntoResponse {
    let service = StockMovementService::new(state.db.clone());

    match service.list(&pagination, &filter).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Record a manual entry or outgoing movement for a wine
pub async fn record_stock_movement(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(input): Json<RecordMovementInput>,
) -> impl IntoResponse {
    let service = StockMovementService::new(state.db.clone());

    match service.record(admin.0.admin_id, input).await {
        Ok(movement) => {
            state.storefront.invalidate(&[tags::WINES]).await;
            (StatusCode::CREATED, Json(movement)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
