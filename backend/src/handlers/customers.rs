//! Customer management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::middleware::CurrentAdmin;
use crate::services::customers::{CustomerListFilter, CustomerService};
use crate::AppState;
use shared::models::{CreateCustomerInput, UpdateCustomerInput};
use shared::types::Pagination;

/// List customers
pub async fn list_customers(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<CustomerListFilter>,
) -> impl IntoResponse {
    let service = CustomerService::new(state.db.clone());

    match service.list(&pagination, &filter).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a customer by id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> impl IntoResponse {
    let service = CustomerService::new(state.db.clone());

    match service.get(customer_id).await {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a customer
pub async fn create_customer(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(input): Json<CreateCustomerInput>,
) -> impl IntoResponse {
    let service = CustomerService::new(state.db.clone());

    match service.create(admin.0.admin_id, input).await {
        Ok(customer) => (StatusCode::CREATED, Json(customer)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a customer
pub async fn update_customer(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(customer_id): Path<i64>,
    Json(input): Json<UpdateCustomerInput>,
) -> impl IntoResponse {
    let service = CustomerService::new(state.db.clone());

    match service.update(admin.0.admin_id, customer_id, input).await {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Soft-delete a customer
pub async fn delete_customer(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(customer_id): Path<i64>,
) -> impl IntoResponse {
    let service = CustomerService::new(state.db.clone());

    match service.delete(admin.0.admin_id, customer_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
