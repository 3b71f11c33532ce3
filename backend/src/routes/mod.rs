//! Route definitions for the Vinoteca admin API

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Protected routes - order lifecycle
        .nest("/orders", order_routes())
        // Protected routes - payments
        .nest("/payments", payment_routes())
        // Protected routes - tasting catalog and stock allocation
        .nest("/tastings", tasting_routes())
        // Protected routes - wine catalog
        .nest("/wines", wine_routes())
        // Protected routes - wine stock movement ledger
        .nest("/stock-movements", stock_movement_routes())
        // Protected routes - customers
        .nest("/customers", customer_routes())
        // Protected routes - accommodations
        .nest("/accommodations", accommodation_routes())
        // Protected routes - contact submissions
        .nest("/contacts", contact_routes())
        // Protected routes - delivery schedules
        .nest("/delivery-schedules", delivery_schedule_routes())
        // Protected routes - payment methods
        .nest("/payment-methods", payment_method_routes())
        // Protected routes - FAQs
        .nest("/faqs", faq_routes())
        // Protected routes - site settings
        .nest("/settings", setting_routes())
}

/// Order lifecycle routes (protected)
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders))
        .route("/:order_id", get(handlers::get_order))
        .route("/:order_id/status", put(handlers::transition_order))
        .route("/:order_id/deliver", post(handlers::deliver_order))
        .route("/:order_id/cancel", post(handlers::cancel_order))
        .route("/:order_id/payment", get(handlers::get_order_payment))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Payment routes (protected)
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/:payment_id", get(handlers::get_payment))
        .route("/:payment_id/status", put(handlers::update_payment_status))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Tasting catalog routes (protected)
fn tasting_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_tastings).post(handlers::create_tasting),
        )
        .route(
            "/:tasting_id",
            get(handlers::get_tasting)
                .put(handlers::update_tasting)
                .delete(handlers::delete_tasting),
        )
        .route("/:tasting_id/stock", put(handlers::set_tasting_stock))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Wine catalog routes (protected)
fn wine_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_wines).post(handlers::create_wine))
        .route(
            "/:wine_id",
            get(handlers::get_wine)
                .put(handlers::update_wine)
                .delete(handlers::delete_wine),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Wine stock movement routes (protected)
fn stock_movement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_stock_movements).post(handlers::record_stock_movement),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Customer management routes (protected)
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/:customer_id",
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Accommodation routes (protected)
fn accommodation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_accommodations).post(handlers::create_accommodation),
        )
        .route(
            "/:accommodation_id",
            get(handlers::get_accommodation)
                .put(handlers::update_accommodation)
                .delete(handlers::delete_accommodation),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Contact submission routes (protected)
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_contacts))
        .route(
            "/:contact_id",
            get(handlers::get_contact).delete(handlers::delete_contact),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Delivery schedule routes (protected)
fn delivery_schedule_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_delivery_schedules).post(handlers::create_delivery_schedule),
        )
        .route(
            "/:schedule_id",
            get(handlers::get_delivery_schedule)
                .put(handlers::update_delivery_schedule)
                .delete(handlers::delete_delivery_schedule),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Payment method routes (protected)
fn payment_method_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_payment_methods).post(handlers::create_payment_method),
        )
        .route(
            "/:method_id",
            get(handlers::get_payment_method)
                .put(handlers::update_payment_method)
                .delete(handlers::delete_payment_method),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// FAQ routes (protected)
fn faq_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_faqs).post(handlers::create_faq))
        .route(
            "/:faq_id",
            get(handlers::get_faq)
                .put(handlers::update_faq)
                .delete(handlers::delete_faq),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Site settings routes (protected)
fn setting_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_settings))
        .route(
            "/:key",
            get(handlers::get_setting).put(handlers::upsert_setting),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}
