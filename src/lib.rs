// src/lib.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;

use crate::config::AppState;
use crate::middleware::identity::identity_guard;

// Monta o router completo da aplicação. Tudo abaixo de /api (exceto o
// health check) exige o cabeçalho X-User-Id válido.
pub fn app(app_state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/me", get(handlers::auth::me))
        .route("/users", get(handlers::auth::list_users));

    let order_routes = Router::new()
        .route(
            "/",
            post(handlers::orders::create_order).get(handlers::orders::list_orders),
        )
        .route("/summary", get(handlers::orders::orders_summary))
        .route("/{order_id}/approve", post(handlers::orders::approve_order))
        .route("/{order_id}/reject", post(handlers::orders::reject_order));

    let shipment_routes = Router::new().route(
        "/",
        post(handlers::orders::create_shipment).get(handlers::orders::list_shipments),
    );

    let catalog_routes = Router::new()
        .route(
            "/products",
            post(handlers::catalog::create_product).get(handlers::catalog::list_products),
        )
        .route("/barcode/{barcode}", get(handlers::catalog::lookup_barcode));

    let inventory_routes = Router::new()
        .route("/central", get(handlers::inventory::central_report))
        .route("/branches", get(handlers::inventory::branch_report))
        .route(
            "/branches/summary",
            get(handlers::inventory::branches_summary),
        )
        .route("/receiving", post(handlers::inventory::confirm_receipt));

    let purchase_routes = Router::new()
        .route(
            "/",
            post(handlers::purchases::register_purchase).get(handlers::purchases::list_purchases),
        )
        .route("/summary", get(handlers::purchases::purchases_summary));

    let consumption_routes = Router::new()
        .route(
            "/",
            post(handlers::consumption::register_consumption)
                .get(handlers::consumption::list_consumptions),
        )
        .route("/summary", get(handlers::consumption::consumption_summary));

    let fleet_routes = Router::new()
        .route("/vehicles", get(handlers::fleet::list_vehicles))
        .route("/boats", get(handlers::fleet::list_boats))
        .route(
            "/refuelings",
            post(handlers::fleet::register_refueling).get(handlers::fleet::list_refuelings),
        )
        .route(
            "/boat-refuelings",
            post(handlers::fleet::register_boat_refueling)
                .get(handlers::fleet::list_boat_refuelings),
        )
        .route("/summary", get(handlers::fleet::fleet_summary));

    let protected_routes = Router::new()
        .nest("/api/auth", auth_routes)
        .route("/api/branches", get(handlers::auth::list_branches))
        .nest("/api/orders", order_routes)
        .nest("/api/shipments", shipment_routes)
        .nest("/api/catalog", catalog_routes)
        .nest("/api/inventory", inventory_routes)
        .nest("/api/purchases", purchase_routes)
        .nest("/api/consumption", consumption_routes)
        .nest("/api/fleet", fleet_routes)
        .route("/api/audit", get(handlers::audit::list_audit))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            identity_guard,
        ));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .merge(protected_routes)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state)
}
