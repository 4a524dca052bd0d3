//! API routes for backoffice-server

pub mod assign;
pub mod bookings;
pub mod destinations;
pub mod employees;
pub mod health;
pub mod leads;
pub mod packages;

use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Lead capture + assignment
    let leads = Router::new()
        .route("/api/leads", get(leads::list).post(leads::create))
        .route("/api/leads/{id}", get(leads::get).patch(leads::update))
        .route("/api/leads/assign", post(assign::assign_lead));

    // Staff management
    let employees = Router::new()
        .route("/api/employees", get(employees::list).post(employees::create))
        .route(
            "/api/employees/{id}",
            patch(employees::update).delete(employees::remove),
        );

    // Bookings
    let bookings = Router::new().route(
        "/api/bookings",
        get(bookings::list)
            .post(bookings::create)
            .patch(bookings::update),
    );

    // Catalog
    let catalog = Router::new()
        .route("/api/packages", get(packages::list).post(packages::create))
        .route("/api/packages/city/{city}", get(packages::by_city))
        .route("/api/destinations", get(destinations::list));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(leads)
        .merge(employees)
        .merge(bookings)
        .merge(catalog)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
