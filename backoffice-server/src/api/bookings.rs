//! Booking API handlers
//!
//! GET   /api/bookings — list, optional status/leadId filters
//! POST  /api/bookings — create (always starts Pending)
//! PATCH /api/bookings — status/payment update, id in body

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};
use shared::models::{BookingCreate, BookingUpdate};

use crate::db;
use crate::error::ServiceResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    #[serde(rename = "leadId")]
    pub lead_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> ServiceResult<Json<Value>> {
    let bookings =
        db::bookings::list(&state.pool, q.status.as_deref(), q.lead_id.as_deref()).await?;
    Ok(Json(json!({ "bookings": bookings })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<BookingCreate>,
) -> ServiceResult<Json<Value>> {
    if req.customer.is_empty()
        || req.email.is_empty()
        || req.package_name.is_empty()
        || req.destination.is_empty()
    {
        return Err(AppError::validation("Missing required fields").into());
    }

    let id = shared::util::new_id();
    let booking = db::bookings::create(&state.pool, &id, &req).await?;
    Ok(Json(json!({ "booking": booking })))
}

pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<BookingUpdate>,
) -> ServiceResult<Json<Value>> {
    if req.id.is_empty() {
        return Err(AppError::validation("Booking ID required").into());
    }

    let booking = db::bookings::update(&state.pool, &req)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;
    Ok(Json(json!({ "booking": booking })))
}
