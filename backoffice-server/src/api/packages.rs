//! Travel package API handlers
//!
//! GET  /api/packages             — list, newest first
//! POST /api/packages             — create
//! GET  /api/packages/city/{city} — route match with destination fallback

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use shared::error::AppError;
use shared::models::TravelPackageCreate;

use crate::db;
use crate::error::ServiceResult;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ServiceResult<Json<Value>> {
    let packages = db::packages::list(&state.pool).await?;
    Ok(Json(json!({ "packages": packages })))
}

pub async fn by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> ServiceResult<Json<Value>> {
    let packages = db::packages::list_by_city(&state.pool, &city).await?;
    Ok(Json(json!({ "packages": packages })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<TravelPackageCreate>,
) -> ServiceResult<Json<Value>> {
    if req.name.is_empty() || req.destination.is_empty() {
        return Err(AppError::validation("name and destination are required").into());
    }

    let id = shared::util::new_id();
    let package = db::packages::create(&state.pool, &id, &req).await?;
    Ok(Json(json!({ "package": package })))
}
