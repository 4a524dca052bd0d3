//! Lead API handlers
//!
//! GET   /api/leads        — list, optional status/destination filters
//! POST  /api/leads        — create a lead
//! GET   /api/leads/{id}   — point read
//! PATCH /api/leads/{id}   — lifecycle update (status, notes)

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};
use shared::models::{LeadCreate, LeadUpdate};

use crate::db;
use crate::error::ServiceResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub destination: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> ServiceResult<Json<Value>> {
    let leads = db::leads::list(&state.pool, q.status.as_deref(), q.destination.as_deref()).await?;
    Ok(Json(json!({ "leads": leads })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServiceResult<Json<Value>> {
    let lead = db::leads::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::LeadNotFound))?;
    Ok(Json(json!({ "lead": lead })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<LeadCreate>,
) -> ServiceResult<Json<Value>> {
    if req.name.is_empty() || req.email.is_empty() || req.destination.is_empty() {
        return Err(AppError::validation("name, email and destination are required").into());
    }

    let id = shared::util::new_id();
    let lead = db::leads::create(&state.pool, &id, &req).await?;
    Ok(Json(json!({ "lead": lead })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<LeadUpdate>,
) -> ServiceResult<Json<Value>> {
    let lead = db::leads::update(&state.pool, &id, &req)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::LeadNotFound))?;
    Ok(Json(json!({ "lead": lead })))
}
