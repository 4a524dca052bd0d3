//! Employee API handlers
//!
//! POST creates the employee row first (the source of truth), then makes
//! two best-effort outbound calls: auth-provider user creation and the
//! credentials email. Neither failure rolls the insert back; both are
//! logged and the employee row is kept.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};
use shared::models::{EmployeeCreate, EmployeeUpdate};

use crate::db;
use crate::error::ServiceResult;
use crate::notify::CredentialsNotice;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub destination: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> ServiceResult<Json<Value>> {
    // destination=all means no filter
    let destination = q.destination.as_deref().filter(|d| *d != "all");
    let employees = db::employees::list(&state.pool, destination).await?;
    Ok(Json(json!({ "employees": employees })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<EmployeeCreate>,
) -> ServiceResult<Json<Value>> {
    if req.name.is_empty()
        || req.email.is_empty()
        || req.phone.is_empty()
        || req.destination.is_empty()
        || req.password.is_empty()
    {
        return Err(AppError::validation(
            "name, email, phone, destination and password are required",
        )
        .into());
    }

    let mut req = req;
    req.email = req.email.trim().to_lowercase();

    let id = shared::util::new_id();
    let mut employee = match db::employees::create(&state.pool, &id, &req).await {
        Ok(employee) => employee,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::with_message(
                ErrorCode::EmployeeExists,
                "Employee with this email or phone already exists",
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    // Best-effort: create the auth user and back-fill its id.
    match state
        .auth
        .create_user(&req.email, &req.password, &req.name, &employee.id)
        .await
    {
        Ok(user_id) => {
            if let Err(e) = db::employees::set_auth_user(&state.pool, &employee.id, &user_id).await
            {
                tracing::warn!(employee = %employee.id, error = %e, "Failed to back-fill auth user id");
            } else {
                employee.auth_user_id = Some(user_id);
            }
        }
        Err(e) => {
            tracing::warn!(employee = %employee.id, error = %e, "Auth user creation failed; employee row kept");
        }
    }

    // Best-effort: email the new employee their credentials.
    let notice = CredentialsNotice {
        name: employee.name.clone(),
        email: employee.email.clone(),
        password: req.password.clone(),
        role: employee.role.clone(),
        destination: employee.destination.clone(),
    };
    if let Err(e) = state.notifier.send_credentials(&notice).await {
        tracing::warn!(to = %notice.email, error = %e, "Failed to send credentials email");
    }

    Ok(Json(json!({ "employee": employee })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<EmployeeUpdate>,
) -> ServiceResult<Json<Value>> {
    let employee = db::employees::update(&state.pool, &id, &req)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    Ok(Json(json!({ "employee": employee })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServiceResult<Json<Value>> {
    let deleted = db::employees::delete(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::EmployeeNotFound).into());
    }
    Ok(Json(json!({ "ok": true })))
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}
