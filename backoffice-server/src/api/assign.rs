//! Lead assignment endpoint
//!
//! POST /api/leads/assign
//! Body: { leadId, employeeId, employeeName?, employeeEmail? }

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::assignment::AssignmentRequest;
use crate::error::ServiceResult;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignLeadRequest {
    #[serde(default)]
    pub lead_id: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_email: Option<String>,
}

pub async fn assign_lead(
    State(state): State<AppState>,
    Json(req): Json<AssignLeadRequest>,
) -> ServiceResult<Json<Value>> {
    let lead = state
        .assignments
        .assign(AssignmentRequest {
            lead_id: req.lead_id,
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            employee_email: req.employee_email,
        })
        .await?;
    Ok(Json(json!({ "lead": lead })))
}
