//! Lead queries

use shared::models::{Lead, LeadCreate, LeadUpdate};
use sqlx::PgPool;

use crate::assignment::AssignmentFields;

pub async fn list(
    pool: &PgPool,
    status: Option<&str>,
    destination: Option<&str>,
) -> Result<Vec<Lead>, sqlx::Error> {
    let mut qb: sqlx::QueryBuilder<'_, sqlx::Postgres> =
        sqlx::QueryBuilder::new("SELECT * FROM leads WHERE TRUE");
    if let Some(status) = status {
        qb.push(" AND status = ").push_bind(status);
    }
    if let Some(destination) = destination {
        qb.push(" AND destination = ").push_bind(destination);
    }
    qb.push(" ORDER BY created_at DESC");

    qb.build_query_as().fetch_all(pool).await
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Lead>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM leads WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, id: &str, data: &LeadCreate) -> Result<Lead, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO leads (id, name, email, phone, destination, travel_date, travelers, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.destination)
    .bind(data.travel_date)
    .bind(data.travelers)
    .bind(&data.notes)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &LeadUpdate,
) -> Result<Option<Lead>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE leads SET
            status = COALESCE($2, status),
            notes = COALESCE($3, notes)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&data.status)
    .bind(&data.notes)
    .fetch_optional(pool)
    .await
}

/// The authoritative assignment write: one row, one field-set, no version
/// check — two racing assignments resolve last-writer-wins. The updated
/// row is returned as the result of the call.
pub async fn record_assignment(
    pool: &PgPool,
    lead_id: &str,
    fields: &AssignmentFields,
) -> Result<Option<Lead>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE leads SET
            assigned_employee_id = $2,
            assigned_employee_name = $3,
            assigned_employee_email = $4,
            assigned_at = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(lead_id)
    .bind(&fields.employee_id)
    .bind(&fields.employee_name)
    .bind(&fields.employee_email)
    .bind(fields.assigned_at)
    .fetch_optional(pool)
    .await
}
