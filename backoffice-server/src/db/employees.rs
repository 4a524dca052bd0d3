//! Employee queries

use shared::models::{Employee, EmployeeContact, EmployeeCreate, EmployeeUpdate};
use sqlx::PgPool;

pub async fn list(pool: &PgPool, destination: Option<&str>) -> Result<Vec<Employee>, sqlx::Error> {
    let mut qb: sqlx::QueryBuilder<'_, sqlx::Postgres> =
        sqlx::QueryBuilder::new("SELECT * FROM employees WHERE TRUE");
    if let Some(destination) = destination {
        qb.push(" AND destination = ").push_bind(destination);
    }
    qb.push(" ORDER BY name ASC");

    qb.build_query_as().fetch_all(pool).await
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Contact projection read by the assignment flow
pub async fn find_contact(pool: &PgPool, id: &str) -> Result<Option<EmployeeContact>, sqlx::Error> {
    sqlx::query_as("SELECT name, phone, email FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, id: &str, data: &EmployeeCreate) -> Result<Employee, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO employees (id, name, email, phone, destination, role)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.destination)
    .bind(&data.role)
    .fetch_one(pool)
    .await
}

/// Back-fill the auth provider's user id after user creation succeeds
pub async fn set_auth_user(pool: &PgPool, id: &str, auth_user_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE employees SET auth_user_id = $1 WHERE id = $2")
        .bind(auth_user_id)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &EmployeeUpdate,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE employees SET
            name = COALESCE($2, name),
            phone = COALESCE($3, phone),
            destination = COALESCE($4, destination),
            role = COALESCE($5, role),
            status = COALESCE($6, status)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.phone)
    .bind(&data.destination)
    .bind(&data.role)
    .bind(&data.status)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
