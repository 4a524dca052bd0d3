//! Travel package queries

use shared::models::{TravelPackage, TravelPackageCreate};
use sqlx::PgPool;

pub async fn list(pool: &PgPool) -> Result<Vec<TravelPackage>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM packages ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Exact match on `route` (the stored location) first; if that yields
/// nothing, fall back to a destination ILIKE pattern for older rows.
pub async fn list_by_city(pool: &PgPool, city: &str) -> Result<Vec<TravelPackage>, sqlx::Error> {
    let by_route: Vec<TravelPackage> =
        sqlx::query_as("SELECT * FROM packages WHERE route = $1 ORDER BY created_at DESC")
            .bind(city)
            .fetch_all(pool)
            .await?;
    if !by_route.is_empty() {
        return Ok(by_route);
    }

    let pattern = format!("%{city}%");
    sqlx::query_as("SELECT * FROM packages WHERE destination ILIKE $1 ORDER BY created_at DESC")
        .bind(&pattern)
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    id: &str,
    data: &TravelPackageCreate,
) -> Result<TravelPackage, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO packages (id, name, destination, route, duration_days, price, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.destination)
    .bind(&data.route)
    .bind(data.duration_days)
    .bind(data.price)
    .bind(&data.description)
    .fetch_one(pool)
    .await
}
