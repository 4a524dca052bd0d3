//! Booking queries

use shared::models::{Booking, BookingCreate, BookingUpdate};
use sqlx::PgPool;

pub async fn list(
    pool: &PgPool,
    status: Option<&str>,
    lead_id: Option<&str>,
) -> Result<Vec<Booking>, sqlx::Error> {
    let mut qb: sqlx::QueryBuilder<'_, sqlx::Postgres> =
        sqlx::QueryBuilder::new("SELECT * FROM bookings WHERE TRUE");
    if let Some(status) = status {
        qb.push(" AND status = ").push_bind(status);
    }
    if let Some(lead_id) = lead_id {
        qb.push(" AND lead_id = ").push_bind(lead_id);
    }
    qb.push(" ORDER BY created_at DESC");

    qb.build_query_as().fetch_all(pool).await
}

pub async fn create(pool: &PgPool, id: &str, data: &BookingCreate) -> Result<Booking, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO bookings (
            id, lead_id, customer, email, phone, package_id, package_name,
            destination, travelers, amount, travel_date, assigned_agent,
            itinerary_details, razorpay_order_id, razorpay_payment_link
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&data.lead_id)
    .bind(&data.customer)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.package_id)
    .bind(&data.package_name)
    .bind(&data.destination)
    .bind(data.travelers)
    .bind(data.amount)
    .bind(data.travel_date)
    .bind(&data.assigned_agent)
    .bind(&data.itinerary_details)
    .bind(&data.razorpay_order_id)
    .bind(&data.razorpay_payment_link)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, data: &BookingUpdate) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE bookings SET
            status = COALESCE($2, status),
            payment_status = COALESCE($3, payment_status),
            razorpay_payment_id = COALESCE($4, razorpay_payment_id),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(&data.id)
    .bind(&data.status)
    .bind(&data.payment_status)
    .bind(&data.razorpay_payment_id)
    .fetch_optional(pool)
    .await
}
