//! Durable booking store: collaborator contract and Postgres implementation

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingRow},
        enums::BookingStatus,
    },
};

/// Durable booking store contract.
///
/// `create` is the primary write of the reconciliation engine: it is the only
/// step whose failure triggers rollback of the optimistic local mutation.
/// `list` seeds and refreshes the local mirror.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn create(&self, booking: &Booking) -> AppResult<()>;
    async fn list(&self) -> AppResult<Vec<Booking>>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Booking>>;
    async fn set_status(&self, id: Uuid, status: BookingStatus) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgBookingStore {
    pool: Pool<Postgres>,
}

impl PgBookingStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn create(&self, booking: &Booking) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, resource_type, package_id, title, details,
                travel_date, guest_spec, status, customer_name, crea_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(booking.id)
        .bind(i16::from(booking.resource_type))
        .bind(&booking.package_id)
        .bind(&booking.title)
        .bind(&booking.details)
        .bind(booking.date)
        .bind(&booking.guest_spec)
        .bind(i16::from(booking.status))
        .bind(&booking.customer_name)
        .bind(booking.crea_date)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT * FROM bookings ORDER BY travel_date, crea_date",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Booking::from))
    }

    async fn set_status(&self, id: Uuid, status: BookingStatus) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE bookings SET status = $1, modif_date = $2 WHERE id = $3",
        )
        .bind(i16::from(status))
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }

        Ok(())
    }
}
