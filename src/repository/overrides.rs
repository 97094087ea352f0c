//! Durable override store: collaborator contract and Postgres implementation

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::slot::SlotOverride,
};

/// Durable manual-override store contract.
///
/// The override counter sync after a committed booking goes through `put` and
/// is best-effort: a failure is logged and swallowed, never rolled back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OverrideStore: Send + Sync {
    async fn get(&self, day_of_month: i16) -> AppResult<Option<SlotOverride>>;
    async fn put(&self, row: &SlotOverride) -> AppResult<()>;
    async fn list(&self) -> AppResult<Vec<SlotOverride>>;
}

#[derive(Clone)]
pub struct PgOverrideStore {
    pool: Pool<Postgres>,
}

impl PgOverrideStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OverrideStore for PgOverrideStore {
    async fn get(&self, day_of_month: i16) -> AppResult<Option<SlotOverride>> {
        let row = sqlx::query_as::<_, SlotOverride>(
            "SELECT * FROM slot_overrides WHERE day_of_month = $1",
        )
        .bind(day_of_month)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn put(&self, row: &SlotOverride) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO slot_overrides (day_of_month, capacity, price, blocked, booked, modif_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (day_of_month) DO UPDATE
            SET capacity = EXCLUDED.capacity,
                price = EXCLUDED.price,
                blocked = EXCLUDED.blocked,
                booked = EXCLUDED.booked,
                modif_date = EXCLUDED.modif_date
            "#,
        )
        .bind(row.day_of_month)
        .bind(row.capacity)
        .bind(row.price)
        .bind(row.blocked)
        .bind(row.booked)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<SlotOverride>> {
        let rows = sqlx::query_as::<_, SlotOverride>(
            "SELECT * FROM slot_overrides ORDER BY day_of_month",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
