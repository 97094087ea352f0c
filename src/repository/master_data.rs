//! Master-data provider: collaborator contract and Postgres implementation
//!
//! The catalog of bookable assets is owned by an external master-data
//! collaborator; the reconciliation core only reads it, except for the
//! best-effort remaining-seats sync after a committed tour booking.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::catalog::{BusAsset, FleetVehicle, TourPackage},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MasterData: Send + Sync {
    async fn list_tour_packages(&self) -> AppResult<Vec<TourPackage>>;
    async fn list_fleet_vehicles(&self) -> AppResult<Vec<FleetVehicle>>;
    async fn list_bus_assets(&self) -> AppResult<Vec<BusAsset>>;
    async fn set_remaining_seats(&self, package_id: &str, remaining: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgMasterData {
    pool: Pool<Postgres>,
}

impl PgMasterData {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MasterData for PgMasterData {
    async fn list_tour_packages(&self) -> AppResult<Vec<TourPackage>> {
        let rows = sqlx::query_as::<_, TourPackage>(
            "SELECT * FROM tour_packages ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_fleet_vehicles(&self) -> AppResult<Vec<FleetVehicle>> {
        let rows = sqlx::query_as::<_, FleetVehicle>(
            "SELECT * FROM fleet_vehicles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_bus_assets(&self) -> AppResult<Vec<BusAsset>> {
        let rows = sqlx::query_as::<_, BusAsset>(
            "SELECT * FROM bus_assets ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn set_remaining_seats(&self, package_id: &str, remaining: i32) -> AppResult<()> {
        sqlx::query(
            "UPDATE tour_packages SET remaining_seats = $1 WHERE id = $2",
        )
        .bind(remaining)
        .bind(package_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(())
    }
}
