//! In-memory store implementations for tests and local development

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BookingStore, MasterData, OverrideStore};
use crate::{
    error::{AppError, AppResult},
    models::{
        booking::Booking,
        catalog::{BusAsset, FleetVehicle, TourPackage},
        enums::BookingStatus,
        slot::SlotOverride,
    },
};

// ---------------------------------------------------------------------------
// InMemoryBookingStore
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryBookingStore {
    rows: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, booking: &Booking) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&booking.id) {
            return Err(AppError::Conflict(format!(
                "Booking {} already exists",
                booking.id
            )));
        }
        rows.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = self.rows.read().await;
        let mut bookings: Vec<Booking> = rows.values().cloned().collect();
        bookings.sort_by_key(|b| (b.date, b.crea_date));
        Ok(bookings)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Booking>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn set_status(&self, id: Uuid, status: BookingStatus) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let booking = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
        booking.status = status;
        booking.modif_date = Some(Utc::now());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// InMemoryOverrideStore
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryOverrideStore {
    rows: RwLock<HashMap<i16, SlotOverride>>,
}

impl InMemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OverrideStore for InMemoryOverrideStore {
    async fn get(&self, day_of_month: i16) -> AppResult<Option<SlotOverride>> {
        Ok(self.rows.read().await.get(&day_of_month).cloned())
    }

    async fn put(&self, row: &SlotOverride) -> AppResult<()> {
        self.rows.write().await.insert(row.day_of_month, row.clone());
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<SlotOverride>> {
        let rows = self.rows.read().await;
        let mut overrides: Vec<SlotOverride> = rows.values().cloned().collect();
        overrides.sort_by_key(|o| o.day_of_month);
        Ok(overrides)
    }
}

// ---------------------------------------------------------------------------
// InMemoryMasterData
// ---------------------------------------------------------------------------

pub struct InMemoryMasterData {
    packages: RwLock<Vec<TourPackage>>,
    vehicles: Vec<FleetVehicle>,
    buses: Vec<BusAsset>,
}

impl InMemoryMasterData {
    pub fn new(
        packages: Vec<TourPackage>,
        vehicles: Vec<FleetVehicle>,
        buses: Vec<BusAsset>,
    ) -> Self {
        Self {
            packages: RwLock::new(packages),
            vehicles,
            buses,
        }
    }
}

#[async_trait]
impl MasterData for InMemoryMasterData {
    async fn list_tour_packages(&self) -> AppResult<Vec<TourPackage>> {
        Ok(self.packages.read().await.clone())
    }

    async fn list_fleet_vehicles(&self) -> AppResult<Vec<FleetVehicle>> {
        Ok(self.vehicles.clone())
    }

    async fn list_bus_assets(&self) -> AppResult<Vec<BusAsset>> {
        Ok(self.buses.clone())
    }

    async fn set_remaining_seats(&self, package_id: &str, remaining: i32) -> AppResult<()> {
        let mut packages = self.packages.write().await;
        let package = packages
            .iter_mut()
            .find(|p| p.id == package_id)
            .ok_or_else(|| AppError::NotFound(format!("Package {} not found", package_id)))?;
        package.remaining_seats = Some(remaining);
        Ok(())
    }
}
