//! Repository layer: durable-store collaborator contracts
//!
//! The reconciliation core never talks to the database directly; it goes
//! through these contracts, which are handed in explicitly so tests can
//! substitute in-memory or failing implementations.

pub mod bookings;
pub mod master_data;
pub mod memory;
pub mod overrides;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use bookings::BookingStore;
pub use master_data::MasterData;
pub use overrides::OverrideStore;

/// Bundle of durable-store collaborators
#[derive(Clone)]
pub struct Repository {
    pub bookings: Arc<dyn BookingStore>,
    pub overrides: Arc<dyn OverrideStore>,
    pub master_data: Arc<dyn MasterData>,
}

impl Repository {
    /// Postgres-backed repository used by the server binary
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            bookings: Arc::new(bookings::PgBookingStore::new(pool.clone())),
            overrides: Arc::new(overrides::PgOverrideStore::new(pool.clone())),
            master_data: Arc::new(master_data::PgMasterData::new(pool)),
        }
    }

    /// In-memory repository with the given catalog, used by tests
    pub fn in_memory(
        packages: Vec<crate::models::catalog::TourPackage>,
        vehicles: Vec<crate::models::catalog::FleetVehicle>,
        buses: Vec<crate::models::catalog::BusAsset>,
    ) -> Self {
        Self {
            bookings: Arc::new(memory::InMemoryBookingStore::new()),
            overrides: Arc::new(memory::InMemoryOverrideStore::new()),
            master_data: Arc::new(memory::InMemoryMasterData::new(packages, vehicles, buses)),
        }
    }
}
