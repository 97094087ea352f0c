//! Business logic services

pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod ledger;

use std::sync::Arc;

use crate::{config::InventoryConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub availability: availability::AvailabilityService,
    pub bookings: bookings::BookingsService,
}

impl Services {
    /// Create all services sharing one local ledger, seeded from the durable
    /// booking store.
    pub async fn new(repository: Repository, inventory: InventoryConfig) -> AppResult<Self> {
        let ledger = Arc::new(ledger::Ledger::new(
            inventory.tour_default_capacity,
            inventory.tour_default_price,
        ));

        let services = Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            availability: availability::AvailabilityService::new(
                repository.clone(),
                ledger.clone(),
                inventory,
            ),
            bookings: bookings::BookingsService::new(repository, ledger),
        };

        let seeded = services.bookings.refresh().await?;
        tracing::info!(bookings = seeded, "Local booking mirror seeded");

        Ok(services)
    }
}
