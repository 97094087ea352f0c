//! Master-data catalog read service

use crate::{
    error::AppResult,
    models::catalog::{BusAsset, FleetVehicle, TourPackage},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List bookable tour packages
    pub async fn list_packages(&self) -> AppResult<Vec<TourPackage>> {
        self.repository.master_data.list_tour_packages().await
    }

    /// List the fleet of individually named vehicles
    pub async fn list_vehicles(&self) -> AppResult<Vec<FleetVehicle>> {
        self.repository.master_data.list_fleet_vehicles().await
    }

    /// List seat-counted bus assets
    pub async fn list_buses(&self) -> AppResult<Vec<BusAsset>> {
        self.repository.master_data.list_bus_assets().await
    }
}
