//! Master-data catalog models (tour packages, fleet vehicles, bus assets)
//!
//! Catalog entries are owned by the master-data collaborator and read-only to
//! the reconciliation core within a single availability computation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A tour package with default capacity and price
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TourPackage {
    pub id: String,
    pub name: String,
    pub capacity_default: i32,
    pub price_default: i64,
    /// Best-effort remaining-seats counter, synced after successful bookings
    pub remaining_seats: Option<i32>,
}

/// An individually named fleet vehicle (whole-vehicle assignments)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FleetVehicle {
    pub id: String,
    pub name: String,
    pub capacity: i32,
    pub base_rate: i64,
    pub vehicle_class: Option<String>,
}

/// A seat-counted bus asset
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BusAsset {
    pub id: String,
    pub name: String,
    pub capacity: i32,
    pub base_rate: i64,
}
