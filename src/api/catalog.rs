//! Master-data catalog endpoints (read-only)

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::catalog::{BusAsset, FleetVehicle, TourPackage},
};

/// List tour packages
#[utoipa::path(
    get,
    path = "/catalog/packages",
    tag = "catalog",
    responses(
        (status = 200, description = "Tour packages", body = Vec<TourPackage>)
    )
)]
pub async fn list_packages(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<TourPackage>>> {
    let packages = state.services.catalog.list_packages().await?;
    Ok(Json(packages))
}

/// List fleet vehicles
#[utoipa::path(
    get,
    path = "/catalog/vehicles",
    tag = "catalog",
    responses(
        (status = 200, description = "Fleet vehicles", body = Vec<FleetVehicle>)
    )
)]
pub async fn list_vehicles(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<FleetVehicle>>> {
    let vehicles = state.services.catalog.list_vehicles().await?;
    Ok(Json(vehicles))
}

/// List bus assets
#[utoipa::path(
    get,
    path = "/catalog/buses",
    tag = "catalog",
    responses(
        (status = 200, description = "Bus assets", body = Vec<BusAsset>)
    )
)]
pub async fn list_buses(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BusAsset>>> {
    let buses = state.services.catalog.list_buses().await?;
    Ok(Json(buses))
}
