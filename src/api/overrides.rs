//! Manual override endpoints (tour capacity/price/blocked administration)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::slot::{OverridePatch, SlotOverride},
};

/// List all explicit override rows
#[utoipa::path(
    get,
    path = "/overrides",
    tag = "overrides",
    responses(
        (status = 200, description = "Explicit override rows", body = Vec<SlotOverride>)
    )
)]
pub async fn list_overrides(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<SlotOverride>>> {
    let rows = state.services.bookings.list_overrides().await?;
    Ok(Json(rows))
}

/// Get the override row for a day of month (defaulted when absent)
#[utoipa::path(
    get,
    path = "/overrides/{day}",
    tag = "overrides",
    params(
        ("day" = i16, Path, description = "Day of month (1-31)")
    ),
    responses(
        (status = 200, description = "Override row", body = SlotOverride),
        (status = 400, description = "Invalid day of month")
    )
)]
pub async fn get_override(
    State(state): State<crate::AppState>,
    Path(day): Path<i16>,
) -> AppResult<Json<SlotOverride>> {
    let row = state.services.bookings.get_override(day).await?;
    Ok(Json(row))
}

/// Administrative override write.
///
/// Sets capacity, price and/or the blocked flag directly, bypassing the
/// booking-driven counter logic. Only non-negativity is validated.
#[utoipa::path(
    put,
    path = "/overrides/{day}",
    tag = "overrides",
    params(
        ("day" = i16, Path, description = "Day of month (1-31)")
    ),
    request_body = OverridePatch,
    responses(
        (status = 200, description = "Updated override row", body = SlotOverride),
        (status = 400, description = "Invalid day or negative value"),
        (status = 502, description = "Durable write failed")
    )
)]
pub async fn update_override(
    State(state): State<crate::AppState>,
    Path(day): Path<i16>,
    Json(patch): Json<OverridePatch>,
) -> AppResult<Json<SlotOverride>> {
    let row = state.services.bookings.update_override(day, patch).await?;
    Ok(Json(row))
}
