//! Availability endpoints (calendar views)

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, models::slot::SlotView};

use super::parse_class;

/// Query parameters for a single-day availability read
#[derive(Debug, Deserialize, IntoParams)]
pub struct DayQuery {
    /// Date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Resource reference: package id (tour), vehicle id, name or free text
    /// containing the name (car), bus id or name (bus); optional
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

/// Query parameters for a month availability view
#[derive(Debug, Deserialize, IntoParams)]
pub struct MonthQuery {
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

/// Resolve availability for one resource class on one date
#[utoipa::path(
    get,
    path = "/availability/{class}/day",
    tag = "availability",
    params(
        ("class" = String, Path, description = "Resource class: tour, car or bus"),
        DayQuery
    ),
    responses(
        (status = 200, description = "Resolved slot", body = SlotView),
        (status = 400, description = "Unknown resource class")
    )
)]
pub async fn day_view(
    State(state): State<crate::AppState>,
    Path(class): Path<String>,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<SlotView>> {
    let resource_type = parse_class(&class)?;
    let slot = state
        .services
        .availability
        .resolve_day(resource_type, query.reference.as_deref(), query.date)
        .await?;
    Ok(Json(slot))
}

/// Resolve availability for every day of a month, one slot per calendar cell
#[utoipa::path(
    get,
    path = "/availability/{class}/month",
    tag = "availability",
    params(
        ("class" = String, Path, description = "Resource class: tour, car or bus"),
        MonthQuery
    ),
    responses(
        (status = 200, description = "One resolved slot per day", body = Vec<SlotView>),
        (status = 400, description = "Unknown resource class or invalid month")
    )
)]
pub async fn month_view(
    State(state): State<crate::AppState>,
    Path(class): Path<String>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<SlotView>>> {
    let resource_type = parse_class(&class)?;
    let cells = state
        .services
        .availability
        .month_view(
            resource_type,
            query.reference.as_deref(),
            query.year,
            query.month,
        )
        .await?;
    Ok(Json(cells))
}
