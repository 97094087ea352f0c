//! Availability slot and manual override models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Fallback tour capacity when no override row exists
pub const DEFAULT_TOUR_CAPACITY: i32 = 20;
/// Fallback tour price when no override row exists
pub const DEFAULT_TOUR_PRICE: i64 = 35000;

// ---------------------------------------------------------------------------
// SlotOverride
// ---------------------------------------------------------------------------

/// Admin-settable exception to default tour capacity/price/blocked state.
///
/// Keyed by day-of-month only, as in the legacy back office: an override for
/// day 10 applies to the 10th of every month. Rows are created lazily on
/// first read or first manual edit and never deleted, only overwritten.
///
/// `booked` is a stored counter owned by the reconciliation engine. It is
/// incremented at booking-creation time and is NOT decremented when a booking
/// is cancelled, mirroring the legacy behaviour (car/bus occupancy is fully
/// re-derived and therefore unaffected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SlotOverride {
    /// Day of month (1..=31)
    pub day_of_month: i16,
    pub capacity: i32,
    pub price: i64,
    pub blocked: bool,
    pub booked: i32,
    pub modif_date: Option<DateTime<Utc>>,
}

impl SlotOverride {
    /// Default override row for a day with no explicit entry.
    pub fn default_for_day(day_of_month: i16, capacity: i32, price: i64) -> Self {
        Self {
            day_of_month,
            capacity,
            price,
            blocked: false,
            booked: 0,
            modif_date: None,
        }
    }
}

/// Partial administrative update of an override row.
///
/// Bypasses the booking-driven counter logic entirely; only capacity, price
/// and the blocked flag can be set this way.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OverridePatch {
    pub capacity: Option<i32>,
    pub price: Option<i64>,
    pub blocked: Option<bool>,
}

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// The resolved availability snapshot for one resource on one date.
///
/// Derived on demand for cars and buses; backed by the stored override row
/// for tours. Never persisted as such.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Slot {
    pub date: NaiveDate,
    pub capacity: i32,
    pub booked: i32,
    pub price: i64,
    pub blocked: bool,
}

impl Slot {
    /// Zero slot returned when no catalog entry exists for the class.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            capacity: 0,
            booked: 0,
            price: 0,
            blocked: false,
        }
    }
}

/// Slot enriched with its derived display status, as served by the
/// availability endpoints (one per calendar cell).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SlotView {
    pub date: NaiveDate,
    pub capacity: i32,
    pub booked: i32,
    pub price: i64,
    pub blocked: bool,
    pub status: crate::models::enums::SlotStatus,
}
