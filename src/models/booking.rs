//! Booking model and related request types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{BookingStatus, ResourceType};

/// A reservation against one resource class on one travel date.
///
/// The resource reference is class-dependent: `package_id` for tours, a
/// substring match of the fleet vehicle name against `title`/`details` for
/// cars, and implicit (one shared pool per day) for buses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub resource_type: ResourceType,
    /// Tour package id; None for non-tour bookings
    pub package_id: Option<String>,
    pub title: String,
    pub details: Option<String>,
    /// Travel date (day granularity)
    pub date: NaiveDate,
    /// Free-form guest description, e.g. "2 Adults, 1 Child"
    pub guest_spec: Option<String>,
    pub status: BookingStatus,
    pub customer_name: Option<String>,
    pub crea_date: DateTime<Utc>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Raw database row (smallint-encoded enums)
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub resource_type: i16,
    pub package_id: Option<String>,
    pub title: String,
    pub details: Option<String>,
    pub travel_date: NaiveDate,
    pub guest_spec: Option<String>,
    pub status: i16,
    pub customer_name: Option<String>,
    pub crea_date: DateTime<Utc>,
    pub modif_date: Option<DateTime<Utc>>,
}

impl From<BookingRow> for Booking {
    fn from(r: BookingRow) -> Self {
        Booking {
            id: r.id,
            resource_type: r.resource_type.into(),
            package_id: r.package_id,
            title: r.title,
            details: r.details,
            date: r.travel_date,
            guest_spec: r.guest_spec,
            status: r.status.into(),
            customer_name: r.customer_name,
            crea_date: r.crea_date,
            modif_date: r.modif_date,
        }
    }
}

/// Create booking request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBooking {
    pub resource_type: ResourceType,
    pub package_id: Option<String>,
    pub title: String,
    pub details: Option<String>,
    /// Travel date (YYYY-MM-DD)
    pub date: NaiveDate,
    pub guest_spec: Option<String>,
    pub status: Option<BookingStatus>,
    pub customer_name: Option<String>,
}

impl CreateBooking {
    /// Materialise a booking with a fresh id and audit stamp.
    pub fn into_booking(self) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            resource_type: self.resource_type,
            package_id: self.package_id,
            title: self.title,
            details: self.details,
            date: self.date,
            guest_spec: self.guest_spec,
            status: self.status.unwrap_or(BookingStatus::Pending),
            customer_name: self.customer_name,
            crea_date: Utc::now(),
            modif_date: None,
        }
    }
}

/// Status update request (cancellation included)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatus {
    pub status: BookingStatus,
}
