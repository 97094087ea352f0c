//! Shared domain enums (matching the legacy back-office encoding)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ResourceType
// ---------------------------------------------------------------------------

/// Bookable resource classes.
///
/// `Hotel` exists in the booking records but never participates in capacity
/// accounting; it is carried through for bookkeeping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum ResourceType {
    Tour = 0,
    Car = 1,
    Bus = 2,
    Hotel = 3,
}

impl From<i16> for ResourceType {
    fn from(v: i16) -> Self {
        match v {
            0 => ResourceType::Tour,
            1 => ResourceType::Car,
            2 => ResourceType::Bus,
            _ => ResourceType::Hotel,
        }
    }
}

impl From<ResourceType> for i16 {
    fn from(r: ResourceType) -> Self {
        r as i16
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResourceType::Tour => "Tour",
            ResourceType::Car => "Car",
            ResourceType::Bus => "Bus",
            ResourceType::Hotel => "Hotel",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Booking lifecycle status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum BookingStatus {
    Pending = 0,
    Confirmed = 1,
    Completed = 2,
    Cancelled = 3,
}

impl BookingStatus {
    /// Cancelled bookings are excluded from every occupancy computation.
    pub fn counts_for_occupancy(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl From<i16> for BookingStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => BookingStatus::Confirmed,
            2 => BookingStatus::Completed,
            3 => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

impl From<BookingStatus> for i16 {
    fn from(s: BookingStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// SlotStatus
// ---------------------------------------------------------------------------

/// Display status derived from a resolved slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Filling,
    Full,
    Blocked,
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SlotStatus::Available => "available",
            SlotStatus::Filling => "filling",
            SlotStatus::Full => "full",
            SlotStatus::Blocked => "blocked",
        };
        write!(f, "{}", label)
    }
}
