//! Data models for Yatri

pub mod booking;
pub mod catalog;
pub mod enums;
pub mod slot;

// Re-export commonly used types
pub use booking::{Booking, CreateBooking, UpdateBookingStatus};
pub use catalog::{BusAsset, FleetVehicle, TourPackage};
pub use enums::{BookingStatus, ResourceType, SlotStatus};
pub use slot::{OverridePatch, Slot, SlotOverride};
