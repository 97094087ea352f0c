//! Availability resolution
//!
//! The resolver is a pure function over a catalog snapshot, an optional
//! override row and a booking snapshot. It is safe to call once per calendar
//! cell per render; nothing here writes.
//!
//! Occupancy rules per resource class:
//! - Tour: capacity/price/blocked come from the override row (or the
//!   configured defaults); `booked` is the stored counter owned by the
//!   reconciliation engine, not a replay over bookings.
//! - Car: whole-vehicle assignments; each non-cancelled car booking whose
//!   title or details mention the vehicle name counts as one unit.
//! - Bus: seat-counted; non-cancelled bus bookings contribute their parsed
//!   guest headcount to a single per-day pool.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::{
    config::InventoryConfig,
    error::{AppError, AppResult},
    guests::parse_guest_count,
    models::{
        booking::Booking,
        catalog::{BusAsset, FleetVehicle},
        enums::{ResourceType, SlotStatus},
        slot::{Slot, SlotOverride, SlotView},
    },
    repository::Repository,
};

use super::ledger::Ledger;

// ---------------------------------------------------------------------------
// Pure resolution core
// ---------------------------------------------------------------------------

/// Resolve the availability slot for one resource on one date.
pub fn resolve_slot(
    resource_type: ResourceType,
    resource_ref: Option<&str>,
    date: NaiveDate,
    vehicles: &[FleetVehicle],
    buses: &[BusAsset],
    override_row: Option<&SlotOverride>,
    bookings: &[Booking],
    defaults: &InventoryConfig,
) -> Slot {
    match resource_type {
        ResourceType::Tour => resolve_tour(date, override_row, defaults),
        ResourceType::Car => resolve_car(resource_ref, date, vehicles, bookings),
        ResourceType::Bus => resolve_bus(resource_ref, date, buses, bookings),
        // Hotel bookings never participate in capacity accounting
        ResourceType::Hotel => Slot::empty(date),
    }
}

fn resolve_tour(
    date: NaiveDate,
    override_row: Option<&SlotOverride>,
    defaults: &InventoryConfig,
) -> Slot {
    match override_row {
        Some(row) => Slot {
            date,
            capacity: row.capacity,
            booked: row.booked,
            price: row.price,
            blocked: row.blocked,
        },
        None => Slot {
            date,
            capacity: defaults.tour_default_capacity,
            booked: 0,
            price: defaults.tour_default_price,
            blocked: false,
        },
    }
}

fn resolve_car(
    resource_ref: Option<&str>,
    date: NaiveDate,
    vehicles: &[FleetVehicle],
    bookings: &[Booking],
) -> Slot {
    let Some(vehicle) = select_vehicle(resource_ref, vehicles) else {
        return Slot::empty(date);
    };

    let booked = bookings
        .iter()
        .filter(|b| {
            b.resource_type == ResourceType::Car
                && b.date == date
                && b.status.counts_for_occupancy()
                && mentions_vehicle(b, &vehicle.name)
        })
        .count() as i32;

    Slot {
        date,
        capacity: vehicle.capacity,
        booked,
        price: vehicle.base_rate,
        blocked: false,
    }
}

fn resolve_bus(
    resource_ref: Option<&str>,
    date: NaiveDate,
    buses: &[BusAsset],
    bookings: &[Booking],
) -> Slot {
    let Some(bus) = select_bus(resource_ref, buses) else {
        return Slot::empty(date);
    };

    // All bus bookings share one seat pool per day
    let booked = bookings
        .iter()
        .filter(|b| {
            b.resource_type == ResourceType::Bus
                && b.date == date
                && b.status.counts_for_occupancy()
        })
        .map(|b| parse_guest_count(b.guest_spec.as_deref()))
        .sum();

    Slot {
        date,
        capacity: bus.capacity,
        booked,
        price: bus.base_rate,
        blocked: false,
    }
}

/// A car booking is attributed to a vehicle when the vehicle name appears in
/// the booking title or its free-text details.
fn mentions_vehicle(booking: &Booking, vehicle_name: &str) -> bool {
    booking.title.contains(vehicle_name)
        || booking
            .details
            .as_deref()
            .map(|d| d.contains(vehicle_name))
            .unwrap_or(false)
}

/// Select a fleet vehicle by id, exact name, or name containment in a
/// free-text reference (a booking title works as a ref), defaulting to the
/// first one when nothing resolves.
fn select_vehicle<'a>(
    resource_ref: Option<&str>,
    vehicles: &'a [FleetVehicle],
) -> Option<&'a FleetVehicle> {
    resource_ref
        .and_then(|r| {
            vehicles
                .iter()
                .find(|v| v.id == r || v.name == r)
                .or_else(|| vehicles.iter().find(|v| r.contains(&v.name)))
        })
        .or_else(|| vehicles.first())
}

fn select_bus<'a>(resource_ref: Option<&str>, buses: &'a [BusAsset]) -> Option<&'a BusAsset> {
    resource_ref
        .and_then(|r| {
            buses
                .iter()
                .find(|b| b.id == r || b.name == r)
                .or_else(|| buses.iter().find(|b| r.contains(&b.name)))
        })
        .or_else(|| buses.first())
}

/// Derive the display status for a resolved slot.
pub fn slot_status(slot: &Slot) -> SlotStatus {
    if slot.blocked {
        SlotStatus::Blocked
    } else if slot.booked >= slot.capacity {
        SlotStatus::Full
    } else if slot.booked as i64 * 4 >= slot.capacity as i64 * 3 {
        SlotStatus::Filling
    } else {
        SlotStatus::Available
    }
}

/// Number of days in a month, for calendar rendering.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// AvailabilityService
// ---------------------------------------------------------------------------

/// Gathers the inputs (catalog, overrides, booking mirror) and runs the pure
/// resolver over them. Re-reads the mirror on every call rather than trusting
/// any cached occupancy number for cars and buses.
#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    ledger: Arc<Ledger>,
    defaults: InventoryConfig,
}

impl AvailabilityService {
    pub fn new(repository: Repository, ledger: Arc<Ledger>, defaults: InventoryConfig) -> Self {
        Self {
            repository,
            ledger,
            defaults,
        }
    }

    /// Resolve a single day for one resource class.
    pub async fn resolve_day(
        &self,
        resource_type: ResourceType,
        resource_ref: Option<&str>,
        date: NaiveDate,
    ) -> AppResult<SlotView> {
        let (vehicles, buses) = self.catalog_for(resource_type).await?;
        let override_row = if resource_type == ResourceType::Tour {
            Some(self.override_for_day(date.day() as i16).await?)
        } else {
            None
        };
        let bookings = self.ledger.snapshot();

        let slot = resolve_slot(
            resource_type,
            resource_ref,
            date,
            &vehicles,
            &buses,
            override_row.as_ref(),
            &bookings,
            &self.defaults,
        );

        Ok(view_of(slot))
    }

    /// Resolve every day of a month for one resource class, one slot per
    /// calendar cell.
    pub async fn month_view(
        &self,
        resource_type: ResourceType,
        resource_ref: Option<&str>,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<SlotView>> {
        if !(1..=12).contains(&month) {
            return Err(AppError::BadRequest(format!("Invalid month: {}", month)));
        }

        let (vehicles, buses) = self.catalog_for(resource_type).await?;
        let overrides = if resource_type == ResourceType::Tour {
            let rows = self.repository.overrides.list().await?;
            for row in &rows {
                self.ledger.cache_override(row.clone());
            }
            rows
        } else {
            Vec::new()
        };
        let bookings = self.ledger.snapshot();

        let mut cells = Vec::new();
        for day in 1..=days_in_month(year, month) {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            let override_row = match resource_type {
                ResourceType::Tour => Some(
                    self.ledger
                        .cached_override(day as i16)
                        .or_else(|| {
                            overrides
                                .iter()
                                .find(|o| o.day_of_month == day as i16)
                                .cloned()
                        })
                        .unwrap_or_else(|| self.ledger.default_override(day as i16)),
                ),
                _ => None,
            };

            let slot = resolve_slot(
                resource_type,
                resource_ref,
                date,
                &vehicles,
                &buses,
                override_row.as_ref(),
                &bookings,
                &self.defaults,
            );
            cells.push(view_of(slot));
        }

        Ok(cells)
    }

    async fn catalog_for(
        &self,
        resource_type: ResourceType,
    ) -> AppResult<(Vec<FleetVehicle>, Vec<BusAsset>)> {
        match resource_type {
            ResourceType::Car => Ok((self.repository.master_data.list_fleet_vehicles().await?, Vec::new())),
            ResourceType::Bus => Ok((Vec::new(), self.repository.master_data.list_bus_assets().await?)),
            _ => Ok((Vec::new(), Vec::new())),
        }
    }

    /// Cached override for a day, fetched from the durable store on first
    /// read and defaulted when absent.
    async fn override_for_day(&self, day_of_month: i16) -> AppResult<SlotOverride> {
        if let Some(row) = self.ledger.cached_override(day_of_month) {
            return Ok(row);
        }
        let row = self
            .repository
            .overrides
            .get(day_of_month)
            .await?
            .unwrap_or_else(|| self.ledger.default_override(day_of_month));
        self.ledger.cache_override(row.clone());
        Ok(row)
    }
}

fn view_of(slot: Slot) -> SlotView {
    let status = slot_status(&slot);
    SlotView {
        date: slot.date,
        capacity: slot.capacity,
        booked: slot.booked,
        price: slot.price,
        blocked: slot.blocked,
        status,
    }
}
