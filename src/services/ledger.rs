//! Local ledger: the in-process mirror of the booking store plus the
//! manual-override cache.
//!
//! This is the state the reconciliation engine mutates optimistically and
//! the availability resolver replays. It is passed into the services by
//! handle rather than living in a module-level singleton, so the pure
//! resolver contract stays testable in isolation.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    booking::Booking,
    enums::BookingStatus,
    slot::SlotOverride,
};

pub struct Ledger {
    bookings: RwLock<Vec<Booking>>,
    overrides: RwLock<HashMap<i16, SlotOverride>>,
    tour_default_capacity: i32,
    tour_default_price: i64,
}

impl Ledger {
    pub fn new(tour_default_capacity: i32, tour_default_price: i64) -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
            overrides: RwLock::new(HashMap::new()),
            tour_default_capacity,
            tour_default_price,
        }
    }

    // -- booking mirror -----------------------------------------------------

    /// Replace the mirror contents from a durable-store read.
    pub fn seed(&self, bookings: Vec<Booking>) {
        *self.bookings.write().expect("bookings lock poisoned") = bookings;
    }

    /// Optimistically append a booking ahead of the durable write.
    pub fn append(&self, booking: Booking) {
        self.bookings
            .write()
            .expect("bookings lock poisoned")
            .push(booking);
    }

    /// Inverse of `append`: drop the optimistic booking after a failed
    /// primary write. Returns the removed booking if it was present.
    pub fn remove(&self, id: Uuid) -> Option<Booking> {
        let mut bookings = self.bookings.write().expect("bookings lock poisoned");
        let pos = bookings.iter().position(|b| b.id == id)?;
        Some(bookings.remove(pos))
    }

    pub fn find(&self, id: Uuid) -> Option<Booking> {
        self.bookings
            .read()
            .expect("bookings lock poisoned")
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Out-of-band status change (cancellation, confirmation). The tour
    /// override counter is intentionally left untouched here; car and bus
    /// occupancy is re-derived and drops on its own.
    pub fn set_status(&self, id: Uuid, status: BookingStatus) -> Option<Booking> {
        let mut bookings = self.bookings.write().expect("bookings lock poisoned");
        let booking = bookings.iter_mut().find(|b| b.id == id)?;
        booking.status = status;
        booking.modif_date = Some(Utc::now());
        Some(booking.clone())
    }

    /// Point-in-time copy of the mirror for a resolver pass.
    pub fn snapshot(&self) -> Vec<Booking> {
        self.bookings
            .read()
            .expect("bookings lock poisoned")
            .clone()
    }

    // -- override cache -----------------------------------------------------

    pub fn cached_override(&self, day_of_month: i16) -> Option<SlotOverride> {
        self.overrides
            .read()
            .expect("overrides lock poisoned")
            .get(&day_of_month)
            .cloned()
    }

    pub fn cache_override(&self, row: SlotOverride) {
        self.overrides
            .write()
            .expect("overrides lock poisoned")
            .insert(row.day_of_month, row);
    }

    /// Increment the stored booked counter for a day, creating the default
    /// row lazily. Returns the updated row for the durable sync.
    pub fn bump_booked(&self, day_of_month: i16) -> SlotOverride {
        let mut overrides = self.overrides.write().expect("overrides lock poisoned");
        let row = overrides.entry(day_of_month).or_insert_with(|| {
            SlotOverride::default_for_day(
                day_of_month,
                self.tour_default_capacity,
                self.tour_default_price,
            )
        });
        row.booked += 1;
        row.modif_date = Some(Utc::now());
        row.clone()
    }

    /// Default row for a day with no explicit entry.
    pub fn default_override(&self, day_of_month: i16) -> SlotOverride {
        SlotOverride::default_for_day(
            day_of_month,
            self.tour_default_capacity,
            self.tour_default_price,
        )
    }
}
