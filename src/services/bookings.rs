//! Booking reconciliation engine
//!
//! Creating a booking is a two-phase operation: an optimistic mutation of the
//! local ledger followed by the primary durable write. Only the primary
//! write's failure compensates (by removing the optimistic booking); the
//! secondary writes that sync the tour override counter and the package's
//! remaining-seats figure are best-effort, because a lost booking is worse
//! than a stale counter. That asymmetry is named in `CompensationPolicy`
//! rather than hard-coded inline.
//!
//! There is no capacity check anywhere in this flow: overbooking is allowed
//! and only ever surfaced through the slot status.

use std::sync::Arc;

use chrono::Datelike;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    guests::parse_guest_count,
    models::{
        booking::{Booking, CreateBooking},
        enums::{BookingStatus, ResourceType},
        slot::{OverridePatch, SlotOverride},
    },
    repository::Repository,
};

use super::ledger::Ledger;

// ---------------------------------------------------------------------------
// CompensationPolicy
// ---------------------------------------------------------------------------

/// The durable writes issued while committing a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// The booking row itself
    Primary,
    /// Tour override counter sync
    OverrideCounter,
    /// Package remaining-seats sync
    RemainingSeats,
}

/// Which write failures trigger rollback of the optimistic mutation.
pub struct CompensationPolicy {
    rollback_on: &'static [WriteKind],
}

impl CompensationPolicy {
    pub fn rolls_back(&self, kind: WriteKind) -> bool {
        self.rollback_on.contains(&kind)
    }
}

impl Default for CompensationPolicy {
    /// Only the primary booking write compensates; secondary counter syncs
    /// tolerate drift.
    fn default() -> Self {
        Self {
            rollback_on: &[WriteKind::Primary],
        }
    }
}

/// Outcome of the two-phase booking creation.
#[derive(Debug)]
pub enum CommitOutcome {
    /// The primary durable write succeeded; secondary syncs may still drift.
    Committed(Booking),
    /// The primary durable write failed and the optimistic booking was
    /// removed again.
    RolledBack(AppError),
}

// ---------------------------------------------------------------------------
// BookingsService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    ledger: Arc<Ledger>,
    policy: Arc<CompensationPolicy>,
}

impl BookingsService {
    pub fn new(repository: Repository, ledger: Arc<Ledger>) -> Self {
        Self {
            repository,
            ledger,
            policy: Arc::new(CompensationPolicy::default()),
        }
    }

    /// Seed or refresh the local mirror from the durable store.
    pub async fn refresh(&self) -> AppResult<usize> {
        let bookings = self.repository.bookings.list().await?;
        let count = bookings.len();
        self.ledger.seed(bookings);
        Ok(count)
    }

    /// Create a booking, surfacing a rollback as a persistence error.
    pub async fn create_booking(&self, request: CreateBooking) -> AppResult<Booking> {
        match self.commit(request).await {
            CommitOutcome::Committed(booking) => Ok(booking),
            CommitOutcome::RolledBack(e) => Err(e),
        }
    }

    /// Two-phase booking creation.
    ///
    /// 1. Append to the local ledger (optimistic).
    /// 2. For tours, increment the day's override counter locally.
    /// 3. Primary durable write; on failure remove the optimistic booking.
    ///    The counter increment is not separately reverted.
    /// 4. On success, best-effort durable syncs of the override counter and
    ///    the package remaining-seats figure.
    pub async fn commit(&self, request: CreateBooking) -> CommitOutcome {
        let booking = request.into_booking();
        self.ledger.append(booking.clone());

        let updated_override = if booking.resource_type == ResourceType::Tour {
            Some(self.ledger.bump_booked(booking.date.day() as i16))
        } else {
            None
        };

        if let Err(e) = self.repository.bookings.create(&booking).await {
            tracing::error!(booking_id = %booking.id, error = %e, "Primary booking write failed");
            if self.policy.rolls_back(WriteKind::Primary) {
                self.ledger.remove(booking.id);
            }
            return CommitOutcome::RolledBack(AppError::Persistence(format!(
                "Booking write failed: {}",
                e
            )));
        }

        if let Some(row) = updated_override {
            self.sync_override_counter(&booking, row).await;
        }
        if booking.resource_type == ResourceType::Tour {
            self.sync_remaining_seats(&booking).await;
        }

        tracing::info!(
            booking_id = %booking.id,
            resource_type = %booking.resource_type,
            date = %booking.date,
            "Booking committed"
        );
        CommitOutcome::Committed(booking)
    }

    async fn sync_override_counter(&self, booking: &Booking, row: SlotOverride) {
        if let Err(e) = self.repository.overrides.put(&row).await {
            // Tolerated drift per policy: the booking is already committed
            debug_assert!(!self.policy.rolls_back(WriteKind::OverrideCounter));
            tracing::warn!(
                booking_id = %booking.id,
                day_of_month = row.day_of_month,
                error = %e,
                "Override counter sync failed; keeping committed booking"
            );
        }
    }

    async fn sync_remaining_seats(&self, booking: &Booking) {
        let Some(package_id) = booking.package_id.as_deref() else {
            return;
        };

        let packages = match self.repository.master_data.list_tour_packages().await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read packages for remaining-seats sync");
                return;
            }
        };

        let Some(remaining) = packages
            .iter()
            .find(|p| p.id == package_id)
            .and_then(|p| p.remaining_seats)
        else {
            return;
        };

        let guests = parse_guest_count(booking.guest_spec.as_deref());
        if let Err(e) = self
            .repository
            .master_data
            .set_remaining_seats(package_id, remaining - guests)
            .await
        {
            debug_assert!(!self.policy.rolls_back(WriteKind::RemainingSeats));
            tracing::warn!(
                booking_id = %booking.id,
                package_id,
                error = %e,
                "Remaining-seats sync failed; keeping committed booking"
            );
        }
    }

    /// Status change, including cancellation.
    ///
    /// Cancellation drops car/bus occupancy on the next availability read
    /// because those are re-derived; the tour override counter is
    /// deliberately left as-is, matching the legacy behaviour.
    pub async fn set_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        self.repository.bookings.set_status(id, status).await?;

        if let Some(updated) = self.ledger.set_status(id, status) {
            return Ok(updated);
        }
        // Mirror was out of date; fall back to the durable store
        self.repository
            .bookings
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        Ok(self.ledger.snapshot())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Booking> {
        if let Some(b) = self.ledger.find(id) {
            return Ok(b);
        }
        self.repository
            .bookings
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    // -- manual overrides ---------------------------------------------------

    /// Direct administrative override write. Bypasses the booking-driven
    /// counter logic entirely; the only validation is non-negativity.
    pub async fn update_override(
        &self,
        day_of_month: i16,
        patch: OverridePatch,
    ) -> AppResult<SlotOverride> {
        if !(1..=31).contains(&day_of_month) {
            return Err(AppError::BadRequest(format!(
                "Invalid day of month: {}",
                day_of_month
            )));
        }
        if patch.capacity.is_some_and(|c| c < 0) {
            return Err(AppError::Validation("Capacity must be non-negative".to_string()));
        }
        if patch.price.is_some_and(|p| p < 0) {
            return Err(AppError::Validation("Price must be non-negative".to_string()));
        }

        let mut row = match self.ledger.cached_override(day_of_month) {
            Some(row) => row,
            None => self
                .repository
                .overrides
                .get(day_of_month)
                .await?
                .unwrap_or_else(|| self.ledger.default_override(day_of_month)),
        };

        if let Some(capacity) = patch.capacity {
            row.capacity = capacity;
        }
        if let Some(price) = patch.price {
            row.price = price;
        }
        if let Some(blocked) = patch.blocked {
            row.blocked = blocked;
        }

        self.repository.overrides.put(&row).await?;
        self.ledger.cache_override(row.clone());
        Ok(row)
    }

    pub async fn get_override(&self, day_of_month: i16) -> AppResult<SlotOverride> {
        if !(1..=31).contains(&day_of_month) {
            return Err(AppError::BadRequest(format!(
                "Invalid day of month: {}",
                day_of_month
            )));
        }
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

    pub async fn list_overrides(&self) -> AppResult<Vec<SlotOverride>> {
        let rows = self.repository.overrides.list().await?;
        for row in &rows {
            self.ledger.cache_override(row.clone());
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::{
        config::InventoryConfig,
        models::catalog::TourPackage,
        repository::{
            bookings::MockBookingStore,
            memory::{InMemoryBookingStore, InMemoryMasterData, InMemoryOverrideStore},
            overrides::MockOverrideStore,
            Repository,
        },
        services::availability::resolve_slot,
    };

    fn defaults() -> InventoryConfig {
        InventoryConfig {
            tour_default_capacity: 20,
            tour_default_price: 35000,
        }
    }

    fn packages() -> Vec<TourPackage> {
        vec![TourPackage {
            id: "PKG-A".to_string(),
            name: "Golden Triangle".to_string(),
            capacity_default: 20,
            price_default: 35000,
            remaining_seats: Some(18),
        }]
    }

    fn in_memory_repo() -> Repository {
        Repository::in_memory(packages(), Vec::new(), Vec::new())
    }

    fn service(repository: Repository) -> (BookingsService, Arc<Ledger>) {
        let ledger = Arc::new(Ledger::new(20, 35000));
        (BookingsService::new(repository, ledger.clone()), ledger)
    }

    fn tour_request(guests: &str) -> CreateBooking {
        CreateBooking {
            resource_type: ResourceType::Tour,
            package_id: Some("PKG-A".to_string()),
            title: "Golden Triangle".to_string(),
            details: None,
            date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            guest_spec: Some(guests.to_string()),
            status: None,
            customer_name: Some("A. Traveller".to_string()),
        }
    }

    #[tokio::test]
    async fn tour_booking_increments_counter_monotonically() {
        let (service, ledger) = service(in_memory_repo());

        service.create_booking(tour_request("2 Adults")).await.unwrap();
        assert_eq!(ledger.cached_override(10).unwrap().booked, 1);

        // A second identical call increments to exactly 2, not capped
        service.create_booking(tour_request("2 Adults")).await.unwrap();
        assert_eq!(ledger.cached_override(10).unwrap().booked, 2);

        // Counter was synced durably as well
        let repo = service.repository.overrides.get(10).await.unwrap().unwrap();
        assert_eq!(repo.booked, 2);
    }

    #[tokio::test]
    async fn committed_booking_lands_in_ledger_and_store() {
        let (service, ledger) = service(in_memory_repo());
        let booking = service.create_booking(tour_request("2 Adults")).await.unwrap();

        assert!(ledger.find(booking.id).is_some());
        let stored = service.repository.bookings.get(booking.id).await.unwrap();
        assert_eq!(stored.unwrap().id, booking.id);
    }

    #[tokio::test]
    async fn primary_write_failure_rolls_back_the_optimistic_booking() {
        let mut store = MockBookingStore::new();
        store
            .expect_create()
            .returning(|_| Err(AppError::Persistence("store is down".to_string())));

        let repository = Repository {
            bookings: Arc::new(store),
            overrides: Arc::new(InMemoryOverrideStore::new()),
            master_data: Arc::new(InMemoryMasterData::new(packages(), Vec::new(), Vec::new())),
        };
        let (service, ledger) = service(repository);

        let outcome = service.commit(tour_request("2 Adults")).await;
        assert!(matches!(
            outcome,
            CommitOutcome::RolledBack(AppError::Persistence(_))
        ));

        // The counter bump is never reverted, even on rollback; the phantom
        // occupancy is the accepted cost of the one-sided compensation
        assert_eq!(ledger.cached_override(10).unwrap().booked, 1);

        // And the Result-facing wrapper surfaces the same failure
        let result = service.create_booking(tour_request("2 Adults")).await;
        assert!(matches!(result, Err(AppError::Persistence(_))));
        assert_eq!(ledger.cached_override(10).unwrap().booked, 2);

        // The booking must not be visible anywhere
        assert!(ledger.snapshot().is_empty());
        let slot = resolve_slot(
            ResourceType::Car,
            None,
            NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            &[],
            &[],
            None,
            &ledger.snapshot(),
            &defaults(),
        );
        assert_eq!(slot.booked, 0);
    }

    #[tokio::test]
    async fn secondary_write_failure_keeps_the_committed_booking() {
        let mut overrides = MockOverrideStore::new();
        overrides
            .expect_get()
            .returning(|_| Ok(None));
        overrides
            .expect_put()
            .returning(|_| Err(AppError::Persistence("override store is down".to_string())));

        let repository = Repository {
            bookings: Arc::new(InMemoryBookingStore::new()),
            overrides: Arc::new(overrides),
            master_data: Arc::new(InMemoryMasterData::new(packages(), Vec::new(), Vec::new())),
        };
        let (service, ledger) = service(repository);

        // Caller sees success despite the diverged counter
        let booking = service.create_booking(tour_request("2 Adults")).await.unwrap();
        assert!(ledger.find(booking.id).is_some());
        assert_eq!(ledger.cached_override(10).unwrap().booked, 1);
    }

    #[tokio::test]
    async fn remaining_seats_synced_after_commit() {
        let repository = in_memory_repo();
        let (service, _) = service(repository.clone());

        service.create_booking(tour_request("2 Adults, 1 Child")).await.unwrap();

        let packages = repository.master_data.list_tour_packages().await.unwrap();
        assert_eq!(packages[0].remaining_seats, Some(15));
    }

    #[tokio::test]
    async fn cancellation_updates_status_but_not_the_counter() {
        let (service, ledger) = service(in_memory_repo());
        let booking = service.create_booking(tour_request("2 Adults")).await.unwrap();
        assert_eq!(ledger.cached_override(10).unwrap().booked, 1);

        let updated = service
            .set_status(booking.id, BookingStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);
        // Known asymmetry: the stored tour counter does not drop
        assert_eq!(ledger.cached_override(10).unwrap().booked, 1);
    }

    #[tokio::test]
    async fn admin_override_write_bypasses_counter_logic() {
        let (service, _) = service(in_memory_repo());

        let row = service
            .update_override(
                15,
                OverridePatch {
                    capacity: Some(30),
                    price: Some(42000),
                    blocked: Some(true),
                },
            )
            .await
            .unwrap();
        assert_eq!(row.capacity, 30);
        assert_eq!(row.price, 42000);
        assert!(row.blocked);
        assert_eq!(row.booked, 0);

        // Partial patch keeps prior values
        let row = service
            .update_override(
                15,
                OverridePatch {
                    blocked: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(row.capacity, 30);
        assert!(!row.blocked);
    }

    #[tokio::test]
    async fn override_patch_rejects_negative_values() {
        let (service, _) = service(in_memory_repo());

        let result = service
            .update_override(
                5,
                OverridePatch {
                    capacity: Some(-1),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = service.update_override(32, OverridePatch::default()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn refresh_reseeds_the_mirror() {
        let repository = in_memory_repo();
        let (service, ledger) = service(repository.clone());

        service.create_booking(tour_request("2 Adults")).await.unwrap();
        ledger.seed(Vec::new());
        assert!(ledger.snapshot().is_empty());

        let count = service.refresh().await.unwrap();
        assert_eq!(count, 1);
        assert_eq!(ledger.snapshot().len(), 1);
    }
}
