//! End-to-end reservation scenarios over the in-memory stores

use chrono::NaiveDate;

use yatri_server::{
    config::InventoryConfig,
    models::{
        catalog::{BusAsset, FleetVehicle, TourPackage},
        enums::{BookingStatus, ResourceType, SlotStatus},
        booking::CreateBooking,
    },
    repository::Repository,
    services::Services,
};

fn repository() -> Repository {
    Repository::in_memory(
        vec![TourPackage {
            id: "PKG-A".to_string(),
            name: "Golden Triangle".to_string(),
            capacity_default: 20,
            price_default: 35000,
            remaining_seats: None,
        }],
        vec![FleetVehicle {
            id: "V1".to_string(),
            name: "Innova Crysta".to_string(),
            capacity: 6,
            base_rate: 4500,
            vehicle_class: Some("SUV".to_string()),
        }],
        vec![BusAsset {
            id: "B1".to_string(),
            name: "Volvo 9600".to_string(),
            capacity: 40,
            base_rate: 18000,
        }],
    )
}

fn inventory() -> InventoryConfig {
    InventoryConfig {
        tour_default_capacity: 20,
        tour_default_price: 35000,
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()
}

fn request(resource_type: ResourceType, title: &str, guests: Option<&str>) -> CreateBooking {
    CreateBooking {
        resource_type,
        package_id: matches!(resource_type, ResourceType::Tour).then(|| "PKG-A".to_string()),
        title: title.to_string(),
        details: None,
        date: date(),
        guest_spec: guests.map(str::to_string),
        status: None,
        customer_name: None,
    }
}

#[tokio::test]
async fn tour_bookings_drive_the_override_counter() {
    let services = Services::new(repository(), inventory()).await.unwrap();

    // Default slot before any booking
    let slot = services
        .availability
        .resolve_day(ResourceType::Tour, Some("PKG-A"), date())
        .await
        .unwrap();
    assert_eq!(slot.capacity, 20);
    assert_eq!(slot.booked, 0);
    assert_eq!(slot.price, 35000);
    assert_eq!(slot.status, SlotStatus::Available);

    services
        .bookings
        .create_booking(request(ResourceType::Tour, "Golden Triangle", Some("2 Adults")))
        .await
        .unwrap();

    let slot = services
        .availability
        .resolve_day(ResourceType::Tour, Some("PKG-A"), date())
        .await
        .unwrap();
    assert_eq!(slot.booked, 1);

    // Second identical call: exactly 2, monotonic
    services
        .bookings
        .create_booking(request(ResourceType::Tour, "Golden Triangle", Some("2 Adults")))
        .await
        .unwrap();

    let slot = services
        .availability
        .resolve_day(ResourceType::Tour, Some("PKG-A"), date())
        .await
        .unwrap();
    assert_eq!(slot.booked, 2);
}

#[tokio::test]
async fn cancelled_car_booking_drops_from_the_next_read() {
    let services = Services::new(repository(), inventory()).await.unwrap();

    let booking = services
        .bookings
        .create_booking(request(
            ResourceType::Car,
            "Innova Crysta airport run",
            None,
        ))
        .await
        .unwrap();

    let slot = services
        .availability
        .resolve_day(ResourceType::Car, Some("Innova Crysta"), date())
        .await
        .unwrap();
    assert_eq!(slot.booked, 1);

    services
        .bookings
        .set_status(booking.id, BookingStatus::Cancelled)
        .await
        .unwrap();

    // Re-derived occupancy reflects the cancellation without any
    // compensating write
    let slot = services
        .availability
        .resolve_day(ResourceType::Car, Some("Innova Crysta"), date())
        .await
        .unwrap();
    assert_eq!(slot.booked, 0);
}

#[tokio::test]
async fn bus_pool_counts_seats_across_bookings() {
    let services = Services::new(repository(), inventory()).await.unwrap();

    services
        .bookings
        .create_booking(request(ResourceType::Bus, "Temple circuit", Some("10 Adults")))
        .await
        .unwrap();
    services
        .bookings
        .create_booking(request(
            ResourceType::Bus,
            "Temple circuit",
            Some("5 Adults, 2 Children"),
        ))
        .await
        .unwrap();

    let slot = services
        .availability
        .resolve_day(ResourceType::Bus, None, date())
        .await
        .unwrap();
    assert_eq!(slot.capacity, 40);
    assert_eq!(slot.booked, 17);
    assert_eq!(slot.status, SlotStatus::Available);
}

#[tokio::test]
async fn month_view_resolves_one_slot_per_day() {
    let services = Services::new(repository(), inventory()).await.unwrap();

    services
        .bookings
        .create_booking(request(ResourceType::Tour, "Golden Triangle", Some("2 Adults")))
        .await
        .unwrap();

    let cells = services
        .availability
        .month_view(ResourceType::Tour, Some("PKG-A"), 2026, 9)
        .await
        .unwrap();
    assert_eq!(cells.len(), 30);

    let day10 = &cells[9];
    assert_eq!(day10.date, date());
    assert_eq!(day10.booked, 1);

    // Overrides are keyed by day of month, so other days stay at defaults
    assert_eq!(cells[0].booked, 0);
    assert_eq!(cells[0].capacity, 20);
}

#[tokio::test]
async fn blocked_day_shows_blocked_regardless_of_occupancy() {
    let services = Services::new(repository(), inventory()).await.unwrap();

    services
        .bookings
        .update_override(
            10,
            yatri_server::models::slot::OverridePatch {
                blocked: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let slot = services
        .availability
        .resolve_day(ResourceType::Tour, Some("PKG-A"), date())
        .await
        .unwrap();
    assert!(slot.blocked);
    assert_eq!(slot.status, SlotStatus::Blocked);
}
