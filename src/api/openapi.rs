//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{availability, bookings, catalog, health, overrides};
use crate::error::ErrorResponse;
use crate::models::{
    booking::{Booking, CreateBooking, UpdateBookingStatus},
    catalog::{BusAsset, FleetVehicle, TourPackage},
    enums::{BookingStatus, ResourceType, SlotStatus},
    slot::{OverridePatch, Slot, SlotOverride, SlotView},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yatri API",
        version = "1.0.0",
        description = "Travel Agency Back-Office Reservation REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking_status,
        // Availability
        availability::day_view,
        availability::month_view,
        // Overrides
        overrides::list_overrides,
        overrides::get_override,
        overrides::update_override,
        // Catalog
        catalog::list_packages,
        catalog::list_vehicles,
        catalog::list_buses,
    ),
    components(
        schemas(
            health::HealthResponse,
            ErrorResponse,
            Booking,
            CreateBooking,
            UpdateBookingStatus,
            BookingStatus,
            ResourceType,
            SlotStatus,
            Slot,
            SlotView,
            SlotOverride,
            OverridePatch,
            TourPackage,
            FleetVehicle,
            BusAsset,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "bookings", description = "Booking reconciliation"),
        (name = "availability", description = "Derived availability views"),
        (name = "overrides", description = "Manual tour overrides"),
        (name = "catalog", description = "Master-data catalog")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
