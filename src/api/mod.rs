//! API handlers for Yatri REST endpoints

pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod health;
pub mod openapi;
pub mod overrides;

use crate::{error::AppError, models::enums::ResourceType};

/// Parse a resource-class path segment.
pub(crate) fn parse_class(segment: &str) -> Result<ResourceType, AppError> {
    match segment.to_ascii_lowercase().as_str() {
        "tour" => Ok(ResourceType::Tour),
        "car" => Ok(ResourceType::Car),
        "bus" => Ok(ResourceType::Bus),
        "hotel" => Ok(ResourceType::Hotel),
        other => Err(AppError::BadRequest(format!(
            "Unknown resource class: {}",
            other
        ))),
    }
}
