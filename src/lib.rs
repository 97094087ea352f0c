//! Yatri Travel Back-Office Server
//!
//! A Rust implementation of the travel-agency back-office reservation core:
//! booking reconciliation with optimistic rollback and derived availability
//! for tour, car and bus resources, served over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod guests;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
