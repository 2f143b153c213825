//! LabTrack Server
//!
//! A REST JSON API for tracking laboratory equipment, manufacturers,
//! projects and project inquiries, with per-device change history and
//! image uploads.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
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
