//! IT asset dashboard server
//!
//! Serves the activity log, inventory views and reports of an IT asset
//! dashboard as a REST JSON API, on top of an external asset API that
//! remains the system of record.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
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
