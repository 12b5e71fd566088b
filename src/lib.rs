//! TripVista Content Management System
//!
//! REST JSON API backend for a travel agency website, managing trip
//! pages and blog posts, plus the editing-session layer the admin
//! forms are built on.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod session;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
