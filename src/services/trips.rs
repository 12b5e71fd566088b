//! Trip management service

use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::trip::{CreateTrip, Trip, UpdateTrip},
    repository::Repository,
};

#[derive(Clone)]
pub struct TripsService {
    repository: Repository,
}

impl TripsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all trips ordered by creation time
    pub async fn list(&self) -> AppResult<Vec<Trip>> {
        self.repository.trips.list().await
    }

    /// List featured trips
    pub async fn list_featured(&self) -> AppResult<Vec<Trip>> {
        self.repository.trips.list_featured().await
    }

    /// Get trip by ID
    pub async fn get(&self, id: &str) -> AppResult<Trip> {
        self.repository.trips.get_by_id(id).await
    }

    /// Get trip by slug (public page lookup)
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Trip> {
        self.repository.trips.get_by_slug(slug).await
    }

    /// Create a new trip. `slug`, `title` and `data` are required; the id
    /// is generated when the caller does not supply one.
    pub async fn create(&self, payload: CreateTrip) -> AppResult<Trip> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let (slug, title, data) = match (
            payload.slug.filter(|s| !s.is_empty()),
            payload.title.filter(|t| !t.is_empty()),
            payload.data,
        ) {
            (Some(slug), Some(title), Some(data)) => (slug, title, data),
            _ => {
                return Err(AppError::Validation(
                    "slug, title and data are required".to_string(),
                ))
            }
        };

        data.validate().map_err(AppError::Validation)?;

        if self.repository.trips.slug_exists(&slug, None).await? {
            return Err(AppError::Conflict(
                "A trip with this slug already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let meta = payload.meta.unwrap_or_default();
        let trip = Trip {
            id: payload.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            slug,
            title,
            featured: payload.featured,
            summary: payload.summary,
            meta_title: meta.title,
            meta_description: meta.description,
            meta_og_image: meta.og_image,
            data: Json(data),
            created_at: now,
            updated_at: now,
        };

        self.repository.trips.insert(&trip).await
    }

    /// Apply a merge-patch update to a trip
    pub async fn update(&self, id: &str, patch: UpdateTrip) -> AppResult<Trip> {
        if let Some(ref data) = patch.data {
            data.validate().map_err(AppError::Validation)?;
        }

        if let Some(ref slug) = patch.slug {
            if self.repository.trips.slug_exists(slug, Some(id)).await? {
                return Err(AppError::Conflict(
                    "A trip with this slug already exists".to_string(),
                ));
            }
        }

        self.repository.trips.update(id, &patch, Utc::now()).await
    }

    /// Delete a trip, returning the deleted entity
    pub async fn delete(&self, id: &str) -> AppResult<Trip> {
        self.repository.trips.delete(id).await
    }
}
