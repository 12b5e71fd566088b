//! Trips repository

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::trip::{Trip, UpdateTrip},
};

#[derive(Clone)]
pub struct TripsRepository {
    pool: Pool<Postgres>,
}

impl TripsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all trips, ordered by creation time ascending
    pub async fn list(&self) -> AppResult<Vec<Trip>> {
        let trips = sqlx::query_as::<_, Trip>("SELECT * FROM trips ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(trips)
    }

    /// List featured trips, ordered by creation time ascending
    pub async fn list_featured(&self) -> AppResult<Vec<Trip>> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE featured = TRUE ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(trips)
    }

    /// Get trip by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Trip> {
        sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", id)))
    }

    /// Get trip by slug. Admin and public share this lookup.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Trip> {
        sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip with slug '{}' not found", slug)))
    }

    /// Check if a slug is already taken by another trip
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<&str>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM trips WHERE slug = $1 AND id != $2)")
                .bind(slug)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM trips WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Insert a new trip
    pub async fn insert(&self, trip: &Trip) -> AppResult<Trip> {
        let inserted = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, slug, title, featured, summary,
                meta_title, meta_description, meta_og_image,
                data, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&trip.id)
        .bind(&trip.slug)
        .bind(&trip.title)
        .bind(trip.featured)
        .bind(&trip.summary)
        .bind(&trip.meta_title)
        .bind(&trip.meta_description)
        .bind(&trip.meta_og_image)
        .bind(&trip.data)
        .bind(trip.created_at)
        .bind(trip.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(inserted)
    }

    /// Apply a merge-patch update. Only fields present in the patch are
    /// written; `data` replaces the whole document. `updated_at` is
    /// refreshed on every successful update.
    pub async fn update(
        &self,
        id: &str,
        patch: &UpdateTrip,
        now: DateTime<Utc>,
    ) -> AppResult<Trip> {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE trips SET updated_at = ");
        qb.push_bind(now);

        if let Some(ref slug) = patch.slug {
            qb.push(", slug = ").push_bind(slug);
        }
        if let Some(ref title) = patch.title {
            qb.push(", title = ").push_bind(title);
        }
        if let Some(featured) = patch.featured {
            qb.push(", featured = ").push_bind(featured);
        }
        if let Some(ref summary) = patch.summary {
            // Some(None) clears the column
            qb.push(", summary = ").push_bind(summary);
        }
        if let Some(ref meta) = patch.meta {
            if let Some(ref title) = meta.title {
                qb.push(", meta_title = ").push_bind(title);
            }
            if let Some(ref description) = meta.description {
                qb.push(", meta_description = ").push_bind(description);
            }
            if let Some(ref og_image) = meta.og_image {
                qb.push(", meta_og_image = ").push_bind(og_image);
            }
        }
        if let Some(ref data) = patch.data {
            qb.push(", data = ").push_bind(Json(data));
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<Trip>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", id)))
    }

    /// Delete a trip, returning the deleted row
    pub async fn delete(&self, id: &str) -> AppResult<Trip> {
        sqlx::query_as::<_, Trip>("DELETE FROM trips WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", id)))
    }
}
