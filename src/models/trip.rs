//! Trip model and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::trip_data::TripData;

/// Trip record as stored and served.
///
/// Wire field names are camelCase to match the admin client; DB columns
/// are the snake_case struct field names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub featured: bool,
    pub summary: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_og_image: Option<String>,
    #[schema(value_type = TripData)]
    pub data: Json<TripData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Nested `meta` object on create requests; maps onto the meta_* columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MetaInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image: Option<String>,
}

/// Nested `meta` object on update requests.
///
/// Each field distinguishes absent (leave column untouched) from
/// null (clear the column).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MetaPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub og_image: Option<Option<String>>,
}

impl MetaPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.og_image.is_none()
    }
}

/// Create trip request. `slug`, `title` and `data` are required;
/// the id is generated when absent.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTrip {
    pub id: Option<String>,
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub summary: Option<String>,
    pub meta: Option<MetaInput>,
    pub data: Option<TripData>,
}

/// Merge-patch update for a trip. Only fields present in the request body
/// are applied. `data`, when present, replaces the whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTrip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub summary: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<TripData>,
}

impl UpdateTrip {
    /// True when the patch would touch nothing.
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.title.is_none()
            && self.featured.is_none()
            && self.summary.is_none()
            && self.meta.as_ref().map_or(true, MetaPatch::is_empty)
            && self.data.is_none()
    }
}
