//! Blog post model and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::trip::{MetaInput, MetaPatch};

/// Blog post record as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    /// Rich text markup; may be empty for drafts.
    pub content: String,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub published: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_og_image: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Option<Json<Vec<String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set once, on the first false→true transition of `published`.
    pub published_at: Option<DateTime<Utc>>,
}

/// Create blog post request. `slug` and `title` are required.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    pub id: Option<String>,
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub meta: Option<MetaInput>,
    pub tags: Option<Vec<String>>,
}

/// Merge-patch update for a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub excerpt: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub cover_image: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaPatch>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Option<Option<Vec<String>>>,
}

/// Compute the `published_at` value an update should write, if any.
///
/// Returns `Some(now)` exactly when the post transitions from unpublished
/// to published for the first time. A timestamp that already exists is
/// never overwritten, so unpublish/republish cycles keep the original
/// first-publish instant.
pub fn first_publish_stamp(
    post: &BlogPost,
    published_patch: Option<bool>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match published_patch {
        Some(true) if !post.published && post.published_at.is_none() => Some(now),
        _ => None,
    }
}
