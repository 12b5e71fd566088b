//! Blog post management service

use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::blog_post::{first_publish_stamp, BlogPost, CreateBlogPost, UpdateBlogPost},
    repository::Repository,
};

#[derive(Clone)]
pub struct BlogService {
    repository: Repository,
}

impl BlogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List posts, newest first; optionally only published ones
    pub async fn list(&self, published_only: bool) -> AppResult<Vec<BlogPost>> {
        self.repository.blog_posts.list(published_only).await
    }

    /// Get post by ID (admin lookup, published or not)
    pub async fn get(&self, id: &str) -> AppResult<BlogPost> {
        self.repository.blog_posts.get_by_id(id).await
    }

    /// Get post by slug. The public page only sees published posts.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<BlogPost> {
        self.repository.blog_posts.get_by_slug(slug, true).await
    }

    /// Create a new post. `slug` and `title` are required; drafts may have
    /// empty content. `published_at` is stamped iff created published.
    pub async fn create(&self, payload: CreateBlogPost) -> AppResult<BlogPost> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let (slug, title) = match (
            payload.slug.filter(|s| !s.is_empty()),
            payload.title.filter(|t| !t.is_empty()),
        ) {
            (Some(slug), Some(title)) => (slug, title),
            _ => {
                return Err(AppError::Validation(
                    "slug and title are required".to_string(),
                ))
            }
        };

        if self.repository.blog_posts.slug_exists(&slug, None).await? {
            return Err(AppError::Conflict(
                "A blog post with this slug already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let meta = payload.meta.unwrap_or_default();
        let post = BlogPost {
            id: payload.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            slug,
            title,
            excerpt: payload.excerpt,
            content: payload.content.unwrap_or_default(),
            cover_image: payload.cover_image,
            author: payload.author,
            published: payload.published,
            meta_title: meta.title,
            meta_description: meta.description,
            meta_og_image: meta.og_image,
            tags: payload.tags.map(Json),
            created_at: now,
            updated_at: now,
            published_at: payload.published.then_some(now),
        };

        self.repository.blog_posts.insert(&post).await
    }

    /// Apply a merge-patch update. The first false→true transition of
    /// `published` stamps `published_at`; it is never re-stamped afterwards.
    pub async fn update(&self, id: &str, patch: UpdateBlogPost) -> AppResult<BlogPost> {
        let current = self.repository.blog_posts.get_by_id(id).await?;

        if let Some(ref slug) = patch.slug {
            if self
                .repository
                .blog_posts
                .slug_exists(slug, Some(id))
                .await?
            {
                return Err(AppError::Conflict(
                    "A blog post with this slug already exists".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let stamp = first_publish_stamp(&current, patch.published, now);

        self.repository
            .blog_posts
            .update(id, &patch, stamp, now)
            .await
    }

    /// Delete a post, returning the deleted entity
    pub async fn delete(&self, id: &str) -> AppResult<BlogPost> {
        self.repository.blog_posts.delete(id).await
    }
}
