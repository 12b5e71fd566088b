//! Blog posts repository

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::blog_post::{BlogPost, UpdateBlogPost},
};

#[derive(Clone)]
pub struct BlogPostsRepository {
    pool: Pool<Postgres>,
}

impl BlogPostsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List posts, newest first. `published_only` restricts to published posts.
    pub async fn list(&self, published_only: bool) -> AppResult<Vec<BlogPost>> {
        let posts = if published_only {
            sqlx::query_as::<_, BlogPost>(
                "SELECT * FROM blog_posts WHERE published = TRUE ORDER BY created_at DESC",
            )
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?
        };
        Ok(posts)
    }

    /// Get post by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<BlogPost> {
        sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", id)))
    }

    /// Get post by slug. The public lookup additionally requires the post
    /// to be published.
    pub async fn get_by_slug(&self, slug: &str, published_only: bool) -> AppResult<BlogPost> {
        let query = if published_only {
            "SELECT * FROM blog_posts WHERE slug = $1 AND published = TRUE"
        } else {
            "SELECT * FROM blog_posts WHERE slug = $1"
        };
        sqlx::query_as::<_, BlogPost>(query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post with slug '{}' not found", slug)))
    }

    /// Check if a slug is already taken by another post
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<&str>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = $1 AND id != $2)",
            )
            .bind(slug)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Insert a new post
    pub async fn insert(&self, post: &BlogPost) -> AppResult<BlogPost> {
        let inserted = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (
                id, slug, title, excerpt, content, cover_image, author, published,
                meta_title, meta_description, meta_og_image, tags,
                created_at, updated_at, published_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(&post.id)
        .bind(&post.slug)
        .bind(&post.title)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.cover_image)
        .bind(&post.author)
        .bind(post.published)
        .bind(&post.meta_title)
        .bind(&post.meta_description)
        .bind(&post.meta_og_image)
        .bind(&post.tags)
        .bind(post.created_at)
        .bind(post.updated_at)
        .bind(post.published_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(inserted)
    }

    /// Apply a merge-patch update. `published_at` is written only when the
    /// service decided this update is the first publish.
    pub async fn update(
        &self,
        id: &str,
        patch: &UpdateBlogPost,
        published_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> AppResult<BlogPost> {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE blog_posts SET updated_at = ");
        qb.push_bind(now);

        if let Some(ref slug) = patch.slug {
            qb.push(", slug = ").push_bind(slug);
        }
        if let Some(ref title) = patch.title {
            qb.push(", title = ").push_bind(title);
        }
        if let Some(ref excerpt) = patch.excerpt {
            qb.push(", excerpt = ").push_bind(excerpt);
        }
        if let Some(ref content) = patch.content {
            qb.push(", content = ").push_bind(content);
        }
        if let Some(ref cover_image) = patch.cover_image {
            qb.push(", cover_image = ").push_bind(cover_image);
        }
        if let Some(ref author) = patch.author {
            qb.push(", author = ").push_bind(author);
        }
        if let Some(published) = patch.published {
            qb.push(", published = ").push_bind(published);
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
        if let Some(ref tags) = patch.tags {
            qb.push(", tags = ")
                .push_bind(tags.as_ref().map(Json));
        }
        if let Some(stamp) = published_at {
            qb.push(", published_at = ").push_bind(stamp);
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<BlogPost>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", id)))
    }

    /// Delete a post, returning the deleted row
    pub async fn delete(&self, id: &str) -> AppResult<BlogPost> {
        sqlx::query_as::<_, BlogPost>("DELETE FROM blog_posts WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", id)))
    }
}
