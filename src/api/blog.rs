//! Blog post endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost},
};

use super::{DeleteResponse, JsonBody};

#[derive(Deserialize, IntoParams)]
pub struct ListBlogQuery {
    /// Pass `published=true` to restrict the listing to published posts
    pub published: Option<String>,
}

/// List blog posts, newest first
#[utoipa::path(
    get,
    path = "/blog",
    tag = "blog",
    params(ListBlogQuery),
    responses(
        (status = 200, description = "List of blog posts", body = Vec<BlogPost>)
    )
)]
pub async fn list_posts(
    State(state): State<crate::AppState>,
    Query(query): Query<ListBlogQuery>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let published_only = query.published.as_deref() == Some("true");
    let posts = state.services.blog.list(published_only).await?;
    Ok(Json(posts))
}

/// Get blog post by ID
#[utoipa::path(
    get,
    path = "/blog/{id}",
    tag = "blog",
    params(
        ("id" = String, Path, description = "Blog post ID")
    ),
    responses(
        (status = 200, description = "Blog post details", body = BlogPost),
        (status = 404, description = "Blog post not found")
    )
)]
pub async fn get_post(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = state.services.blog.get(&id).await?;
    Ok(Json(post))
}

/// Get a published blog post by slug (public page lookup)
#[utoipa::path(
    get,
    path = "/blog/slug/{slug}",
    tag = "blog",
    params(
        ("slug" = String, Path, description = "Blog post slug")
    ),
    responses(
        (status = 200, description = "Blog post details", body = BlogPost),
        (status = 404, description = "No published post with this slug")
    )
)]
pub async fn get_post_by_slug(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = state.services.blog.get_by_slug(&slug).await?;
    Ok(Json(post))
}

/// Create a new blog post
#[utoipa::path(
    post,
    path = "/blog",
    tag = "blog",
    request_body = CreateBlogPost,
    responses(
        (status = 200, description = "Blog post created", body = BlogPost),
        (status = 400, description = "Missing slug or title"),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn create_post(
    State(state): State<crate::AppState>,
    JsonBody(payload): JsonBody<CreateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    let created = state.services.blog.create(payload).await?;
    Ok(Json(created))
}

/// Partially update a blog post. The first false→true transition of
/// `published` stamps `publishedAt`.
#[utoipa::path(
    put,
    path = "/blog/{id}",
    tag = "blog",
    params(
        ("id" = String, Path, description = "Blog post ID")
    ),
    request_body = UpdateBlogPost,
    responses(
        (status = 200, description = "Blog post updated", body = BlogPost),
        (status = 404, description = "Blog post not found"),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn update_post(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    let updated = state.services.blog.update(&id, patch).await?;
    Ok(Json(updated))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/blog/{id}",
    tag = "blog",
    params(
        ("id" = String, Path, description = "Blog post ID")
    ),
    responses(
        (status = 200, description = "Blog post deleted", body = DeleteResponse),
        (status = 404, description = "Blog post not found")
    )
)]
pub async fn delete_post(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.blog.delete(&id).await?;
    Ok(Json(DeleteResponse::ok()))
}
