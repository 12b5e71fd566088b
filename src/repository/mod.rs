//! Repository layer for database operations

pub mod blog_posts;
pub mod trips;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub trips: trips::TripsRepository,
    pub blog_posts: blog_posts::BlogPostsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            trips: trips::TripsRepository::new(pool.clone()),
            blog_posts: blog_posts::BlogPostsRepository::new(pool.clone()),
            pool,
        }
    }
}
