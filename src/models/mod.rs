//! Data models for TripVista

pub mod blog_post;
pub mod trip;
pub mod trip_data;

// Re-export commonly used types
pub use blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
pub use trip::{CreateTrip, Trip, UpdateTrip};
pub use trip_data::TripData;
