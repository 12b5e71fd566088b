//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{blog, health, trips};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TripVista API",
        version = "1.0.0",
        description = "Travel agency content management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Trips
        trips::list_trips,
        trips::list_featured_trips,
        trips::get_trip,
        trips::get_trip_by_slug,
        trips::create_trip,
        trips::update_trip,
        trips::delete_trip,
        // Blog
        blog::list_posts,
        blog::get_post,
        blog::get_post_by_slug,
        blog::create_post,
        blog::update_post,
        blog::delete_post,
    ),
    components(
        schemas(
            // Trips
            crate::models::trip::Trip,
            crate::models::trip::CreateTrip,
            crate::models::trip::UpdateTrip,
            crate::models::trip::MetaInput,
            crate::models::trip::MetaPatch,
            crate::models::trip_data::TripData,
            crate::models::trip_data::Hero,
            crate::models::trip_data::GalleryImage,
            crate::models::trip_data::Overview,
            crate::models::trip_data::InfoTag,
            crate::models::trip_data::SectionImage,
            crate::models::trip_data::ItineraryDay,
            crate::models::trip_data::Activity,
            crate::models::trip_data::Accommodation,
            crate::models::trip_data::Pricing,
            crate::models::trip_data::PriceRow,
            crate::models::trip_data::FaqEntry,
            // Blog
            crate::models::blog_post::BlogPost,
            crate::models::blog_post::CreateBlogPost,
            crate::models::blog_post::UpdateBlogPost,
            // Shared
            crate::api::DeleteResponse,
            crate::error::ErrorResponse,
            // Health
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "trips", description = "Trip content management"),
        (name = "blog", description = "Blog post management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
