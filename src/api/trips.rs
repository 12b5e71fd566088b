//! Trip endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::trip::{CreateTrip, Trip, UpdateTrip},
};

use super::{DeleteResponse, JsonBody};

/// List all trips ordered by creation time
#[utoipa::path(
    get,
    path = "/trips",
    tag = "trips",
    responses(
        (status = 200, description = "List of trips", body = Vec<Trip>)
    )
)]
pub async fn list_trips(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Trip>>> {
    let trips = state.services.trips.list().await?;
    Ok(Json(trips))
}

/// List featured trips
#[utoipa::path(
    get,
    path = "/trips/featured",
    tag = "trips",
    responses(
        (status = 200, description = "List of featured trips", body = Vec<Trip>)
    )
)]
pub async fn list_featured_trips(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Trip>>> {
    let trips = state.services.trips.list_featured().await?;
    Ok(Json(trips))
}

/// Get trip by ID
#[utoipa::path(
    get,
    path = "/trips/{id}",
    tag = "trips",
    params(
        ("id" = String, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Trip details", body = Trip),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn get_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Trip>> {
    let trip = state.services.trips.get(&id).await?;
    Ok(Json(trip))
}

/// Get trip by slug (public page lookup)
#[utoipa::path(
    get,
    path = "/trips/slug/{slug}",
    tag = "trips",
    params(
        ("slug" = String, Path, description = "Trip slug")
    ),
    responses(
        (status = 200, description = "Trip details", body = Trip),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn get_trip_by_slug(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Trip>> {
    let trip = state.services.trips.get_by_slug(&slug).await?;
    Ok(Json(trip))
}

/// Create a new trip
#[utoipa::path(
    post,
    path = "/trips",
    tag = "trips",
    request_body = CreateTrip,
    responses(
        (status = 201, description = "Trip created", body = Trip),
        (status = 400, description = "Missing slug, title or data"),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn create_trip(
    State(state): State<crate::AppState>,
    JsonBody(payload): JsonBody<CreateTrip>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    let created = state.services.trips.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a trip. Only fields present in the body are applied;
/// `data` replaces the whole document.
#[utoipa::path(
    put,
    path = "/trips/{id}",
    tag = "trips",
    params(
        ("id" = String, Path, description = "Trip ID")
    ),
    request_body = UpdateTrip,
    responses(
        (status = 200, description = "Trip updated", body = Trip),
        (status = 404, description = "Trip not found"),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn update_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateTrip>,
) -> AppResult<Json<Trip>> {
    let updated = state.services.trips.update(&id, patch).await?;
    Ok(Json(updated))
}

/// Delete a trip
#[utoipa::path(
    delete,
    path = "/trips/{id}",
    tag = "trips",
    params(
        ("id" = String, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Trip deleted", body = DeleteResponse),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn delete_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.trips.delete(&id).await?;
    Ok(Json(DeleteResponse::ok()))
}
