// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, HeaderName, StatusCode},
    Json,
};

use crate::{
    error::ApiError,
    models::{CreateSensorRequest, Sensor, UpdateSensorRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/sensores",
    tag = "Sensors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = [Sensor]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_sensors(State(state): State<AppState>) -> Result<Json<Vec<Sensor>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.list_sensors()?))
}

#[utoipa::path(
    get,
    path = "/sensores/{id}",
    params(("id" = i64, Path, description = "Sensor id")),
    tag = "Sensors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = Sensor),
        (status = 404, description = "No sensor with that id"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_sensor(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Sensor>, ApiError> {
    let store = state.store.lock().await;
    let sensor = store
        .get_sensor(id)?
        .ok_or_else(|| ApiError::not_found(format!("no sensor with id {id}")))?;
    Ok(Json(sensor))
}

/// Create a sensor record.
///
/// The store assigns the id and stamps `recordedAt` from the server clock;
/// anything the client sends for either is ignored.
#[utoipa::path(
    post,
    path = "/sensores",
    request_body = CreateSensorRequest,
    tag = "Sensors",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 201,
            body = Sensor,
            headers(("Location" = String, description = "URL of the created sensor"))
        ),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_sensor(
    State(state): State<AppState>,
    Json(request): Json<CreateSensorRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Sensor>), ApiError> {
    let store = state.store.lock().await;
    let sensor = store.create_sensor(&request.name, request.value)?;

    let location = format!("/sensores/{}", sensor.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(sensor)))
}

/// Overwrite name and value of an existing sensor record.
///
/// Id and `recordedAt` are immutable after creation.
#[utoipa::path(
    put,
    path = "/sensores/{id}",
    params(("id" = i64, Path, description = "Sensor id")),
    request_body = UpdateSensorRequest,
    tag = "Sensors",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "No sensor with that id"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn update_sensor(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateSensorRequest>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.lock().await;
    store.update_sensor(id, &request.name, request.value)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/sensores/{id}",
    params(("id" = i64, Path, description = "Sensor id")),
    tag = "Sensors",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No sensor with that id"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn delete_sensor(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.lock().await;
    store.delete_sensor(id)?;
    Ok(StatusCode::NO_CONTENT)
}
