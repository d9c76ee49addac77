// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

use axum::{extract::State, Json};

use crate::{error::ApiError, models::LoginRequest, state::AppState};

/// Exchange a credential pair for a bearer token.
///
/// An unknown username and a wrong password fail differently (404 vs 401);
/// the stored password is compared by plain equality.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Signed bearer token", body = String),
        (status = 404, description = "Unknown username"),
        (status = 401, description = "Wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<String>, ApiError> {
    let store = state.store.lock().await;
    let user = store
        .get_user(&request.username)?
        .ok_or_else(|| ApiError::not_found(request.username.clone()))?;

    if user.password != request.password {
        tracing::warn!(username = %request.username, "login rejected: wrong password");
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    let token = state.auth.issue_token()?;
    Ok(Json(token))
}
