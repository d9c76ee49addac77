// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

//! Bearer token gate for protected routes.
//!
//! Composed onto the sensor subtree in `api::router` with
//! `axum::middleware::from_fn_with_state`, so requests only reach a
//! handler after the token checks out:
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/sensores", get(list_sensors))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::AuthError;
use crate::state::AppState;

/// Reject the request unless it carries a valid bearer token.
///
/// Any structurally valid, unexpired token signed with the configured key
/// passes; there is no per-user distinction at this layer.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // Extract Authorization header
    let auth_header = match request.headers().get(AUTHORIZATION) {
        Some(header) => header,
        None => return AuthError::MissingAuthHeader.into_response(),
    };

    // Parse Bearer token
    let auth_str = match auth_header.to_str() {
        Ok(s) => s,
        Err(_) => return AuthError::InvalidAuthHeader.into_response(),
    };

    let token = match auth_str.strip_prefix("Bearer ") {
        Some(t) => t.trim(),
        None => return AuthError::InvalidAuthHeader.into_response(),
    };

    match state.auth.verify_token(token) {
        Ok(_) => next.run(request).await,
        Err(e) => e.into_response(),
    }
}
