// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

/// Plain text greeting at the root, reachable without a token.
#[utoipa::path(
    get,
    path = "/",
    tag = "Greeting",
    responses((status = 200, description = "Greeting text", body = String, content_type = "text/plain"))
)]
pub async fn greeting() -> &'static str {
    "Bienevenido a la API"
}
