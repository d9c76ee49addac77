// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

//! # API Data Models
//!
//! Request and response structures for the REST API plus the two persisted
//! record types. API-visible types derive `Serialize`, `Deserialize`, and
//! `ToSchema` for JSON handling and OpenAPI documentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Credential Models
// =============================================================================

/// A login credential pair as stored in the `users` table.
///
/// Never serialized to API responses. The password is plaintext; see the
/// store module notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique username, primary key of the `users` table.
    pub username: String,
    /// Plaintext password compared by equality at login.
    pub password: String,
}

/// Credentials submitted to `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username to look up.
    pub username: String,
    /// Password checked against the stored one.
    pub password: String,
}

// =============================================================================
// Sensor Models
// =============================================================================

/// A sensor reading as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Sensor {
    /// Store-assigned identifier.
    pub id: i64,
    /// Sensor name.
    pub name: String,
    /// Measured value.
    pub value: f64,
    /// Server-side creation time; immutable after creation.
    #[serde(rename = "recordedAt")]
    pub recorded_at: DateTime<Utc>,
}

/// Request to create a sensor record.
///
/// Carries only the client-settable fields. An `id` or `recordedAt` in the
/// request body is ignored; the store assigns both.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSensorRequest {
    /// Sensor name.
    pub name: String,
    /// Measured value.
    pub value: f64,
}

/// Request to overwrite the name and value of an existing sensor record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSensorRequest {
    /// New sensor name.
    pub name: String,
    /// New measured value.
    pub value: f64,
}
