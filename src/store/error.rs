// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

//! Error types for the store.

use std::path::PathBuf;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database error from SQLite.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Failed to create the database directory.
    #[error("Failed to create database directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Sensor not found in the database.
    #[error("Sensor not found: {0}")]
    SensorNotFound(i64),

    /// Database schema is newer than this binary understands.
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(i32),
}
