// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

//! Smarthome API - Authenticated Sensor Record Service
//!
//! This crate provides a small REST API over sensor records backed by
//! SQLite. Login issues short-lived HS256 bearer tokens and every sensor
//! route requires one.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Bearer token issuing, verification, and the route gate
//! - `store` - SQLite persistence (rusqlite)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
