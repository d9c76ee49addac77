// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

//! # Authentication Module
//!
//! Bearer token authentication for the sensor API.
//!
//! ## Auth Flow
//!
//! 1. Client calls `POST /login` with a username and password
//! 2. On success the server issues an HS256 JWT whose only claim is a
//!    one-hour expiry
//! 3. Client sends `Authorization: Bearer <token>` on sensor routes
//! 4. The `require_auth` middleware checks signature and expiry before
//!    the handler runs
//!
//! ## Token Scheme
//!
//! - Single-party: the same symmetric key signs and verifies, and it never
//!   leaves this process
//! - No subject or role claims; any valid unexpired token grants access to
//!   every protected route
//! - Issuer and audience are not validated (there are none to validate)
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod error;
pub mod keys;
pub mod middleware;

pub use claims::Claims;
pub use error::AuthError;
pub use keys::AuthKeys;
pub use middleware::require_auth;
