// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

//! Bearer token claims.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Token lifetime: one hour from issuance.
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Claims carried by a bearer token.
///
/// Deliberately minimal: only the expiry. There is no subject or role to
/// encode, since possession of a valid unexpired token is the whole access
/// model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
}

impl Claims {
    /// Claims for a token issued now, expiring after [`TOKEN_LIFETIME_SECS`].
    pub fn issued_now() -> Self {
        Self {
            exp: Utc::now().timestamp() + TOKEN_LIFETIME_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_now_expires_in_one_hour() {
        let before = Utc::now().timestamp();
        let claims = Claims::issued_now();
        let after = Utc::now().timestamp();

        assert!(claims.exp >= before + TOKEN_LIFETIME_SECS);
        assert!(claims.exp <= after + TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn claims_serialize_to_exp_only() {
        let claims = Claims { exp: 1700003600 };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, serde_json::json!({ "exp": 1700003600 }));
    }
}
