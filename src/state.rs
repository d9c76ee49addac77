// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::auth::AuthKeys;
use crate::store::Store;

/// Shared application state, cheap to clone per request.
///
/// The store sits behind an async mutex because the SQLite connection
/// cannot be shared between threads directly.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    pub auth: AuthKeys,
}

impl AppState {
    pub fn new(store: Store, auth: AuthKeys) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            auth,
        }
    }
}
