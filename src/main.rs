// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

use std::net::SocketAddr;
use std::process;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use smarthome_api::{api, auth::AuthKeys, config::Config, state::AppState, store::Store};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("smarthome_api=info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Refusing to boot beats serving tokens signed with a default key.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("smarthome-api: {err}");
            process::exit(1);
        }
    };

    let store = Store::open(&config.database_path).expect("Failed to open database");

    if let Some(seed) = &config.seed_user {
        store
            .upsert_user(&seed.username, &seed.password)
            .expect("Failed to provision seed user");
        info!(username = %seed.username, "Provisioned login user from environment");
    }

    let state = AppState::new(store, AuthKeys::from_secret(config.signing_key.as_bytes()));
    let app = api::router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    info!("Smarthome API listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await
        .expect("Server failed");
}
