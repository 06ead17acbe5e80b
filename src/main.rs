// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr, sync::Arc};

use donate_actions_server::{
    api::router,
    blockchain::EthClient,
    config::{DEFAULT_LOG_FILTER, ETHEREUM_RPC_URL_ENV, HOST_ENV, LOG_FORMAT_ENV, PORT_ENV},
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    // The chain client is the only external dependency (panics if unset -
    // the service cannot prepare transactions without an RPC endpoint).
    let rpc_url = env::var(ETHEREUM_RPC_URL_ENV).expect("ETHEREUM_RPC_URL must be set");
    let chain = EthClient::new(&rpc_url).expect("Failed to create Ethereum RPC client");

    let state = AppState::new(Arc::new(chain));
    let app = router(state);

    // Parse bind address
    let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(PORT_ENV)
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!("Donate actions server listening on http://{addr} (docs at /docs)");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
