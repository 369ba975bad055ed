// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use fhevm_relayer_gateway::api::router;
use fhevm_relayer_gateway::chain::ProviderHandle;
use fhevm_relayer_gateway::config::{GatewayConfig, RPC_URL_ENV};
use fhevm_relayer_gateway::relay::AssetRelay;
use fhevm_relayer_gateway::state::AppState;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Build the immutable configuration once.
    let config = GatewayConfig::from_env();
    let default_network = config.default_network().clone();

    // Derive the provider handle from the injected endpoint, if any.
    let injected_rpc = env::var(RPC_URL_ENV).ok().filter(|url| !url.is_empty());
    let provider = ProviderHandle::from_endpoint(default_network, injected_rpc.as_deref());
    let connection = provider.connection_state().await;

    let relay = AssetRelay::default();
    tracing::info!(
        cdn_root = %relay.cdn_root(),
        networks = config.networks.len(),
        connected = connection.connected,
        "gateway configured"
    );

    let state = AppState::new(config, connection, provider, relay);
    let app = router(state);

    // Parse bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("FHEVM relayer gateway listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}
