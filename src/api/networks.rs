// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Network configuration exposed to dapp clients.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::relay::RELAYER_SDK_VERSION;
use crate::state::AppState;

/// One entry of the exposed network list.
#[derive(Debug, Serialize, ToSchema)]
pub struct NetworkInfo {
    /// Network name for display
    pub name: String,
    /// Chain ID
    pub chain_id: u64,
    /// Resolved RPC endpoint (override- and key-aware)
    pub rpc_url: String,
    /// Block explorer URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

/// The configuration bundle a dapp client bootstraps from.
#[derive(Debug, Serialize, ToSchema)]
pub struct NetworksResponse {
    /// Exposed networks, default first.
    pub networks: Vec<NetworkInfo>,
    /// Chain id of the default network (index 0).
    pub default_chain_id: u64,
    /// Polling interval clients should use, milliseconds.
    pub polling_interval_ms: u64,
    /// Relayer-SDK version the asset relay is pinned to.
    pub relayer_sdk_version: String,
}

/// List the networks this gateway exposes.
///
/// Order is significant: clients treat the first entry as the default.
#[utoipa::path(
    get,
    path = "/v1/networks",
    tag = "Networks",
    responses(
        (status = 200, description = "Exposed network list", body = NetworksResponse)
    )
)]
pub async fn list_networks(State(state): State<AppState>) -> Json<NetworksResponse> {
    let networks = state
        .config
        .networks
        .iter()
        .map(|network| NetworkInfo {
            name: network.name.to_string(),
            chain_id: network.chain_id,
            rpc_url: state
                .config
                .rpc_url(network.chain_id)
                .unwrap_or_else(|| network.rpc_url.to_string()),
            explorer_url: network.explorer_url.map(str::to_string),
        })
        .collect();

    Json(NetworksResponse {
        networks,
        default_chain_id: state.config.default_network().chain_id,
        polling_interval_ms: state.config.polling_interval_ms,
        relayer_sdk_version: RELAYER_SDK_VERSION.to_string(),
    })
}
