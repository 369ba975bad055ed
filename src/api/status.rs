// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Gateway and chain-connection status.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::chain::ConnectionState;
use crate::state::AppState;

/// Gateway status snapshot.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Connection state derived at startup.
    pub connection: ConnectionState,
    /// Whether a chain provider handle is available.
    pub provider_available: bool,
    /// Chain id of the default network.
    pub default_chain_id: u64,
    /// Current block number from a live probe, when a provider answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    /// Process start time.
    pub started_at: DateTime<Utc>,
    /// Seconds since process start.
    pub uptime_secs: i64,
}

/// Report the gateway's connection state and provider availability.
///
/// When a provider handle is available the block number is probed live; a
/// failed probe is reported as absent, never as an error.
#[utoipa::path(
    get,
    path = "/v1/status",
    tag = "Status",
    responses(
        (status = 200, description = "Gateway status", body = StatusResponse)
    )
)]
pub async fn gateway_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let block_number = match state.provider.client() {
        Some(client) => match client.block_number().await {
            Ok(number) => Some(number),
            Err(err) => {
                tracing::warn!(%err, "block number probe failed");
                None
            }
        },
        None => None,
    };

    Json(StatusResponse {
        connection: state.connection.clone(),
        provider_available: state.provider.is_available(),
        default_chain_id: state.config.default_network().chain_id,
        block_number,
        started_at: state.started_at,
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}
