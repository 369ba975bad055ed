// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The capability bundle handed to every HTTP handler.
//!
//! All dependencies a handler can use are constructed once in `main` and
//! passed here explicitly; nothing is looked up ambiently. Handlers receive
//! the bundle through axum's `State` extractor.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::chain::{ConnectionState, ProviderHandle};
use crate::config::GatewayConfig;
use crate::relay::AssetRelay;

#[derive(Clone)]
pub struct AppState {
    /// Immutable gateway configuration.
    pub config: Arc<GatewayConfig>,
    /// Connection-state snapshot taken at bundle construction.
    pub connection: ConnectionState,
    /// Injectable chain provider; `Unavailable` when no endpoint was given.
    pub provider: Arc<ProviderHandle>,
    /// Upstream CDN relay.
    pub relay: Arc<AssetRelay>,
    /// Process start time, for the status endpoint.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        config: GatewayConfig,
        connection: ConnectionState,
        provider: ProviderHandle,
        relay: AssetRelay,
    ) -> Self {
        Self {
            config: Arc::new(config),
            connection,
            provider: Arc::new(provider),
            relay: Arc::new(relay),
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            GatewayConfig::new(None, false),
            ConnectionState::disconnected(),
            ProviderHandle::Unavailable,
            AssetRelay::default(),
        )
    }
}
