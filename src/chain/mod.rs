// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Host-chain networks and the injectable provider handle.

pub mod client;
pub mod types;

pub use client::{ChainClient, ChainClientError};
pub use types::{ConnectionState, NetworkConfig, HARDHAT_LOCAL, SEPOLIA};

/// Injectable chain-provider handle.
///
/// The gateway runs with or without a reachable RPC endpoint; absence is a
/// first-class state, not a lookup failure.
pub enum ProviderHandle {
    /// A provider endpoint was injected and a client could be built.
    Available(ChainClient),
    /// No endpoint was injected, or the injected one was unusable.
    Unavailable,
}

impl ProviderHandle {
    /// Derive a handle from an optional injected endpoint.
    ///
    /// A malformed endpoint degrades to `Unavailable` with a warning; it
    /// never fails startup.
    pub fn from_endpoint(network: NetworkConfig, endpoint: Option<&str>) -> Self {
        match endpoint {
            Some(url) => match ChainClient::new(network, url) {
                Ok(client) => Self::Available(client),
                Err(err) => {
                    tracing::warn!(%err, "injected RPC endpoint is unusable; provider unavailable");
                    Self::Unavailable
                }
            },
            None => Self::Unavailable,
        }
    }

    /// The underlying client, when available.
    pub fn client(&self) -> Option<&ChainClient> {
        match self {
            Self::Available(client) => Some(client),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Derive the connection-state snapshot by probing the provider.
    ///
    /// An unavailable handle or a failed probe both yield a disconnected
    /// state.
    pub async fn connection_state(&self) -> ConnectionState {
        match self {
            Self::Available(client) => match client.chain_id().await {
                Ok(chain_id) => ConnectionState::connected(chain_id),
                Err(err) => {
                    tracing::warn!(%err, "chain provider did not answer the startup probe");
                    ConnectionState::disconnected()
                }
            },
            Self::Unavailable => ConnectionState::disconnected(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_endpoint_yields_unavailable() {
        let handle = ProviderHandle::from_endpoint(HARDHAT_LOCAL, None);
        assert!(!handle.is_available());
        assert!(handle.client().is_none());
    }

    #[test]
    fn malformed_endpoint_degrades_to_unavailable() {
        let handle = ProviderHandle::from_endpoint(HARDHAT_LOCAL, Some("not a url"));
        assert!(!handle.is_available());
    }

    #[test]
    fn valid_endpoint_yields_available() {
        let handle = ProviderHandle::from_endpoint(HARDHAT_LOCAL, Some("http://localhost:8545"));
        assert!(handle.is_available());
        assert_eq!(
            handle.client().map(|c| c.network().chain_id),
            Some(HARDHAT_LOCAL.chain_id)
        );
    }

    #[tokio::test]
    async fn unavailable_handle_reports_disconnected() {
        let handle = ProviderHandle::Unavailable;
        assert_eq!(
            handle.connection_state().await,
            ConnectionState::disconnected()
        );
    }
}
