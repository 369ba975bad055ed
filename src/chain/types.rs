// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Host-chain network catalogue and connection-state types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static configuration for a supported FHEVM host network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// Public default RPC endpoint URL
    pub rpc_url: &'static str,
    /// Keyed RPC endpoint base; the configured API key is appended
    pub keyed_rpc_base: Option<&'static str>,
    /// Block explorer URL
    pub explorer_url: Option<&'static str>,
}

/// Ethereum Sepolia, the primary FHEVM host network.
pub const SEPOLIA: NetworkConfig = NetworkConfig {
    name: "Ethereum Sepolia",
    chain_id: 11_155_111,
    rpc_url: "https://ethereum-sepolia-rpc.publicnode.com",
    keyed_rpc_base: Some("https://sepolia.infura.io/v3/"),
    explorer_url: Some("https://sepolia.etherscan.io"),
};

/// Local Hardhat node for development, appended after the primary network in
/// non-production builds.
pub const HARDHAT_LOCAL: NetworkConfig = NetworkConfig {
    name: "Hardhat",
    chain_id: 31_337,
    rpc_url: "http://localhost:8545",
    keyed_rpc_base: None,
    explorer_url: None,
};

/// Wallet/provider connection state as seen by the gateway.
///
/// Sourced from the chain collaborator at bundle construction; read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConnectionState {
    /// Whether a chain provider answered the startup probe.
    pub connected: bool,
    /// Chain id reported by the provider, when connected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Account address, when a wallet account is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ConnectionState {
    /// A disconnected state.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// A connected state on the given chain, without an attached account.
    pub fn connected(chain_id: u64) -> Self {
        Self {
            connected: true,
            chain_id: Some(chain_id),
            address: None,
        }
    }
}
