// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Gateway Configuration Bootstrap
//!
//! Builds the immutable [`GatewayConfig`] record once at startup from
//! environment input and static defaults. Construction never fails: missing
//! input degrades to defaults with a logged advisory.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GATEWAY_API_KEY` | RPC provider API key embedded in keyed endpoints | empty |
//! | `GATEWAY_ENV` | `production` restricts the network list to Sepolia | non-production |
//! | `RPC_OVERRIDES` | Comma-separated `chain_id=url` endpoint overrides | none |
//! | `RPC_URL` | Injectable RPC endpoint for the provider handle | none |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::collections::HashMap;
use std::env;
use std::sync::Once;

use crate::chain::{NetworkConfig, HARDHAT_LOCAL, SEPOLIA};

/// Environment variable name for the RPC provider API key.
pub const API_KEY_ENV: &str = "GATEWAY_API_KEY";

/// Environment variable name for the deployment environment.
///
/// The value `production` (case-insensitive) restricts the exposed network
/// list to the primary network only.
pub const PRODUCTION_ENV: &str = "GATEWAY_ENV";

/// Environment variable name for per-chain RPC endpoint overrides.
///
/// Format: `chain_id=url` pairs separated by commas, e.g.
/// `11155111=https://rpc.example.org,31337=http://localhost:9545`.
pub const RPC_OVERRIDES_ENV: &str = "RPC_OVERRIDES";

/// Environment variable name for the injectable provider RPC endpoint.
///
/// When unset the gateway runs with an unavailable provider handle.
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Default polling interval handed to dapp clients, in milliseconds.
pub const DEFAULT_POLLING_INTERVAL_MS: u64 = 4_000;

static MISSING_API_KEY_ADVISORY: Once = Once::new();

/// Immutable gateway configuration.
///
/// Built once per process lifetime and never mutated afterwards. The network
/// list is non-empty by construction and index 0 is the default network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Exposed networks, default first.
    pub networks: Vec<NetworkConfig>,
    /// Polling interval for dapp clients, milliseconds.
    pub polling_interval_ms: u64,
    /// RPC provider API key. Empty when none was supplied.
    pub api_key: String,
    /// Per-chain RPC endpoint overrides, keyed by chain id.
    pub rpc_overrides: HashMap<u64, String>,
}

impl GatewayConfig {
    /// Build a configuration from explicit inputs.
    ///
    /// Pure and deterministic: identical inputs yield structurally equal
    /// records. A missing API key degrades to the empty string; the advisory
    /// is emitted at most once per process.
    pub fn new(api_key: Option<String>, production: bool) -> Self {
        if api_key.is_none() {
            MISSING_API_KEY_ADVISORY.call_once(|| {
                tracing::warn!(
                    "{API_KEY_ENV} is not set; falling back to public RPC endpoints"
                );
            });
        }

        let mut networks = vec![SEPOLIA];
        if !production {
            networks.push(HARDHAT_LOCAL);
        }

        Self {
            networks,
            polling_interval_ms: DEFAULT_POLLING_INTERVAL_MS,
            api_key: api_key.unwrap_or_default(),
            rpc_overrides: HashMap::new(),
        }
    }

    /// Attach per-chain RPC endpoint overrides.
    pub fn with_rpc_overrides(mut self, overrides: HashMap<u64, String>) -> Self {
        self.rpc_overrides = overrides;
        self
    }

    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        let production = env::var(PRODUCTION_ENV)
            .map(|value| value.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);
        let overrides = env::var(RPC_OVERRIDES_ENV)
            .map(|raw| parse_rpc_overrides(&raw))
            .unwrap_or_default();

        Self::new(api_key, production).with_rpc_overrides(overrides)
    }

    /// The default network (index 0).
    pub fn default_network(&self) -> &NetworkConfig {
        // networks is non-empty by construction
        &self.networks[0]
    }

    /// Look up a network by chain id.
    pub fn network(&self, chain_id: u64) -> Option<&NetworkConfig> {
        self.networks.iter().find(|n| n.chain_id == chain_id)
    }

    /// Resolve the RPC endpoint for a network.
    ///
    /// Resolution order: explicit override, keyed endpoint (when an API key
    /// is configured), then the network's public default. Returns `None` for
    /// unknown chain ids without an override.
    pub fn rpc_url(&self, chain_id: u64) -> Option<String> {
        if let Some(url) = self.rpc_overrides.get(&chain_id) {
            return Some(url.clone());
        }

        let network = self.network(chain_id)?;
        if !self.api_key.is_empty() {
            if let Some(base) = network.keyed_rpc_base {
                return Some(format!("{base}{}", self.api_key));
            }
        }
        Some(network.rpc_url.to_string())
    }
}

/// Parse the `RPC_OVERRIDES` value into a chain-id → endpoint map.
///
/// Malformed entries are skipped with a warning rather than failing the
/// bootstrap.
fn parse_rpc_overrides(raw: &str) -> HashMap<u64, String> {
    let mut overrides = HashMap::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.split_once('=') {
            Some((chain, url)) if !url.trim().is_empty() => match chain.trim().parse::<u64>() {
                Ok(chain_id) => {
                    overrides.insert(chain_id, url.trim().to_string());
                }
                Err(_) => {
                    tracing::warn!(entry, "ignoring RPC override with invalid chain id");
                }
            },
            _ => {
                tracing::warn!(entry, "ignoring malformed RPC override entry");
            }
        }
    }
    overrides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_production_exposes_primary_then_local() {
        let config = GatewayConfig::new(None, false);
        assert_eq!(config.networks.len(), 2);
        assert_eq!(config.networks[0].chain_id, SEPOLIA.chain_id);
        assert_eq!(config.networks[1].chain_id, HARDHAT_LOCAL.chain_id);
        assert_eq!(config.default_network().chain_id, SEPOLIA.chain_id);
    }

    #[test]
    fn production_exposes_only_primary() {
        let config = GatewayConfig::new(None, true);
        assert_eq!(config.networks.len(), 1);
        assert_eq!(config.networks[0].chain_id, SEPOLIA.chain_id);
    }

    #[test]
    fn missing_api_key_degrades_to_empty() {
        let config = GatewayConfig::new(None, false);
        assert_eq!(config.api_key, "");
        assert!(config.polling_interval_ms > 0);
    }

    #[test]
    fn construction_is_deterministic() {
        let a = GatewayConfig::new(Some("key-123".to_string()), false);
        let b = GatewayConfig::new(Some("key-123".to_string()), false);
        assert_eq!(a, b);
    }

    #[test]
    fn rpc_url_prefers_override() {
        let mut overrides = HashMap::new();
        overrides.insert(SEPOLIA.chain_id, "https://rpc.example.org".to_string());
        let config =
            GatewayConfig::new(Some("key-123".to_string()), true).with_rpc_overrides(overrides);
        assert_eq!(
            config.rpc_url(SEPOLIA.chain_id).as_deref(),
            Some("https://rpc.example.org")
        );
    }

    #[test]
    fn rpc_url_uses_keyed_endpoint_when_key_present() {
        let config = GatewayConfig::new(Some("key-123".to_string()), true);
        let url = config.rpc_url(SEPOLIA.chain_id).unwrap();
        assert!(url.ends_with("key-123"), "unexpected url: {url}");
    }

    #[test]
    fn rpc_url_falls_back_to_public_default() {
        let config = GatewayConfig::new(None, false);
        assert_eq!(
            config.rpc_url(HARDHAT_LOCAL.chain_id).as_deref(),
            Some(HARDHAT_LOCAL.rpc_url)
        );
        assert_eq!(
            config.rpc_url(SEPOLIA.chain_id).as_deref(),
            Some(SEPOLIA.rpc_url)
        );
    }

    #[test]
    fn rpc_url_unknown_chain_is_none() {
        let config = GatewayConfig::new(None, false);
        assert!(config.rpc_url(999_999).is_none());
    }

    #[test]
    fn parse_overrides_skips_malformed_entries() {
        let overrides = parse_rpc_overrides(
            "11155111=https://rpc.example.org, bogus, =nope, 31337=http://localhost:9545, abc=http://x",
        );
        assert_eq!(overrides.len(), 2);
        assert_eq!(
            overrides.get(&11155111).map(String::as_str),
            Some("https://rpc.example.org")
        );
        assert_eq!(
            overrides.get(&31337).map(String::as_str),
            Some("http://localhost:9545")
        );
    }

    #[test]
    fn parse_overrides_empty_input() {
        assert!(parse_rpc_overrides("").is_empty());
        assert!(parse_rpc_overrides(" , ,").is_empty());
    }
}
