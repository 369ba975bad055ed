// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! FHEVM Relayer Gateway
//!
//! This crate provides a stateless gateway for FHEVM dapps: it relays
//! versioned relayer-SDK static assets from the upstream CDN and serves the
//! network configuration that dapp clients bootstrap from.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `chain` - Host-chain network catalogue and RPC provider handle
//! - `config` - Gateway configuration bootstrap
//! - `relay` - Upstream CDN asset relay

pub mod api;
pub mod chain;
pub mod config;
pub mod error;
pub mod relay;
pub mod state;
