// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Upstream CDN relay for relayer-SDK static assets.
//!
//! The relayer SDK ships as versioned static files (UMD bundle, WASM
//! modules) on a public CDN. Browsers cannot always load them cross-origin,
//! so the gateway re-serves them from its own origin. The relay is stateless:
//! each request resolves a sub-path against the pinned CDN root, buffers the
//! upstream body, and hands the bytes back.
//!
//! ## Security
//!
//! The resolved upstream URL is a strict concatenation of the CDN root and
//! the requested path. Segments are validated before any request is issued;
//! `..` can never escape the root.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::StatusCode;
use url::Url;

/// Upstream CDN base, without the version component.
const CDN_BASE: &str = "https://cdn.zama.ai/relayer-sdk-js";

/// Relayer-SDK version the gateway is pinned to.
pub const RELAYER_SDK_VERSION: &str = "0.1.2";

/// Outbound fetch timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// The pinned CDN root all asset paths resolve under.
pub fn default_cdn_root() -> Url {
    format!("{CDN_BASE}/{RELAYER_SDK_VERSION}")
        .parse()
        .expect("pinned CDN root is a valid URL")
}

/// A relayed asset: the buffered upstream body plus its inferred media type.
#[derive(Debug, Clone)]
pub struct RelayedAsset {
    pub bytes: Bytes,
    pub content_type: &'static str,
}

/// Errors produced by the relay. All of them are converted to a response at
/// the handler boundary; none escapes it.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The requested path failed segment validation.
    #[error("invalid asset path: {0}")]
    InvalidPath(String),

    /// The upstream answered with a non-success status.
    #[error("upstream returned {status}")]
    Upstream { status: StatusCode },

    /// The fetch itself failed (DNS, refused connection, timeout).
    #[error("upstream fetch failed: {0}")]
    Transport(String),
}

/// Stateless relay for relayer-SDK assets under a fixed CDN root.
#[derive(Debug, Clone)]
pub struct AssetRelay {
    cdn_root: Url,
    http: reqwest::Client,
}

impl AssetRelay {
    /// Create a relay rooted at the given CDN base URL.
    pub fn new(cdn_root: Url) -> Self {
        Self {
            cdn_root,
            http: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// The CDN root assets resolve under.
    pub fn cdn_root(&self) -> &Url {
        &self.cdn_root
    }

    /// Resolve a requested sub-path to its upstream URL.
    ///
    /// The result is always `cdn_root + "/" + path` verbatim. Paths with
    /// empty, `.`, `..`, or backslash-bearing segments are rejected before
    /// any request is made.
    pub fn resolve(&self, path: &str) -> Result<Url, RelayError> {
        validate_path(path)?;

        let base = self.cdn_root.as_str().trim_end_matches('/');
        format!("{base}/{path}")
            .parse()
            .map_err(|e: url::ParseError| RelayError::InvalidPath(e.to_string()))
    }

    /// Fetch an asset from the upstream CDN.
    ///
    /// The whole body is buffered before returning; there is no streaming
    /// and no retry. Non-2xx upstream statuses become [`RelayError::Upstream`],
    /// fetch failures become [`RelayError::Transport`].
    pub async fn fetch(&self, path: &str) -> Result<RelayedAsset, RelayError> {
        let url = self.resolve(path)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Upstream { status });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        Ok(RelayedAsset {
            bytes,
            content_type: content_type_for(path),
        })
    }

    /// Transport-level reachability probe against the CDN root.
    ///
    /// Any HTTP answer counts as reachable; only a failed fetch is an error.
    pub async fn probe(&self) -> Result<(), RelayError> {
        self.http
            .head(self.cdn_root.clone())
            .send()
            .await
            .map(|_| ())
            .map_err(|e| RelayError::Transport(e.to_string()))
    }
}

impl Default for AssetRelay {
    fn default() -> Self {
        Self::new(default_cdn_root())
    }
}

/// Infer the response media type from the asset's file extension.
pub fn content_type_for(path: &str) -> &'static str {
    if path.ends_with(".js") || path.ends_with(".cjs") {
        "application/javascript; charset=utf-8"
    } else if path.ends_with(".wasm") {
        "application/wasm"
    } else {
        "application/octet-stream"
    }
}

fn validate_path(path: &str) -> Result<(), RelayError> {
    if path.is_empty() {
        return Err(RelayError::InvalidPath("empty path".to_string()));
    }
    for segment in path.split('/') {
        if segment.is_empty() {
            return Err(RelayError::InvalidPath("empty path segment".to_string()));
        }
        if segment == "." || segment == ".." {
            return Err(RelayError::InvalidPath(format!(
                "path segment `{segment}` is not allowed"
            )));
        }
        if segment.contains('\\') {
            return Err(RelayError::InvalidPath(
                "backslash in path segment".to_string(),
            ));
        }
    }
    Ok(())
}
