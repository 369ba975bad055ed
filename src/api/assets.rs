// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relayer-SDK asset relay endpoint.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::relay::RelayError;
use crate::state::AppState;

/// Cache directive for relayed assets. The CDN path is versioned, so the
/// bytes behind a given URL never change.
pub const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Relay a relayer-SDK static asset from the upstream CDN.
///
/// The body is buffered upstream-side and forwarded unchanged. Upstream
/// error statuses are mirrored as JSON errors; transport failures collapse
/// to a generic 500.
#[utoipa::path(
    get,
    path = "/relayer-sdk/{path}",
    tag = "Assets",
    params(
        ("path" = String, Path, description = "Asset path under the pinned relayer-SDK CDN root")
    ),
    responses(
        (status = 200, description = "Asset bytes, media type inferred from the file extension"),
        (status = 400, description = "Path failed segment validation"),
        (status = 500, description = "Upstream CDN unreachable")
    )
)]
pub async fn relayer_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Response {
    match state.relay.fetch(&path).await {
        Ok(asset) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, asset.content_type),
                (header::CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE),
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            ],
            asset.bytes,
        )
            .into_response(),
        Err(RelayError::InvalidPath(reason)) => {
            ApiError::bad_request(format!("Invalid asset path: {reason}")).into_response()
        }
        Err(RelayError::Upstream { status }) => {
            tracing::warn!(%status, %path, "upstream CDN returned an error status");
            ApiError::upstream(status).into_response()
        }
        Err(RelayError::Transport(err)) => {
            tracing::error!(error = %err, %path, "failed to reach upstream CDN");
            ApiError::internal("Failed to fetch relayer asset").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use crate::chain::{ConnectionState, ProviderHandle};
    use crate::config::GatewayConfig;
    use crate::relay::AssetRelay;

    /// Serve a fixed response for every path on an ephemeral port, returning
    /// the base URL.
    async fn spawn_upstream(status: StatusCode, body: &'static [u8]) -> String {
        let app = Router::new().route(
            "/{*path}",
            get(move || async move { (status, body).into_response() }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// An address nothing listens on.
    fn dead_upstream() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    fn gateway(upstream: &str) -> Router {
        let state = AppState::new(
            GatewayConfig::new(None, false),
            ConnectionState::disconnected(),
            ProviderHandle::Unavailable,
            AssetRelay::new(upstream.parse().unwrap()),
        );
        crate::api::router(state)
    }

    async fn get_asset(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn script_asset_is_relayed_byte_identical() {
        let payload: &[u8] = b"globalThis.relayerSDK = {};";
        let upstream = spawn_upstream(StatusCode::OK, payload).await;
        let app = gateway(&upstream);

        let response = get_asset(app, "/relayer-sdk/relayer-sdk-js.umd.cjs").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=31536000, immutable"
        );
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], payload);
    }

    #[tokio::test]
    async fn wasm_asset_gets_wasm_media_type() {
        let payload: &[u8] = b"\0asm\x01\0\0\0";
        let upstream = spawn_upstream(StatusCode::OK, payload).await;
        let app = gateway(&upstream);

        let response = get_asset(app, "/relayer-sdk/tfhe_bg.wasm").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/wasm");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], payload);
    }

    #[tokio::test]
    async fn upstream_error_status_is_mirrored_as_json() {
        let upstream = spawn_upstream(StatusCode::NOT_FOUND, b"<html>not found</html>").await;
        let app = gateway(&upstream);

        let response = get_asset(app, "/relayer-sdk/missing.wasm").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The upstream body is never forwarded on error.
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Failed to fetch: 404"}"#);
    }

    #[tokio::test]
    async fn transport_failure_collapses_to_500() {
        let app = gateway(&dead_upstream());

        let response = get_asset(app, "/relayer-sdk/relayer-sdk-js.umd.cjs").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Failed to fetch relayer asset"}"#);
    }

    #[tokio::test]
    async fn traversal_path_is_rejected_before_fetch() {
        // Upstream would happily answer; the gateway must refuse first.
        let upstream = spawn_upstream(StatusCode::OK, b"leaked").await;
        let app = gateway(&upstream);

        let response = get_asset(app, "/relayer-sdk/a/../../secret.js").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Invalid asset path"), "body: {text}");
    }
}
