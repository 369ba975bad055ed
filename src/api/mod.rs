// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{chain::ConnectionState, state::AppState};

pub mod assets;
pub mod health;
pub mod networks;
pub mod status;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/networks", get(networks::list_networks))
        .route("/status", get(status::gateway_status))
        .with_state(state.clone())
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/relayer-sdk/{*path}", get(assets::relayer_asset))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state)
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        assets::relayer_asset,
        health::health,
        health::liveness,
        health::readiness,
        networks::list_networks,
        status::gateway_status
    ),
    components(
        schemas(
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse,
            networks::NetworksResponse,
            networks::NetworkInfo,
            status::StatusResponse,
            ConnectionState
        )
    ),
    tags(
        (name = "Assets", description = "Relayer-SDK asset relay"),
        (name = "Networks", description = "Exposed network configuration"),
        (name = "Status", description = "Gateway and chain-connection status"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
