/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

pub mod endpoints;
pub mod error;
pub mod requests;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use reworkit_core::types::ServerState;
use std::sync::Arc;

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/result", post(endpoints::results::post_result))
        .route(
            "/api/result/{name}",
            get(endpoints::results::get_package_results),
        )
        .route(
            "/api/result/{name}/{arch}",
            get(endpoints::results::get_build_result),
        )
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        // Build logs can be arbitrarily large
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
