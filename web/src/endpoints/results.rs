/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

use crate::error::{WebError, WebResult};
use crate::requests::PackageResponse;
use async_compression::tokio::bufread::GzipDecoder;
use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::HeaderMap;
use reworkit_core::consts::SECRET_HEADER;
use reworkit_core::database::{get_result, list_results, upsert_result};
use reworkit_core::types::*;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Worker push endpoint. Accepts a multipart form with `name`, `arch`,
/// `success` and a gzip-compressed `log`, and upserts the result keyed
/// on (name, arch).
pub async fn post_result(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    mut form: Multipart,
) -> WebResult<Json<BaseResponse<String>>> {
    if headers
        .get(SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v != state.secret)
        .unwrap_or(true)
    {
        return Err(WebError::invalid_secret());
    }

    let mut name = None;
    let mut arch = None;
    let mut success = None;
    let mut log_content = Vec::new();

    while let Some(field) = form.next_field().await? {
        match field.name() {
            Some("name") => name = Some(field.text().await?),
            Some("arch") => arch = Some(field.text().await?),
            Some("success") => success = Some(field.text().await?),
            Some("log") => log_content.extend(field.bytes().await?),
            other => info!("Ignoring unknown field: {:?}", other),
        }
    }

    let name = name.ok_or_else(|| WebError::missing_field("name"))?;
    let arch = arch.ok_or_else(|| WebError::missing_field("arch"))?;
    let success = success
        .ok_or_else(|| WebError::missing_field("success"))?
        .parse::<bool>()
        .map_err(|_| WebError::BadRequest("Invalid success field".to_string()))?;

    if log_content.is_empty() {
        return Err(WebError::missing_field("log"));
    }

    let log = decompress_log(&log_content).await?;

    info!("Recording build result for {} on {}", name, arch);

    upsert_result(&state.db, &name, &arch, success, log).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: "Build result recorded".to_string(),
    }))
}

pub async fn get_build_result(
    State(state): State<Arc<ServerState>>,
    Path((name, arch)): Path<(String, String)>,
) -> WebResult<Json<BaseResponse<MBuildResult>>> {
    let result = get_result(&state.db, &name, &arch)
        .await?
        .ok_or_else(|| WebError::not_found("Build result"))?;

    Ok(Json(BaseResponse {
        error: false,
        message: result,
    }))
}

pub async fn get_package_results(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> WebResult<Json<BaseResponse<PackageResponse>>> {
    let results = list_results(&state.db, &name).await?;

    if results.is_empty() {
        return Err(WebError::not_found("Package"));
    }

    Ok(Json(BaseResponse {
        error: false,
        message: PackageResponse { name, results },
    }))
}

async fn decompress_log(raw: &[u8]) -> WebResult<String> {
    let mut decoder = GzipDecoder::new(raw);
    let mut buf = Vec::new();
    decoder
        .read_to_end(&mut buf)
        .await
        .map_err(|_| WebError::BadRequest("Log is not valid gzip".to_string()))?;

    String::from_utf8(buf).map_err(|_| WebError::BadRequest("Log is not valid UTF-8".to_string()))
}
