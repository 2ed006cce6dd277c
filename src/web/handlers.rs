use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use lc_core::EntryId;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::Response;
use warp::{Rejection, Reply};

use super::error::ApiError;
use crate::bootstrap::AppRuntime;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Deserialize)]
struct SubmitRequest {
    #[serde(default)]
    text: String,
    #[serde(default)]
    source: String,
}

#[derive(Debug, Deserialize)]
struct PinRequest {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    pinned: bool,
}

#[derive(Debug, Deserialize)]
struct DeleteRequest {
    #[serde(default)]
    id: i64,
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::invalid_json())
}

/// Form bodies decode the same fields as JSON ones.
/// 表单请求体与 JSON 请求体解析相同的字段。
fn parse_submit(content_type: Option<&str>, body: &[u8]) -> Result<SubmitRequest, ApiError> {
    match content_type {
        Some(ct) if ct.trim_start().starts_with(FORM_CONTENT_TYPE) => {
            serde_urlencoded::from_bytes(body).map_err(|_| ApiError::bad_request("invalid form body"))
        }
        _ => parse_json(body),
    }
}

fn respond(result: Result<Response, ApiError>) -> Result<Response, Infallible> {
    Ok(result.unwrap_or_else(Reply::into_response))
}

/// Absent or blank `limit` means the default page size.
fn parse_limit(query: &HashMap<String, String>) -> Result<Option<i64>, ApiError> {
    match query.get("limit").map(|raw| raw.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::bad_request("invalid limit")),
    }
}

pub async fn get_clipboard(runtime: Arc<AppRuntime>) -> Result<Response, Infallible> {
    respond(
        runtime
            .usecases()
            .fetch_latest_clipboard()
            .execute()
            .map(|entry| warp::reply::json(&entry).into_response())
            .map_err(|e| ApiError::from_service(e, "failed to read clipboard")),
    )
}

pub async fn post_clipboard(
    runtime: Arc<AppRuntime>,
    content_type: Option<String>,
    body: Bytes,
) -> Result<Response, Infallible> {
    respond(submit(&runtime, content_type.as_deref(), &body).await)
}

async fn submit(
    runtime: &AppRuntime,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Response, ApiError> {
    let req = parse_submit(content_type, body)?;
    let entry = runtime
        .usecases()
        .submit_clipboard()
        .execute(&req.text, &req.source)
        .await
        .map_err(|e| ApiError::from_service(e, "failed to save clipboard"))?;
    Ok(warp::reply::with_status(warp::reply::json(&entry), StatusCode::CREATED).into_response())
}

pub async fn list_history(
    runtime: Arc<AppRuntime>,
    query: HashMap<String, String>,
) -> Result<Response, Infallible> {
    respond(history(&runtime, &query).await)
}

async fn history(runtime: &AppRuntime, query: &HashMap<String, String>) -> Result<Response, ApiError> {
    let limit = parse_limit(query)?;
    let items = runtime
        .usecases()
        .list_history()
        .execute(limit, query.get("q").map(String::as_str))
        .await
        .map_err(|e| ApiError::from_service(e, "failed to read history"))?;
    Ok(warp::reply::json(&items).into_response())
}

pub async fn pin_entry(runtime: Arc<AppRuntime>, body: Bytes) -> Result<Response, Infallible> {
    respond(pin(&runtime, &body).await)
}

async fn pin(runtime: &AppRuntime, body: &[u8]) -> Result<Response, ApiError> {
    let req: PinRequest = parse_json(body)?;
    let entry = runtime
        .usecases()
        .set_entry_pin()
        .execute(EntryId::new(req.id), req.pinned)
        .await
        .map_err(|e| ApiError::from_service(e, "failed to update pin"))?;
    Ok(warp::reply::json(&entry).into_response())
}

pub async fn delete_entry(runtime: Arc<AppRuntime>, body: Bytes) -> Result<Response, Infallible> {
    respond(delete(&runtime, &body).await)
}

async fn delete(runtime: &AppRuntime, body: &[u8]) -> Result<Response, ApiError> {
    let req: DeleteRequest = parse_json(body)?;
    runtime
        .usecases()
        .delete_entry()
        .execute(EntryId::new(req.id))
        .await
        .map_err(|e| ApiError::from_service(e, "failed to delete"))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn list_request_logs(runtime: Arc<AppRuntime>) -> Result<Response, Infallible> {
    Ok(warp::reply::json(&runtime.request_log().list()).into_response())
}

/// Turn unmatched requests into plain-text errors.
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let api_error = if err.is_not_found() {
        ApiError::new(StatusCode::NOT_FOUND, "not found")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        ApiError::bad_request("invalid query")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "payload too large")
    } else {
        warn!(rejection = ?err, "Unhandled rejection");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    };
    Ok(api_error.into_response())
}
