use std::collections::HashMap;
use std::convert::Infallible;
use std::future::poll_fn;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, error};
use warp::http::{HeaderMap, Method, Request, StatusCode};
use warp::hyper::body::{self, Bytes};
use warp::hyper::service::Service;
use warp::hyper::Body;
use warp::path::FullPath;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use super::handlers;
use super::request_log::{body_for_log, RequestLog, RequestRecord};
use crate::bootstrap::AppRuntime;

const LOGS_PATH: &str = "/api/logs";

/// The full server filter: endpoints at the root and under `/api`, the
/// request log endpoint, rejection handling and request recording.
/// 完整的服务端过滤器：根路径与 `/api` 下的接口、请求日志接口、拒绝处理和请求记录。
///
/// ## Behavior / 行为
/// - The request is buffered once here, then replayed into the routing
///   filter, so the record can keep both bodies.
/// - The response body is buffered too and sent on unchanged.
pub fn routes(
    runtime: Arc<AppRuntime>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let request_log = runtime.request_log().clone();
    let api = endpoints(runtime.clone());

    let logs = warp::path!("api" / "logs")
        .and(warp::get())
        .and(with_runtime(runtime))
        .and_then(handlers::list_request_logs);

    let service = warp::service(
        logs.or(warp::path("api").and(api.clone()))
            .unify()
            .or(api)
            .unify()
            .recover(handlers::handle_rejection),
    );

    warp::method()
        .and(warp::path::full())
        .and(warp::query::raw().or(warp::any().map(String::new)).unify())
        .and(warp::header::headers_cloned())
        .and(warp::addr::remote())
        .and(warp::body::bytes())
        .and_then(
            move |method: Method,
                  path: FullPath,
                  query: String,
                  headers: HeaderMap,
                  remote: Option<SocketAddr>,
                  body: Bytes| {
                let incoming = Incoming {
                    method,
                    path: path.as_str().to_string(),
                    query,
                    headers,
                    remote,
                    body,
                };
                serve_recorded(service.clone(), request_log.clone(), incoming)
            },
        )
        .recover(handlers::handle_rejection)
}

fn endpoints(
    runtime: Arc<AppRuntime>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let get_clipboard = warp::path!("clipboard")
        .and(warp::get())
        .and(with_runtime(runtime.clone()))
        .and_then(handlers::get_clipboard);

    let post_clipboard = warp::path!("clipboard")
        .and(warp::post())
        .and(with_runtime(runtime.clone()))
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .and_then(handlers::post_clipboard);

    let history = warp::path!("history")
        .and(warp::get())
        .and(with_runtime(runtime.clone()))
        .and(warp::query::<HashMap<String, String>>())
        .and_then(handlers::list_history);

    let pin = warp::path!("history" / "pin")
        .and(warp::post())
        .and(with_runtime(runtime.clone()))
        .and(warp::body::bytes())
        .and_then(handlers::pin_entry);

    let delete = warp::path!("history" / "delete")
        .and(warp::post().or(warp::delete()).unify())
        .and(with_runtime(runtime))
        .and(warp::body::bytes())
        .and_then(handlers::delete_entry);

    get_clipboard
        .or(post_clipboard)
        .unify()
        .or(history)
        .unify()
        .or(pin)
        .unify()
        .or(delete)
        .unify()
}

fn with_runtime(
    runtime: Arc<AppRuntime>,
) -> impl Filter<Extract = (Arc<AppRuntime>,), Error = Infallible> + Clone {
    warp::any().map(move || runtime.clone())
}

/// A request as taken off the wire, before routing.
struct Incoming {
    method: Method,
    path: String,
    query: String,
    headers: HeaderMap,
    remote: Option<SocketAddr>,
    body: Bytes,
}

impl Incoming {
    fn to_request(&self) -> Result<Request<Body>, warp::http::Error> {
        let uri = if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        };
        let mut request = Request::builder()
            .method(self.method.clone())
            .uri(uri)
            .body(Body::from(self.body.clone()))?;
        *request.headers_mut() = self.headers.clone();
        Ok(request)
    }
}

async fn serve_recorded<S>(
    mut service: S,
    request_log: Arc<RequestLog>,
    incoming: Incoming,
) -> Result<Response, Infallible>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Send,
    S::Future: Send,
{
    let started = Instant::now();

    let request = match incoming.to_request() {
        Ok(request) => request,
        Err(err) => {
            error!(error = %err, path = %incoming.path, "Failed to rebuild request");
            return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
        }
    };
    let response = match poll_fn(|cx| service.poll_ready(cx)).await {
        Ok(()) => match service.call(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        },
        Err(never) => match never {},
    };

    let (parts, response_body) = response.into_parts();
    let response_bytes = match body::to_bytes(response_body).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(error = %err, path = %incoming.path, "Failed to buffer response body");
            return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
        }
    };

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    debug!(
        method = %incoming.method,
        path = %incoming.path,
        status = parts.status.as_u16(),
        elapsed_ms,
        "HTTP request"
    );

    if incoming.path != LOGS_PATH {
        request_log.record(RequestRecord {
            method: incoming.method.to_string(),
            path: incoming.path.clone(),
            status: parts.status.as_u16(),
            remote_addr: incoming
                .remote
                .map(|addr| addr.ip().to_string())
                .unwrap_or_default(),
            timestamp: Utc::now(),
            elapsed_ms,
            request_body: if carries_body(&incoming.method) {
                body_for_log(&incoming.body)
            } else {
                None
            },
            response_body: body_for_log(&response_bytes),
        });
    }

    Ok(Response::from_parts(parts, Body::from(response_bytes)))
}

fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}
