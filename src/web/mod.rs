//! HTTP surface of the clipboard server.
//!
//! Every endpoint is served both at the root and under `/api`:
//!
//! | method        | path               | reply                    |
//! |---------------|--------------------|--------------------------|
//! | `GET`         | `/clipboard`       | 200 entry, 404 if empty  |
//! | `POST`        | `/clipboard`       | 201 created entry        |
//! | `GET`         | `/history`         | 200 entries              |
//! | `POST`        | `/history/pin`     | 200 updated entry        |
//! | `POST/DELETE` | `/history/delete`  | 204                      |
//! | `GET`         | `/api/logs`        | 200 request log          |
//!
//! `POST /clipboard` takes JSON or a urlencoded form with the same fields.
//! Every request except `/api/logs` lands in the request log with its
//! bodies.

mod error;
mod handlers;
mod request_log;
mod routes;

pub use error::ApiError;
pub use request_log::{RequestLog, RequestRecord, MAX_BODY_LOG_SIZE, MAX_REQUEST_LOGS};
pub use routes::routes;
