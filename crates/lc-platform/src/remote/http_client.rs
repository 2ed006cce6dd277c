use std::time::Duration;

use async_trait::async_trait;
use lc_core::clipboard::ClipboardEntry;
use lc_core::ports::{RemoteClipboardError, RemoteClipboardPort};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct SubmitBody<'a> {
    text: &'a str,
    source: &'a str,
}

/// [`RemoteClipboardPort`] over the server's JSON API.
pub struct HttpRemoteClipboard {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemoteClipboard {
    /// `timeout` bounds every request end to end.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteClipboardError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteClipboardError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn clipboard_url(&self) -> String {
        format!("{}/api/clipboard", self.base_url)
    }
}

fn transport(err: reqwest::Error) -> RemoteClipboardError {
    RemoteClipboardError::Transport(err.to_string())
}

async fn unexpected_status(response: reqwest::Response) -> RemoteClipboardError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    RemoteClipboardError::Status {
        status,
        body: body.trim().to_string(),
    }
}

async fn decode_entry(response: reqwest::Response) -> Result<ClipboardEntry, RemoteClipboardError> {
    response
        .json::<ClipboardEntry>()
        .await
        .map_err(|e| RemoteClipboardError::Decode(e.to_string()))
}

#[async_trait]
impl RemoteClipboardPort for HttpRemoteClipboard {
    async fn submit(
        &self,
        text: &str,
        source: &str,
    ) -> Result<ClipboardEntry, RemoteClipboardError> {
        let response = self
            .client
            .post(self.clipboard_url())
            .json(&SubmitBody { text, source })
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(unexpected_status(response).await);
        }

        let entry = decode_entry(response).await?;
        debug!(entry_id = %entry.id, "clipboard submitted");
        Ok(entry)
    }

    async fn fetch_latest(&self) -> Result<ClipboardEntry, RemoteClipboardError> {
        let response = self
            .client
            .get(self.clipboard_url())
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            StatusCode::OK => decode_entry(response).await,
            StatusCode::NOT_FOUND => Err(RemoteClipboardError::Empty),
            _ => Err(unexpected_status(response).await),
        }
    }
}
