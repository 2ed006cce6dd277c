use std::sync::Arc;
use std::time::Duration;

use lc_core::ports::{LocalClipboardPort, RemoteClipboardError, RemoteClipboardPort};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Why a cycle did not write the remote value to the local clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The local clipboard could not be read; push and pull were both skipped.
    LocalReadFailed,
    /// The local adapter has no write command, so nothing is fetched.
    WriteUnsupported,
    FetchFailed,
    /// The server has no value yet, or an empty one.
    RemoteEmpty,
    /// The remote value was submitted under this client's own source label.
    OwnSource,
    /// The local clipboard already holds the remote text.
    AlreadyInSync,
    WriteFailed,
}

/// Outcome of one read/push/pull/apply cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub pushed: bool,
    pub applied: bool,
    pub skipped: Option<SkipReason>,
}

impl CycleReport {
    fn skipped(pushed: bool, reason: SkipReason) -> Self {
        Self {
            pushed,
            applied: false,
            skipped: Some(reason),
        }
    }
}

/// Polling loop that keeps one local clipboard converged with the server.
/// 轮询循环，使本机剪贴板与服务端保持一致。
///
/// ## Cycle / 单轮流程
///
/// Each cycle runs strictly in order:
///
/// 1. read the local clipboard; on failure skip the rest of the cycle
/// 2. push the trimmed text if it is non-empty and differs from the last
///    value this client observed
/// 3. if the adapter can write, fetch the server's latest value
/// 4. apply it locally unless it is empty, came from this client's own
///    source label, or equals the text read in step 1
///
/// `last_observed` only advances on a successful push or a successful local
/// write, so a failed push is retried on the next cycle. No error here is
/// fatal to the loop.
pub struct ClipboardSyncLoop {
    local: Arc<dyn LocalClipboardPort>,
    remote: Arc<dyn RemoteClipboardPort>,
    source: String,
    interval: Duration,
    last_observed: Option<String>,
}

impl ClipboardSyncLoop {
    pub fn new(
        local: Arc<dyn LocalClipboardPort>,
        remote: Arc<dyn RemoteClipboardPort>,
        source: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            local,
            remote,
            source: source.into(),
            interval,
            last_observed: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn last_observed(&self) -> Option<&str> {
        self.last_observed.as_deref()
    }

    /// Run cycles until `token` is cancelled.
    ///
    /// Cancellation is checked before each cycle and interrupts the sleep
    /// between cycles. A cycle that has started always runs to completion,
    /// including a push that is still in flight when `token` fires.
    /// 每轮开始前检查取消；已开始的一轮（包括进行中的推送）总会完成。
    pub async fn run(&mut self, token: CancellationToken) {
        info!(
            source = %self.source,
            interval_ms = self.interval.as_millis() as u64,
            can_write = self.local.can_write(),
            "Clipboard sync loop started"
        );

        loop {
            if token.is_cancelled() {
                break;
            }

            let report = self.run_cycle().await;
            debug!(?report, "Sync cycle finished");

            tokio::select! {
                _ = token.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("Clipboard sync loop stopped");
    }

    pub async fn run_cycle(&mut self) -> CycleReport {
        let text = match self.local.read_text().await {
            Ok(raw) => raw.trim().to_string(),
            Err(err) => {
                warn!(error = %err, "Failed to read local clipboard");
                return CycleReport::skipped(false, SkipReason::LocalReadFailed);
            }
        };

        let pushed = self.push_if_changed(&text).await;

        if !self.local.can_write() {
            return CycleReport::skipped(pushed, SkipReason::WriteUnsupported);
        }

        let remote = match self.remote.fetch_latest().await {
            Ok(entry) => entry,
            Err(RemoteClipboardError::Empty) => {
                return CycleReport::skipped(pushed, SkipReason::RemoteEmpty);
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch latest clipboard value");
                return CycleReport::skipped(pushed, SkipReason::FetchFailed);
            }
        };

        if remote.text.is_empty() {
            return CycleReport::skipped(pushed, SkipReason::RemoteEmpty);
        }
        if remote.source == self.source {
            return CycleReport::skipped(pushed, SkipReason::OwnSource);
        }
        if remote.text == text {
            return CycleReport::skipped(pushed, SkipReason::AlreadyInSync);
        }

        if let Err(err) = self.local.write_text(&remote.text).await {
            warn!(error = %err, id = %remote.id, "Failed to write local clipboard");
            return CycleReport::skipped(pushed, SkipReason::WriteFailed);
        }

        info!(id = %remote.id, from = %remote.source, "Applied remote clipboard value");
        self.last_observed = Some(remote.text);

        CycleReport {
            pushed,
            applied: true,
            skipped: None,
        }
    }

    async fn push_if_changed(&mut self, text: &str) -> bool {
        if text.is_empty() || self.last_observed.as_deref() == Some(text) {
            return false;
        }

        match self.remote.submit(text, &self.source).await {
            Ok(entry) => {
                info!(id = %entry.id, len = text.len(), "Pushed local clipboard value");
                self.last_observed = Some(text.to_string());
                true
            }
            Err(err) => {
                warn!(error = %err, "Failed to push clipboard value, retrying next cycle");
                false
            }
        }
    }
}
