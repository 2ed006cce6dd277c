//! Convergence loop tests against in-memory clipboard and server fakes.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use lc_app::{ClipboardSyncLoop, CycleReport, SkipReason};
use lc_core::clipboard::ClipboardEntry;
use lc_core::ports::{
    ClipboardAccessError, LocalClipboardPort, RemoteClipboardError, RemoteClipboardPort,
};
use lc_core::EntryId;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
struct FakeClipboard {
    text: Mutex<String>,
    writes: Mutex<Vec<String>>,
    fail_read: Mutex<bool>,
    fail_write: Mutex<bool>,
    read_only: bool,
}

impl FakeClipboard {
    fn with_text(text: &str) -> Self {
        Self {
            text: Mutex::new(text.to_string()),
            ..Default::default()
        }
    }

    fn read_only(text: &str) -> Self {
        Self {
            read_only: true,
            ..Self::with_text(text)
        }
    }

    fn copy(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }

    fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocalClipboardPort for FakeClipboard {
    async fn read_text(&self) -> Result<String, ClipboardAccessError> {
        if *self.fail_read.lock().unwrap() {
            return Err(ClipboardAccessError::Timeout {
                command: "xclip -selection clipboard -o".to_string(),
                timeout: Duration::from_secs(2),
            });
        }
        Ok(self.text.lock().unwrap().clone())
    }

    fn can_write(&self) -> bool {
        !self.read_only
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        if self.read_only {
            return Err(ClipboardAccessError::NotConfigured);
        }
        if *self.fail_write.lock().unwrap() {
            return Err(ClipboardAccessError::CommandFailed {
                command: "xclip -selection clipboard".to_string(),
                message: "exit status 1".to_string(),
            });
        }
        self.writes.lock().unwrap().push(text.to_string());
        *self.text.lock().unwrap() = text.to_string();
        Ok(())
    }
}

/// Latest-value-only server double.
#[derive(Default)]
struct FakeServer {
    entries: Mutex<Vec<ClipboardEntry>>,
    submits: Mutex<Vec<(String, String)>>,
    fetches: Mutex<usize>,
    fail_submit: Mutex<bool>,
    fail_fetch: Mutex<bool>,
}

impl FakeServer {
    fn record(&self, text: &str, source: &str) -> ClipboardEntry {
        let mut entries = self.entries.lock().unwrap();
        let entry = ClipboardEntry {
            id: EntryId::new(entries.len() as i64 + 1),
            text: text.to_string(),
            source: source.to_string(),
            updated_at: Utc::now(),
            pinned: false,
        };
        entries.push(entry.clone());
        entry
    }

    fn submits(&self) -> Vec<(String, String)> {
        self.submits.lock().unwrap().clone()
    }

    fn fetches(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl RemoteClipboardPort for FakeServer {
    async fn submit(&self, text: &str, source: &str) -> Result<ClipboardEntry, RemoteClipboardError> {
        if *self.fail_submit.lock().unwrap() {
            return Err(RemoteClipboardError::Transport("connection refused".to_string()));
        }
        self.submits
            .lock()
            .unwrap()
            .push((text.to_string(), source.to_string()));
        Ok(self.record(text, source))
    }

    async fn fetch_latest(&self) -> Result<ClipboardEntry, RemoteClipboardError> {
        *self.fetches.lock().unwrap() += 1;
        if *self.fail_fetch.lock().unwrap() {
            return Err(RemoteClipboardError::Status {
                status: 500,
                body: "storage error".to_string(),
            });
        }
        self.entries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .ok_or(RemoteClipboardError::Empty)
    }
}

/// Server double whose `submit` parks until the test releases it.
#[derive(Default)]
struct HeldSubmitServer {
    inner: FakeServer,
    submit_started: Notify,
    release_submit: Notify,
}

#[async_trait]
impl RemoteClipboardPort for HeldSubmitServer {
    async fn submit(&self, text: &str, source: &str) -> Result<ClipboardEntry, RemoteClipboardError> {
        self.submit_started.notify_one();
        self.release_submit.notified().await;
        self.inner.submit(text, source).await
    }

    async fn fetch_latest(&self) -> Result<ClipboardEntry, RemoteClipboardError> {
        self.inner.fetch_latest().await
    }
}

fn sync_loop(
    local: &Arc<FakeClipboard>,
    server: &Arc<FakeServer>,
    source: &str,
) -> ClipboardSyncLoop {
    ClipboardSyncLoop::new(
        local.clone(),
        server.clone(),
        source,
        Duration::from_millis(10),
    )
}

#[tokio::test]
async fn own_echo_is_not_written_back() {
    let local = Arc::new(FakeClipboard::with_text("X"));
    let server = Arc::new(FakeServer::default());
    let mut sync = sync_loop(&local, &server, "laptop");

    let report = sync.run_cycle().await;

    assert_eq!(
        report,
        CycleReport {
            pushed: true,
            applied: false,
            skipped: Some(SkipReason::OwnSource),
        }
    );
    assert_eq!(server.submits(), vec![("X".to_string(), "laptop".to_string())]);
    assert!(local.writes().is_empty());
    assert_eq!(sync.last_observed(), Some("X"));
}

#[tokio::test]
async fn unchanged_clipboard_is_pushed_once() {
    let local = Arc::new(FakeClipboard::with_text("same"));
    let server = Arc::new(FakeServer::default());
    let mut sync = sync_loop(&local, &server, "laptop");

    for _ in 0..3 {
        sync.run_cycle().await;
    }

    assert_eq!(server.submits().len(), 1);
    assert_eq!(server.fetches(), 3);
    assert!(local.writes().is_empty());
}

#[tokio::test]
async fn local_text_is_trimmed_before_push() {
    let local = Arc::new(FakeClipboard::with_text("  padded\n"));
    let server = Arc::new(FakeServer::default());
    let mut sync = sync_loop(&local, &server, "laptop");

    sync.run_cycle().await;

    assert_eq!(server.submits()[0].0, "padded");
}

#[tokio::test]
async fn blank_local_clipboard_is_not_pushed() {
    let local = Arc::new(FakeClipboard::with_text(" \n\t"));
    let server = Arc::new(FakeServer::default());
    let mut sync = sync_loop(&local, &server, "laptop");

    let report = sync.run_cycle().await;

    assert!(!report.pushed);
    assert_eq!(report.skipped, Some(SkipReason::RemoteEmpty));
    assert!(server.submits().is_empty());
}

#[tokio::test]
async fn remote_value_from_other_source_is_applied() {
    let local = Arc::new(FakeClipboard::with_text(""));
    let server = Arc::new(FakeServer::default());
    server.record("from phone", "phone");
    let mut sync = sync_loop(&local, &server, "laptop");

    let report = sync.run_cycle().await;

    assert!(report.applied);
    assert_eq!(local.writes(), vec!["from phone".to_string()]);
    assert_eq!(sync.last_observed(), Some("from phone"));

    // The applied value now sits in the local clipboard and must not bounce back.
    let report = sync.run_cycle().await;
    assert!(!report.pushed);
    assert_eq!(report.skipped, Some(SkipReason::AlreadyInSync));
    assert!(server.submits().is_empty());
}

#[tokio::test]
async fn remote_equal_to_local_is_not_rewritten() {
    let local = Arc::new(FakeClipboard::with_text("shared"));
    let server = Arc::new(FakeServer::default());
    server.record("shared", "phone");
    let mut sync = sync_loop(&local, &server, "laptop");
    sync.run_cycle().await;

    // Pushed once under our label, then the phone re-submits the same text.
    server.record("shared", "phone");
    let report = sync.run_cycle().await;

    assert_eq!(report.skipped, Some(SkipReason::AlreadyInSync));
    assert!(local.writes().is_empty());
}

#[tokio::test]
async fn failed_push_is_retried_next_cycle() {
    let local = Arc::new(FakeClipboard::with_text("retry me"));
    let server = Arc::new(FakeServer::default());
    *server.fail_submit.lock().unwrap() = true;
    let mut sync = sync_loop(&local, &server, "laptop");

    let report = sync.run_cycle().await;
    assert!(!report.pushed);
    assert_eq!(sync.last_observed(), None);

    *server.fail_submit.lock().unwrap() = false;
    let report = sync.run_cycle().await;

    assert!(report.pushed);
    assert_eq!(
        server.submits(),
        vec![("retry me".to_string(), "laptop".to_string())]
    );
}

#[tokio::test]
async fn read_failure_skips_push_and_pull() {
    let local = Arc::new(FakeClipboard::with_text("ignored"));
    *local.fail_read.lock().unwrap() = true;
    let server = Arc::new(FakeServer::default());
    server.record("remote", "phone");
    let mut sync = sync_loop(&local, &server, "laptop");

    let report = sync.run_cycle().await;

    assert_eq!(report.skipped, Some(SkipReason::LocalReadFailed));
    assert!(server.submits().is_empty());
    assert_eq!(server.fetches(), 0);
    assert!(local.writes().is_empty());
}

#[tokio::test]
async fn read_only_adapter_never_fetches() {
    let local = Arc::new(FakeClipboard::read_only("one way"));
    let server = Arc::new(FakeServer::default());
    server.record("remote", "phone");
    let mut sync = sync_loop(&local, &server, "laptop");

    let report = sync.run_cycle().await;

    assert!(report.pushed);
    assert_eq!(report.skipped, Some(SkipReason::WriteUnsupported));
    assert_eq!(server.fetches(), 0);
}

#[tokio::test]
async fn fetch_failure_is_not_fatal() {
    let local = Arc::new(FakeClipboard::with_text("a"));
    let server = Arc::new(FakeServer::default());
    *server.fail_fetch.lock().unwrap() = true;
    let mut sync = sync_loop(&local, &server, "laptop");

    let report = sync.run_cycle().await;
    assert!(report.pushed);
    assert_eq!(report.skipped, Some(SkipReason::FetchFailed));

    *server.fail_fetch.lock().unwrap() = false;
    server.record("b", "phone");
    let report = sync.run_cycle().await;
    assert!(report.applied);
}

#[tokio::test]
async fn failed_local_write_keeps_last_observed() {
    let local = Arc::new(FakeClipboard::with_text(""));
    *local.fail_write.lock().unwrap() = true;
    let server = Arc::new(FakeServer::default());
    server.record("remote", "phone");
    let mut sync = sync_loop(&local, &server, "laptop");

    let report = sync.run_cycle().await;

    assert_eq!(report.skipped, Some(SkipReason::WriteFailed));
    assert_eq!(sync.last_observed(), None);
}

#[tokio::test]
async fn new_local_copy_after_pull_is_pushed() {
    let local = Arc::new(FakeClipboard::with_text(""));
    let server = Arc::new(FakeServer::default());
    server.record("from phone", "phone");
    let mut sync = sync_loop(&local, &server, "laptop");
    sync.run_cycle().await;

    local.copy("typed on laptop");
    let report = sync.run_cycle().await;

    assert!(report.pushed);
    assert_eq!(report.skipped, Some(SkipReason::OwnSource));
    assert_eq!(local.writes(), vec!["from phone".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn cancellation_stops_loop_between_cycles() {
    let local = Arc::new(FakeClipboard::with_text("X"));
    let server = Arc::new(FakeServer::default());
    let mut sync = ClipboardSyncLoop::new(
        local.clone(),
        server.clone(),
        "laptop",
        Duration::from_secs(3600),
    );
    let token = CancellationToken::new();

    let loop_token = token.clone();
    let handle = tokio::spawn(async move { sync.run(loop_token).await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    token.cancel();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("loop did not stop after cancellation")
        .unwrap();

    assert_eq!(server.submits().len(), 1);
    assert_eq!(server.fetches(), 1);
}

#[tokio::test]
async fn cancellation_during_push_finishes_the_cycle() {
    let local = Arc::new(FakeClipboard::with_text("X"));
    let server = Arc::new(HeldSubmitServer::default());
    let mut sync = ClipboardSyncLoop::new(
        local.clone(),
        server.clone(),
        "laptop",
        Duration::from_millis(10),
    );
    let token = CancellationToken::new();

    let loop_token = token.clone();
    let handle = tokio::spawn(async move {
        sync.run(loop_token).await;
        sync
    });

    server.submit_started.notified().await;
    token.cancel();
    server.release_submit.notify_one();

    let sync = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("loop did not stop after the in-flight push")
        .unwrap();

    assert_eq!(
        server.inner.submits(),
        vec![("X".to_string(), "laptop".to_string())]
    );
    assert_eq!(server.inner.fetches(), 1);
    assert_eq!(sync.last_observed(), Some("X"));
}

#[tokio::test]
async fn cancelled_before_start_runs_no_cycle() {
    let local = Arc::new(FakeClipboard::with_text("X"));
    let server = Arc::new(FakeServer::default());
    let token = CancellationToken::new();
    token.cancel();

    sync_loop(&local, &server, "laptop").run(token).await;

    assert!(server.submits().is_empty());
    assert_eq!(server.fetches(), 0);
}
