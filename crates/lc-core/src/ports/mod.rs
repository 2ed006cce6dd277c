//! Port interfaces for the application layer
//! 应用层的端口接口
//!
//! Ports define the contract between the use cases and their
//! infrastructure implementations. Record storage, the latest-value cache,
//! the OS clipboard and the remote server are all reached through these
//! traits so the sync logic can run against in-memory fakes.

mod clock;
pub mod errors;
mod latest_value;
mod local_clipboard;
mod record_store;
mod remote_clipboard;

pub use clock::ClockPort;
pub use errors::{ClipboardAccessError, RecordStoreError, RemoteClipboardError};
pub use latest_value::LatestValuePort;
pub use local_clipboard::LocalClipboardPort;
pub use record_store::RecordStorePort;
pub use remote_clipboard::RemoteClipboardPort;
