//! Client-side convergence between the local clipboard and the server.
mod sync_loop;

pub use sync_loop::{ClipboardSyncLoop, CycleReport, SkipReason};
