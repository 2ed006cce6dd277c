//! local-clipboard application layer
//!
//! Use cases behind the HTTP surface and the client-side convergence loop.

pub mod deps;
pub mod sync;
pub mod usecases;

pub use deps::AppDeps;
pub use sync::{ClipboardSyncLoop, CycleReport, SkipReason};
pub use usecases::ClipboardServiceError;
