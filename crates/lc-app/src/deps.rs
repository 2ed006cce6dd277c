//! Dependency grouping for the server side.
//!
//! Plain parameter packing: every field is required and nothing is defaulted.

use std::sync::Arc;

use lc_core::ports::{LatestValuePort, RecordStorePort};

pub struct AppDeps {
    pub record_store: Arc<dyn RecordStorePort>,
    pub latest_value: Arc<dyn LatestValuePort>,
}
