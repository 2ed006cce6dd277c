//! Server runtime: wired dependencies plus a use case factory.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use lc_app::usecases::{
    DeleteEntry, FetchLatestClipboard, ListHistory, SeedLatestValue, SetEntryPin,
    SubmitClipboard,
};
use lc_app::AppDeps;
use lc_infra::db::executor::DieselSqliteExecutor;
use lc_infra::db::mappers::ClipboardHistoryRowMapper;
use lc_infra::db::pool::init_db_pool;
use lc_infra::db::repositories::DieselClipboardHistoryRepository;
use lc_infra::{InMemoryLatestValue, SystemClock};

use crate::web::RequestLog;

/// Everything a running server shares between requests.
pub struct AppRuntime {
    deps: AppDeps,
    request_log: Arc<RequestLog>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self {
            deps,
            request_log: Arc::new(RequestLog::default()),
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    pub fn request_log(&self) -> &Arc<RequestLog> {
        &self.request_log
    }
}

/// Open the SQLite history at `database_path` and wire the server ports.
/// 打开 `database_path` 处的 SQLite 历史库并装配服务端端口。
///
/// Runs pending migrations. The latest-value cache starts empty; seed it
/// with [`UseCases::seed_latest_value`].
pub fn create_runtime(database_path: &Path) -> anyhow::Result<AppRuntime> {
    let database_url = database_path
        .to_str()
        .with_context(|| format!("Database path is not UTF-8: {}", database_path.display()))?;
    let pool = init_db_pool(database_url)
        .with_context(|| format!("Failed to open history database {database_url}"))?;

    let record_store = DieselClipboardHistoryRepository::new(
        DieselSqliteExecutor::new(pool),
        ClipboardHistoryRowMapper,
        Arc::new(SystemClock),
    );

    Ok(AppRuntime::new(AppDeps {
        record_store: Arc::new(record_store),
        latest_value: Arc::new(InMemoryLatestValue::new()),
    }))
}

/// Use case accessor for [`AppRuntime`].
///
/// Each method returns a use case wired to this runtime's ports, so
/// handlers never deal with ports directly.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn submit_clipboard(&self) -> SubmitClipboard {
        SubmitClipboard::from_ports(
            self.runtime.deps.record_store.clone(),
            self.runtime.deps.latest_value.clone(),
        )
    }

    pub fn fetch_latest_clipboard(&self) -> FetchLatestClipboard {
        FetchLatestClipboard::from_port(self.runtime.deps.latest_value.clone())
    }

    pub fn list_history(&self) -> ListHistory {
        ListHistory::from_port(self.runtime.deps.record_store.clone())
    }

    pub fn set_entry_pin(&self) -> SetEntryPin {
        SetEntryPin::from_port(self.runtime.deps.record_store.clone())
    }

    pub fn delete_entry(&self) -> DeleteEntry {
        DeleteEntry::from_port(self.runtime.deps.record_store.clone())
    }

    pub fn seed_latest_value(&self) -> SeedLatestValue {
        SeedLatestValue::from_ports(
            self.runtime.deps.record_store.clone(),
            self.runtime.deps.latest_value.clone(),
        )
    }
}
