use diesel::SqliteConnection;

/// Hands a pooled SQLite connection to repository code.
/// 为仓储代码提供一个池化的 SQLite 连接。
///
/// ## Contract / 约定
/// - `f` runs synchronously on the calling thread with one connection
///   checked out for its whole duration.
/// - Errors from checking out a connection and errors returned by `f`
///   both surface as the returned `Err`.
/// - Nothing is wrapped in a transaction; `f` opens one when it needs
///   several statements to apply together.
pub trait DbExecutor: Send + Sync {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T>;
}
