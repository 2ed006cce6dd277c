use std::sync::Arc;

use anyhow::Context;
use diesel::SqliteConnection;

use crate::db::pool::DbPool;
use crate::db::ports::DbExecutor;

/// [`DbExecutor`] over the shared r2d2 pool. Clones share the pool.
#[derive(Clone)]
pub struct DieselSqliteExecutor {
    pool: Arc<DbPool>,
}

impl DieselSqliteExecutor {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

impl DbExecutor for DieselSqliteExecutor {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut conn = self
            .pool
            .get()
            .context("Failed to check out a history database connection")?;
        f(&mut conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::init_db_pool;
    use diesel::connection::SimpleConnection;
    use tempfile::TempDir;

    fn executor(dir: &TempDir) -> DieselSqliteExecutor {
        let path = dir.path().join("executor.db");
        DieselSqliteExecutor::new(init_db_pool(path.to_str().unwrap()).unwrap())
    }

    #[test]
    fn clones_share_one_database() {
        let dir = TempDir::new().unwrap();
        let executor = executor(&dir);
        let other = executor.clone();

        executor
            .run(|conn| Ok(conn.batch_execute("CREATE TABLE marks (n INTEGER)")?))
            .unwrap();
        other
            .run(|conn| Ok(conn.batch_execute("INSERT INTO marks VALUES (1)")?))
            .unwrap();
    }

    #[test]
    fn closure_error_is_returned() {
        let dir = TempDir::new().unwrap();

        let err = executor(&dir)
            .run(|conn| -> anyhow::Result<()> {
                conn.batch_execute("SELECT * FROM no_such_table")?;
                Ok(())
            })
            .unwrap_err();

        assert!(err.to_string().contains("no_such_table"));
    }
}
