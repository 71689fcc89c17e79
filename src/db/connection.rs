use rusqlite::{Connection, OpenFlags};
use std::cell::RefCell;
use std::fs;

use crate::errors::{classify_sqlite, ServerError};

// Thread-local connection slot, keyed by path so two handles in the
// same thread never alias each other's connection.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Open or fetch the per-thread SQLite connection and run `f(conn)`.
    ///
    /// Connections are opened read-only: request handling never writes,
    /// and a missing database file must surface as `DataUnavailable`
    /// instead of being silently created empty.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Connection) -> Result<T, ServerError>,
    {
        let inner_result = DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();

                let stale = match &*slot {
                    Some((path, _)) => path != &self.path,
                    None => true,
                };
                if stale {
                    let conn = Connection::open_with_flags(
                        &self.path,
                        OpenFlags::SQLITE_OPEN_READ_ONLY
                            | OpenFlags::SQLITE_OPEN_URI
                            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                    )
                    .map_err(|e| {
                        ServerError::DataUnavailable(format!("Open {} failed: {e}", self.path))
                    })?;
                    *slot = Some((self.path.clone(), conn));
                }

                let (_, conn) = slot.as_ref().unwrap();
                f(conn)
            })
            .map_err(|_| ServerError::InternalError)?;
        inner_result
    }

    /// Cheap reachability probe, used once at startup.
    pub fn ping(&self) -> Result<(), ServerError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))
                .map_err(classify_sqlite)
        })
    }
}

/// Apply a SQL schema file to the database at `path`.
///
/// Only fixtures go through here; the served dataset arrives
/// pre-populated and is never written by this process.
pub fn init_db(path: &str, schema_path: &str) -> Result<(), ServerError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::DataUnavailable(format!("Failed to read schema file: {e}")))?;

    let conn = Connection::open(path)
        .map_err(|e| ServerError::DataUnavailable(format!("Open {path} failed: {e}")))?;
    conn.execute_batch(&schema_sql).map_err(classify_sqlite)?;

    tracing::info!(path, schema = schema_path, "database initialized");
    Ok(())
}
