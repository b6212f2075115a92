//! # mathcalc-store
//!
//! SQLite audit store for completed computations. Every computation is
//! persisted as one insert-only row: operation tag, compact-JSON
//! parameters, decimal result and a store-assigned timestamp. Results are
//! stored as TEXT so arbitrary-precision values survive unmodified; rows
//! are never updated or deleted by this crate.

use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use tracing::debug;

/// Store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying SQLite failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// One persisted computation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedComputation {
    /// Monotonic id, assigned by the store.
    pub id: i64,
    /// Operation tag: "pow", "fib" or "fact".
    pub op: String,
    /// Compact JSON object of argument name to integer value.
    pub params: String,
    /// Decimal rendering of the exact result.
    pub result: String,
    /// Insertion timestamp (UTC, `datetime('now')`).
    pub created_at: String,
}

/// Insert-only audit store over a single SQLite connection.
///
/// The connection sits behind a mutex; callers may share a `Storage`
/// across threads.
pub struct Storage {
    conn: Mutex<Connection>,
}

impl Storage {
    /// Open the store at `path`, creating the file and schema if missing.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        // WAL improves concurrent reader behavior for the history views
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    /// In-memory store (for tests).
    pub fn in_memory() -> Result<Self, StoreError> {
        let storage = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.lock().execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS computations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                op TEXT NOT NULL,
                params TEXT NOT NULL,
                result TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            ",
        )?;
        Ok(())
    }

    /// Persist one computation.
    ///
    /// `params_json` is the compact JSON argument map; `result` is the
    /// decimal rendering of the exact value.
    pub fn log(&self, op: &str, params_json: &str, result: &str) -> Result<(), StoreError> {
        self.conn.lock().execute(
            "INSERT INTO computations (op, params, result) VALUES (?1, ?2, ?3)",
            params![op, params_json, result],
        )?;
        debug!(op, "computation logged");
        Ok(())
    }

    /// The most recent computations, newest first.
    pub fn recent(&self, limit: u32) -> Result<Vec<LoggedComputation>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, op, params, result, created_at
             FROM computations ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok(LoggedComputation {
                id: row.get(0)?,
                op: row.get(1)?,
                params: row.get(2)?,
                result: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}
