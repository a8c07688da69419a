//! Scoped write transaction for NoteStore.

use crate::store::StoreResult;
use rusqlite::{Connection, Params};
use tracing::{trace, warn};

/// Write transaction over the store's connection.
///
/// Everything executed through it becomes visible together on `commit()`.
/// Dropping it uncommitted, including while unwinding from an error, rolls
/// all of it back.
pub struct Transaction<'a> {
    conn: &'a Connection,
    label: &'static str,
    committed: bool,
}

impl<'a> Transaction<'a> {
    /// Opens a transaction; `label` names it in logs.
    pub(crate) fn begin(conn: &'a Connection, label: &'static str) -> StoreResult<Self> {
        conn.execute_batch("BEGIN")?;
        trace!(label, "transaction started");
        Ok(Self {
            conn,
            label,
            committed: false,
        })
    }

    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }

    /// Executes a SQL statement within the transaction.
    pub fn execute(&self, sql: &str, params: impl Params) -> StoreResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Makes every change in the transaction visible.
    pub fn commit(mut self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.committed = true;
        trace!(label = self.label, "transaction committed");
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match self.conn.execute_batch("ROLLBACK") {
            Ok(()) => trace!(label = self.label, "transaction rolled back"),
            Err(err) => warn!(label = self.label, error = %err, "rollback failed"),
        }
    }
}
