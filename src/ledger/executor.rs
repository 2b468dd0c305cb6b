//! Atomic transaction execution
//!
//! [`LedgerStore::run_in_transaction`] gives a unit of work all-or-nothing
//! semantics: commit on success, rollback on any failure. If the rollback
//! itself fails, both causes come back in [`LedgerError::RollbackFailed`].

use async_trait::async_trait;
use sqlx::PgConnection;
use tokio::time::timeout;

use super::error::LedgerError;
use super::store::LedgerStore;

/// A unit of work to run inside one database transaction
///
/// All operations go through the transaction connection the executor hands
/// in, so nothing the work writes is visible outside the transaction until
/// commit. The executor invokes `run` exactly once per call.
#[async_trait]
pub trait UnitOfWork: Send {
    type Output: Send;

    async fn run(&mut self, tx: &mut PgConnection) -> Result<Self::Output, LedgerError>;
}

impl LedgerStore {
    /// Run a unit of work inside a database transaction
    ///
    /// - work ok: commit; a commit failure is returned and the work's output
    ///   discarded.
    /// - work err: rollback, then return the work's error; if the rollback
    ///   fails too, both errors are bundled in `RollbackFailed`.
    /// - configured deadline exceeded: the work future is dropped, the
    ///   transaction is still rolled back, and `Cancelled` is returned. A
    ///   transaction is never left open.
    ///
    /// No retries happen here. Retry policy belongs to the caller, so one
    /// call means at most one committed transaction.
    pub async fn run_in_transaction<W>(&self, work: &mut W) -> Result<W::Output, LedgerError>
    where
        W: UnitOfWork,
    {
        let mut tx = self.pool().begin().await?;

        let outcome = match self.tx_deadline() {
            Some(deadline) => match timeout(deadline, work.run(&mut *tx)).await {
                Ok(result) => result,
                Err(_) => Err(LedgerError::Cancelled),
            },
            None => work.run(&mut *tx).await,
        };

        match outcome {
            Ok(output) => {
                tx.commit().await?;
                Ok(output)
            }
            Err(work_err) => match tx.rollback().await {
                Ok(()) => Err(work_err),
                Err(rollback_err) => Err(LedgerError::RollbackFailed {
                    source: Box::new(work_err),
                    rollback: rollback_err,
                }),
            },
        }
    }
}
