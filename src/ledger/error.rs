//! Ledger error types

use thiserror::Error;

/// Errors surfaced by the ledger store and the transfer engine
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("account not found: {0}")]
    AccountNotFound(i64),

    #[error("entry not found: {0}")]
    EntryNotFound(i64),

    #[error("transfer not found: {0}")]
    TransferNotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("transaction deadline exceeded")]
    Cancelled,

    /// The unit of work failed and the rollback attempt failed too.
    ///
    /// Both causes are kept as structured fields so callers can tell
    /// "work failed, rollback ok" apart from "work failed, rollback also
    /// failed" without parsing messages.
    #[error("transaction failed: {source}; rollback also failed: {rollback}")]
    RollbackFailed {
        source: Box<LedgerError>,
        rollback: sqlx::Error,
    },
}

impl LedgerError {
    /// Stable error code for API responses and structured logs
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            LedgerError::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            LedgerError::TransferNotFound(_) => "TRANSFER_NOT_FOUND",
            LedgerError::Database(_) => "DATABASE_ERROR",
            LedgerError::Cancelled => "TX_CANCELLED",
            LedgerError::RollbackFailed { .. } => "ROLLBACK_FAILED",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            LedgerError::AccountNotFound(_)
            | LedgerError::EntryNotFound(_)
            | LedgerError::TransferNotFound(_) => 404,
            LedgerError::Cancelled => 408,
            LedgerError::Database(_) | LedgerError::RollbackFailed { .. } => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::AccountNotFound(7).code(), "ACCOUNT_NOT_FOUND");
        assert_eq!(LedgerError::Cancelled.code(), "TX_CANCELLED");
        assert_eq!(
            LedgerError::RollbackFailed {
                source: Box::new(LedgerError::AccountNotFound(7)),
                rollback: sqlx::Error::PoolClosed,
            }
            .code(),
            "ROLLBACK_FAILED"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(LedgerError::AccountNotFound(1).http_status(), 404);
        assert_eq!(LedgerError::Cancelled.http_status(), 408);
        assert_eq!(LedgerError::Database(sqlx::Error::PoolClosed).http_status(), 500);
    }

    #[test]
    fn test_rollback_failure_keeps_both_causes() {
        let err = LedgerError::RollbackFailed {
            source: Box::new(LedgerError::AccountNotFound(42)),
            rollback: sqlx::Error::PoolClosed,
        };

        // The original work error stays reachable through source().
        let cause = err.source().expect("must expose the work error");
        assert!(cause.to_string().contains("account not found: 42"));

        let msg = err.to_string();
        assert!(msg.contains("account not found: 42"));
        assert!(msg.contains("rollback also failed"));
    }
}
