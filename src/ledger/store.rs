//! Ledger store facade
//!
//! Owns the connection pool and fronts the point queries for callers that
//! do not need their own transaction. Multi-step workflows go through
//! [`LedgerStore::run_in_transaction`](super::executor).

use std::time::Duration;

use sqlx::PgPool;

use super::error::LedgerError;
use super::models::{Account, Entry, Transfer};
use super::queries;

/// Accessor over persisted Account / Entry / Transfer records
#[derive(Clone)]
pub struct LedgerStore {
    pool: PgPool,
    tx_deadline: Option<Duration>,
}

impl LedgerStore {
    /// Create a store over an existing pool
    ///
    /// `tx_deadline` bounds every transaction run through the executor; on
    /// expiry the transaction is rolled back and the caller sees `Cancelled`.
    pub fn new(pool: PgPool, tx_deadline: Option<Duration>) -> Self {
        Self { pool, tx_deadline }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub(crate) fn tx_deadline(&self) -> Option<Duration> {
        self.tx_deadline
    }

    pub async fn create_account(&self, owner: &str, currency: &str) -> Result<Account, LedgerError> {
        queries::create_account(&self.pool, owner, currency).await
    }

    pub async fn get_account(&self, id: i64) -> Result<Account, LedgerError> {
        queries::get_account(&self.pool, id).await
    }

    pub async fn list_accounts(&self, limit: i64, offset: i64) -> Result<Vec<Account>, LedgerError> {
        queries::list_accounts(&self.pool, limit, offset).await
    }

    pub async fn update_account_balance(&self, id: i64, balance: i64) -> Result<Account, LedgerError> {
        queries::update_account_balance(&self.pool, id, balance).await
    }

    pub async fn delete_account(&self, id: i64) -> Result<(), LedgerError> {
        queries::delete_account(&self.pool, id).await
    }

    pub async fn get_entry(&self, id: i64) -> Result<Entry, LedgerError> {
        queries::get_entry(&self.pool, id).await
    }

    pub async fn list_entries(
        &self,
        account_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Entry>, LedgerError> {
        queries::list_entries(&self.pool, account_id, limit, offset).await
    }

    pub async fn get_transfer(&self, id: i64) -> Result<Transfer, LedgerError> {
        queries::get_transfer(&self.pool, id).await
    }

    pub async fn list_transfers(
        &self,
        from_account_id: i64,
        to_account_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transfer>, LedgerError> {
        queries::list_transfers(&self.pool, from_account_id, to_account_id, limit, offset).await
    }
}
