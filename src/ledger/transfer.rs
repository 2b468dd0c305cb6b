//! Money transfer workflow
//!
//! A transfer writes one transfer row, two balancing entries and both
//! balance deltas in a single database transaction. Balance updates are
//! applied in ascending account-id order so any two concurrent transfers
//! touching the same pair of accounts request the row locks in the same
//! relative order and cannot deadlock.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgConnection;
use utoipa::ToSchema;

use super::error::LedgerError;
use super::executor::UnitOfWork;
use super::models::{Account, Entry, Transfer};
use super::queries;
use super::store::LedgerStore;

/// Input of one transfer: move `amount` from one account to the other
///
/// Callers validate upstream that `amount > 0`, the accounts differ and both
/// exist; the engine does not re-check. There is no sufficient-funds guard
/// here, so balances may go negative.
#[derive(Debug, Clone, Copy)]
pub struct TransferParams {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
}

/// Everything one committed transfer produced
///
/// The account snapshots are read back inside the same transaction, after
/// this transfer's deltas were applied.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TransferResult {
    pub transfer: Transfer,
    pub from_entry: Entry,
    pub to_entry: Entry,
    pub from_account: Account,
    pub to_account: Account,
}

/// The two balance deltas of a transfer, in global lock order
///
/// Returns `(account_id, delta)` pairs sorted by ascending account id,
/// regardless of which side is the logical "from". The comparison is a total
/// order over account ids, so every transaction in the system acquires the
/// two row locks in the same relative order.
fn ordered_deltas(params: &TransferParams) -> [(i64, i64); 2] {
    let debit = (params.from_account_id, -params.amount);
    let credit = (params.to_account_id, params.amount);

    if params.from_account_id < params.to_account_id {
        [debit, credit]
    } else {
        [credit, debit]
    }
}

/// The transfer workflow as a unit of work
struct TransferWork {
    params: TransferParams,
}

#[async_trait]
impl UnitOfWork for TransferWork {
    type Output = TransferResult;

    async fn run(&mut self, tx: &mut PgConnection) -> Result<TransferResult, LedgerError> {
        let params = self.params;

        let transfer = queries::create_transfer(
            &mut *tx,
            params.from_account_id,
            params.to_account_id,
            params.amount,
        )
        .await?;

        let from_entry = queries::create_entry(&mut *tx, params.from_account_id, -params.amount).await?;
        let to_entry = queries::create_entry(&mut *tx, params.to_account_id, params.amount).await?;

        // Row locks in ascending account-id order, then map the snapshots
        // back to the logical from/to sides.
        let [first, second] = ordered_deltas(&params);
        let first_account = queries::add_account_balance(&mut *tx, first.0, first.1).await?;
        let second_account = queries::add_account_balance(&mut *tx, second.0, second.1).await?;

        let (from_account, to_account) = if first.0 == params.from_account_id {
            (first_account, second_account)
        } else {
            (second_account, first_account)
        };

        Ok(TransferResult {
            transfer,
            from_entry,
            to_entry,
            from_account,
            to_account,
        })
    }
}

pub struct TransferService;

impl TransferService {
    /// Execute a validated transfer as one atomic transaction
    ///
    /// Either the full `TransferResult` comes back with the transaction
    /// committed, or an error does and nothing from the attempt is visible.
    pub async fn execute(
        store: &LedgerStore,
        params: TransferParams,
    ) -> Result<TransferResult, LedgerError> {
        let mut work = TransferWork { params };
        let result = store.run_in_transaction(&mut work).await;

        match &result {
            Ok(done) => {
                tracing::info!(
                    transfer_id = done.transfer.id,
                    from = params.from_account_id,
                    to = params.to_account_id,
                    amount = params.amount,
                    "transfer committed"
                );
            }
            Err(err) => {
                tracing::warn!(
                    code = err.code(),
                    from = params.from_account_id,
                    to = params.to_account_id,
                    amount = params.amount,
                    "transfer rolled back: {err}"
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(from: i64, to: i64, amount: i64) -> TransferParams {
        TransferParams {
            from_account_id: from,
            to_account_id: to,
            amount,
        }
    }

    #[test]
    fn test_ordered_deltas_from_smaller() {
        let [first, second] = ordered_deltas(&params(1, 2, 30));
        assert_eq!(first, (1, -30));
        assert_eq!(second, (2, 30));
    }

    #[test]
    fn test_ordered_deltas_to_smaller() {
        let [first, second] = ordered_deltas(&params(2, 1, 30));
        assert_eq!(first, (1, 30));
        assert_eq!(second, (2, -30));
    }

    #[test]
    fn test_ordered_deltas_same_pair_same_order() {
        // Opposite-direction transfers over the same pair must lock in the
        // same relative order.
        let a_to_b = ordered_deltas(&params(7, 9, 10));
        let b_to_a = ordered_deltas(&params(9, 7, 10));
        assert_eq!(a_to_b[0].0, b_to_a[0].0);
        assert_eq!(a_to_b[1].0, b_to_a[1].0);
    }

    #[test]
    fn test_ordered_deltas_conserve_money() {
        let [first, second] = ordered_deltas(&params(42, 17, 500));
        assert_eq!(first.1 + second.1, 0);
    }
}
