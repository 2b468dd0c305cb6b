//! Store-level CRUD round trips for accounts, entries and transfers
//!
//! Requires a live PostgreSQL; run with `cargo test --test ledger_crud -- --ignored`.

mod common;

use async_trait::async_trait;
use sqlx::PgConnection;

use common::{create_random_account, random_currency, random_money, random_owner, test_store};
use ledgerbank::ledger::queries;
use ledgerbank::{LedgerError, UnitOfWork};

#[tokio::test]
#[ignore] // Requires PostgreSQL running
async fn test_create_and_get_account() {
    let store = test_store().await;

    let owner = random_owner();
    let currency = random_currency();
    let account = store.create_account(&owner, &currency).await.unwrap();

    assert!(account.id > 0);
    assert_eq!(account.owner, owner);
    assert_eq!(account.currency, currency);
    assert_eq!(account.balance, 0);

    let fetched = store.get_account(account.id).await.unwrap();
    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.owner, account.owner);
    assert_eq!(fetched.balance, account.balance);
    assert_eq!(fetched.created_at, account.created_at);
}

#[tokio::test]
#[ignore]
async fn test_get_account_not_found() {
    let store = test_store().await;

    let err = store.get_account(i64::MAX).await.expect_err("must not exist");
    assert!(matches!(err, LedgerError::AccountNotFound(_)));
}

#[tokio::test]
#[ignore]
async fn test_update_account_balance() {
    let store = test_store().await;

    let account = create_random_account(&store).await;
    let updated = store.update_account_balance(account.id, 12345).await.unwrap();

    assert_eq!(updated.id, account.id);
    assert_eq!(updated.balance, 12345);
    // Owner and currency stay untouched.
    assert_eq!(updated.owner, account.owner);
    assert_eq!(updated.currency, account.currency);
}

/// Read-then-write top-up under a `FOR UPDATE` row lock
struct LockedTopUpWork {
    account_id: i64,
    amount: i64,
}

#[async_trait]
impl UnitOfWork for LockedTopUpWork {
    type Output = i64;

    async fn run(&mut self, tx: &mut PgConnection) -> Result<i64, LedgerError> {
        let account = queries::get_account_for_update(&mut *tx, self.account_id).await?;
        let updated =
            queries::update_account_balance(&mut *tx, self.account_id, account.balance + self.amount)
                .await?;
        Ok(updated.balance)
    }
}

#[tokio::test]
#[ignore]
async fn test_locked_read_then_write_loses_no_top_up() {
    let store = test_store().await;

    let account = create_random_account(&store).await;
    let n = 5;
    let amount = 10i64;

    let mut handles = Vec::with_capacity(n);
    for _ in 0..n {
        let store = store.clone();
        let mut work = LockedTopUpWork {
            account_id: account.id,
            amount,
        };
        handles.push(tokio::spawn(async move {
            store.run_in_transaction(&mut work).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("Top-up should commit");
    }

    // The row lock serializes the read-then-write pairs.
    let updated = store.get_account(account.id).await.unwrap();
    assert_eq!(updated.balance, account.balance + amount * n as i64);
}

#[tokio::test]
#[ignore]
async fn test_delete_account() {
    let store = test_store().await;

    let account = store
        .create_account(&random_owner(), &random_currency())
        .await
        .unwrap();

    store.delete_account(account.id).await.unwrap();

    let err = store.get_account(account.id).await.expect_err("was deleted");
    assert!(matches!(err, LedgerError::AccountNotFound(_)));

    let err = store.delete_account(account.id).await.expect_err("already gone");
    assert!(matches!(err, LedgerError::AccountNotFound(_)));
}

#[tokio::test]
#[ignore]
async fn test_list_accounts() {
    let store = test_store().await;

    for _ in 0..10 {
        create_random_account(&store).await;
    }

    let page = store.list_accounts(5, 5).await.unwrap();
    assert_eq!(page.len(), 5);
    for pair in page.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_entry() {
    let store = test_store().await;

    let account = create_random_account(&store).await;
    let amount = random_money();

    let entry = queries::create_entry(store.pool(), account.id, amount)
        .await
        .unwrap();
    assert!(entry.id > 0);
    assert_eq!(entry.account_id, account.id);
    assert_eq!(entry.amount, amount);

    let fetched = store.get_entry(entry.id).await.unwrap();
    assert_eq!(fetched.id, entry.id);
    assert_eq!(fetched.amount, entry.amount);
    assert_eq!(fetched.created_at, entry.created_at);
}

#[tokio::test]
#[ignore]
async fn test_list_entries() {
    let store = test_store().await;

    let account = create_random_account(&store).await;
    for _ in 0..10 {
        queries::create_entry(store.pool(), account.id, random_money())
            .await
            .unwrap();
    }

    let page = store.list_entries(account.id, 5, 5).await.unwrap();
    assert_eq!(page.len(), 5);
    for entry in &page {
        assert_eq!(entry.account_id, account.id);
    }
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_transfer() {
    let store = test_store().await;

    let from = create_random_account(&store).await;
    let to = create_random_account(&store).await;
    let amount = random_money().max(1);

    let transfer = queries::create_transfer(store.pool(), from.id, to.id, amount)
        .await
        .unwrap();
    assert!(transfer.id > 0);
    assert_eq!(transfer.from_account_id, from.id);
    assert_eq!(transfer.to_account_id, to.id);
    assert_eq!(transfer.amount, amount);

    let fetched = store.get_transfer(transfer.id).await.unwrap();
    assert_eq!(fetched.id, transfer.id);
    assert_eq!(fetched.amount, transfer.amount);
    assert_eq!(fetched.created_at, transfer.created_at);
}

#[tokio::test]
#[ignore]
async fn test_list_transfers() {
    let store = test_store().await;

    let from = create_random_account(&store).await;
    let to = create_random_account(&store).await;
    for _ in 0..5 {
        queries::create_transfer(store.pool(), from.id, to.id, 10)
            .await
            .unwrap();
        queries::create_transfer(store.pool(), to.id, from.id, 10)
            .await
            .unwrap();
    }

    let transfers = store.list_transfers(from.id, from.id, 100, 0).await.unwrap();
    assert_eq!(transfers.len(), 10);
    for transfer in &transfers {
        assert!(transfer.from_account_id == from.id || transfer.to_account_id == from.id);
    }
}
