//! Point queries over accounts, entries and transfers
//!
//! Every function is generic over [`sqlx::PgExecutor`] so the same query runs
//! against the pool for one-shot reads or against the live connection of an
//! open transaction.

use sqlx::PgExecutor;

use super::error::LedgerError;
use super::models::{Account, Entry, Transfer};

const ACCOUNT_COLUMNS: &str = "id, owner, balance, currency, created_at";
const ENTRY_COLUMNS: &str = "id, account_id, amount, created_at";
const TRANSFER_COLUMNS: &str = "id, from_account_id, to_account_id, amount, created_at";

/// Create an account with a zero starting balance
pub async fn create_account<'e, E>(
    db: E,
    owner: &str,
    currency: &str,
) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    let account = sqlx::query_as::<_, Account>(&format!(
        "INSERT INTO accounts (owner, balance, currency) VALUES ($1, 0, $2) RETURNING {ACCOUNT_COLUMNS}"
    ))
    .bind(owner)
    .bind(currency)
    .fetch_one(db)
    .await?;

    Ok(account)
}

pub async fn get_account<'e, E>(db: E, id: i64) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await?
    .ok_or(LedgerError::AccountNotFound(id))
}

/// Locked read of an account row (`FOR UPDATE`)
///
/// Read-then-write fallback for units of work that cannot use the atomic
/// delta of [`add_account_balance`]. Only meaningful inside a transaction.
pub async fn get_account_for_update<'e, E>(db: E, id: i64) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(db)
    .await?
    .ok_or(LedgerError::AccountNotFound(id))
}

pub async fn list_accounts<'e, E>(db: E, limit: i64, offset: i64) -> Result<Vec<Account>, LedgerError>
where
    E: PgExecutor<'e>,
{
    let accounts = sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY id LIMIT $1 OFFSET $2"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(accounts)
}

/// Set an account balance outright
///
/// Only the balance is written; owner and currency stay untouched. The
/// transfer engine never calls this, it applies deltas instead.
pub async fn update_account_balance<'e, E>(
    db: E,
    id: i64,
    balance: i64,
) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Account>(&format!(
        "UPDATE accounts SET balance = $1 WHERE id = $2 RETURNING {ACCOUNT_COLUMNS}"
    ))
    .bind(balance)
    .bind(id)
    .fetch_optional(db)
    .await?
    .ok_or(LedgerError::AccountNotFound(id))
}

/// Atomically add a signed delta to an account balance
///
/// `balance = balance + $1` composes correctly under concurrent transfers on
/// the same account: the row lock taken by UPDATE serializes the deltas and
/// none is lost, even at read-committed isolation.
pub async fn add_account_balance<'e, E>(db: E, id: i64, delta: i64) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Account>(&format!(
        "UPDATE accounts SET balance = balance + $1 WHERE id = $2 RETURNING {ACCOUNT_COLUMNS}"
    ))
    .bind(delta)
    .bind(id)
    .fetch_optional(db)
    .await?
    .ok_or(LedgerError::AccountNotFound(id))
}

pub async fn delete_account<'e, E>(db: E, id: i64) -> Result<(), LedgerError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(LedgerError::AccountNotFound(id));
    }
    Ok(())
}

/// Append one ledger entry (negative = debit, positive = credit)
pub async fn create_entry<'e, E>(db: E, account_id: i64, amount: i64) -> Result<Entry, LedgerError>
where
    E: PgExecutor<'e>,
{
    let entry = sqlx::query_as::<_, Entry>(&format!(
        "INSERT INTO entries (account_id, amount) VALUES ($1, $2) RETURNING {ENTRY_COLUMNS}"
    ))
    .bind(account_id)
    .bind(amount)
    .fetch_one(db)
    .await?;

    Ok(entry)
}

pub async fn get_entry<'e, E>(db: E, id: i64) -> Result<Entry, LedgerError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Entry>(&format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(LedgerError::EntryNotFound(id))
}

pub async fn list_entries<'e, E>(
    db: E,
    account_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<Entry>, LedgerError>
where
    E: PgExecutor<'e>,
{
    let entries = sqlx::query_as::<_, Entry>(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries WHERE account_id = $1 ORDER BY id LIMIT $2 OFFSET $3"
    ))
    .bind(account_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(entries)
}

/// Record one directed money movement between two accounts
pub async fn create_transfer<'e, E>(
    db: E,
    from_account_id: i64,
    to_account_id: i64,
    amount: i64,
) -> Result<Transfer, LedgerError>
where
    E: PgExecutor<'e>,
{
    let transfer = sqlx::query_as::<_, Transfer>(&format!(
        "INSERT INTO transfers (from_account_id, to_account_id, amount)
         VALUES ($1, $2, $3) RETURNING {TRANSFER_COLUMNS}"
    ))
    .bind(from_account_id)
    .bind(to_account_id)
    .bind(amount)
    .fetch_one(db)
    .await?;

    Ok(transfer)
}

pub async fn get_transfer<'e, E>(db: E, id: i64) -> Result<Transfer, LedgerError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Transfer>(&format!(
        "SELECT {TRANSFER_COLUMNS} FROM transfers WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await?
    .ok_or(LedgerError::TransferNotFound(id))
}

/// List transfers touching either side of an account pair
pub async fn list_transfers<'e, E>(
    db: E,
    from_account_id: i64,
    to_account_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<Transfer>, LedgerError>
where
    E: PgExecutor<'e>,
{
    let transfers = sqlx::query_as::<_, Transfer>(&format!(
        "SELECT {TRANSFER_COLUMNS} FROM transfers
         WHERE from_account_id = $1 OR to_account_id = $2
         ORDER BY id LIMIT $3 OFFSET $4"
    ))
    .bind(from_account_id)
    .bind(to_account_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(transfers)
}
