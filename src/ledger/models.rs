//! Persisted ledger rows

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Bank account holding a materialized balance
///
/// `balance` is a signed integer in the smallest currency unit. It is only
/// ever mutated by delta application inside a transfer transaction, and must
/// always equal the sum of the account's entry amounts after every commit.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Immutable ledger line tied to one account
///
/// Negative amount = debit, positive = credit. Entries are append-only and
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Entry {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Record of one directed money movement between two accounts
///
/// `amount` is the positive magnitude moved. Every transfer has exactly two
/// entries: `-amount` on `from_account_id` and `+amount` on `to_account_id`.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Transfer {
    pub id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Currency codes accepted at the API boundary
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "CAD"];

/// Check whether a currency code is one we keep accounts in
pub fn is_supported_currency(code: &str) -> bool {
    SUPPORTED_CURRENCIES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_currency() {
        assert!(is_supported_currency("USD"));
        assert!(is_supported_currency("EUR"));
        assert!(is_supported_currency("CAD"));
        assert!(!is_supported_currency("usd"));
        assert!(!is_supported_currency("BTC"));
        assert!(!is_supported_currency(""));
    }
}
