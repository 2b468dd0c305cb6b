//! Account handlers (CRUD)

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};

use super::super::state::AppState;
use super::super::types::{
    ApiResult, CreateAccountRequest, ListAccountsQuery, UpdateAccountRequest, ok,
};
use crate::ledger::Account;

/// Create an account
///
/// POST /api/v1/accounts
///
/// New accounts start with a zero balance; only transfers move money after
/// that (the PUT endpoint below is an administrative override).
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account created", body = Account, content_type = "application/json"),
        (status = 400, description = "Empty owner or unsupported currency")
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<Account> {
    req.validate()?;
    let account = state.store.create_account(&req.owner, &req.currency).await?;
    ok(account)
}

/// Get one account by id
///
/// GET /api/v1/accounts/{id}
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account details", body = Account, content_type = "application/json"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Account> {
    let account = state.store.get_account(id).await?;
    ok(account)
}

/// List accounts, paginated
///
/// GET /api/v1/accounts?page_id=1&page_size=5
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    params(
        ("page_id" = i64, Query, description = "Page number, starting at 1"),
        ("page_size" = i64, Query, description = "Rows per page, 5..=10")
    ),
    responses(
        (status = 200, description = "Page of accounts", content_type = "application/json"),
        (status = 400, description = "Invalid pagination")
    ),
    tag = "Account"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListAccountsQuery>,
) -> ApiResult<Vec<Account>> {
    query.validate()?;
    let accounts = state
        .store
        .list_accounts(query.limit(), query.offset())
        .await?;
    ok(accounts)
}

/// Set an account balance outright
///
/// PUT /api/v1/accounts/{id}
#[utoipa::path(
    put,
    path = "/api/v1/accounts/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Updated account", body = Account, content_type = "application/json"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAccountRequest>,
) -> ApiResult<Account> {
    let account = state.store.update_account_balance(id, req.balance).await?;
    ok(account)
}

/// Delete an account
///
/// DELETE /api/v1/accounts/{id}
///
/// Fails with a foreign-key violation while entries or transfers still
/// reference the account; referential integrity is the store's concern.
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    state.store.delete_account(id).await?;
    ok(())
}
