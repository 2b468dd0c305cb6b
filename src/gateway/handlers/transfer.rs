//! Transfer handler

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, TransferRequest, ok};
use crate::ledger::{TransferParams, TransferResult, TransferService};

/// Execute a money transfer between two accounts
///
/// POST /api/v1/transfers
///
/// Validates the request (positive amount, distinct existing accounts,
/// matching currencies) and then runs the atomic transfer workflow. The
/// response carries the transfer row, both entries and both post-transfer
/// account snapshots.
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Committed transfer", body = TransferResult, content_type = "application/json"),
        (status = 400, description = "Invalid amount, same account, or currency mismatch"),
        (status = 404, description = "Account not found"),
        (status = 408, description = "Transaction deadline exceeded")
    ),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransferRequest>,
) -> ApiResult<TransferResult> {
    req.validate()?;

    // The engine assumes both accounts exist and match; enforce that here.
    let from = state.store.get_account(req.from_account_id).await?;
    let to = state.store.get_account(req.to_account_id).await?;
    if from.currency != to.currency {
        return ApiError::currency_mismatch(format!(
            "account {} holds {}, account {} holds {}",
            from.id, from.currency, to.id, to.currency
        ))
        .into_err();
    }

    let result = TransferService::execute(
        &state.store,
        TransferParams {
            from_account_id: req.from_account_id,
            to_account_id: req.to_account_id,
            amount: req.amount,
        },
    )
    .await?;

    ok(result)
}
