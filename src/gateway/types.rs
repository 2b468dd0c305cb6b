//! API request/response types
//!
//! - [`ApiResponse<T>`]: unified response wrapper
//! - [`ApiError`]: error half of every handler result
//! - Request DTOs with their binding rules

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ledger::{LedgerError, is_supported_currency};

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const CURRENCY_MISMATCH: i32 = 1002;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4001;
    pub const ENTRY_NOT_FOUND: i32 = 4002;
    pub const TRANSFER_NOT_FOUND: i32 = 4003;
    pub const TX_CANCELLED: i32 = 4080;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

/// Error half of every handler result
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: error_codes::INVALID_PARAMETER,
            msg: msg.into(),
        }
    }

    pub fn currency_mismatch(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: error_codes::CURRENCY_MISMATCH,
            msg: msg.into(),
        }
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            code: error_codes::SERVICE_UNAVAILABLE,
            msg: msg.into(),
        }
    }

    /// Convenience for handlers returning early
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = match &err {
            LedgerError::AccountNotFound(_) => error_codes::ACCOUNT_NOT_FOUND,
            LedgerError::EntryNotFound(_) => error_codes::ENTRY_NOT_FOUND,
            LedgerError::TransferNotFound(_) => error_codes::TRANSFER_NOT_FOUND,
            LedgerError::Cancelled => error_codes::TX_CANCELLED,
            LedgerError::Database(_) | LedgerError::RollbackFailed { .. } => {
                error_codes::INTERNAL_ERROR
            }
        };
        Self {
            status,
            code,
            msg: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            code: self.code,
            msg: self.msg,
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Create success response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

// ============================================================================
// Request DTOs
// ============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub owner: String,
    /// Currency code, one of USD / EUR / CAD
    pub currency: String,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.owner.trim().is_empty() {
            return Err(ApiError::bad_request("owner must not be empty"));
        }
        if !is_supported_currency(&self.currency) {
            return Err(ApiError::bad_request(format!(
                "unsupported currency: {}",
                self.currency
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    pub balance: i64,
}

/// Pagination binding: page_id >= 1, 5 <= page_size <= 10
#[derive(Debug, Deserialize)]
pub struct ListAccountsQuery {
    pub page_id: i64,
    pub page_size: i64,
}

impl ListAccountsQuery {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.page_id < 1 {
            return Err(ApiError::bad_request("page_id must be >= 1"));
        }
        if !(5..=10).contains(&self.page_size) {
            return Err(ApiError::bad_request("page_size must be between 5 and 10"));
        }
        Ok(())
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page_id - 1) * self.page_size
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferRequest {
    pub from_account_id: i64,
    pub to_account_id: i64,
    /// Amount in the smallest currency unit, must be positive
    pub amount: i64,
}

impl TransferRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.amount <= 0 {
            return Err(ApiError::bad_request("amount must be positive"));
        }
        if self.from_account_id == self.to_account_id {
            return Err(ApiError::bad_request(
                "from_account_id and to_account_id must differ",
            ));
        }
        Ok(())
    }
}
