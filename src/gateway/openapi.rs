//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CreateAccountRequest, TransferRequest, UpdateAccountRequest};
use crate::ledger::{Account, Entry, Transfer, TransferResult};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ledgerbank API",
        version = "1.0.0",
        description = "Double-entry money transfer service: accounts, append-only entries, atomic transfers.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::account::list_accounts,
        crate::gateway::handlers::account::update_account,
        crate::gateway::handlers::account::delete_account,
        crate::gateway::handlers::transfer::create_transfer,
    ),
    components(schemas(
        Account,
        Entry,
        Transfer,
        TransferResult,
        CreateAccountRequest,
        UpdateAccountRequest,
        TransferRequest,
        HealthResponse,
    )),
    tags(
        (name = "Account", description = "Account CRUD"),
        (name = "Transfer", description = "Money transfers"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;
