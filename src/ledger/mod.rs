//! Double-entry ledger core
//!
//! - [`models`] - persisted Account / Entry / Transfer rows
//! - [`queries`] - point CRUD, executor-generic
//! - [`store`] - pool-owning store facade
//! - [`executor`] - atomic transaction execution ([`UnitOfWork`])
//! - [`transfer`] - the transfer workflow and its lock-ordering rule
//! - [`error`] - [`LedgerError`]

pub mod error;
pub mod executor;
pub mod models;
pub mod queries;
pub mod store;
pub mod transfer;

pub use error::LedgerError;
pub use executor::UnitOfWork;
pub use models::{Account, Entry, SUPPORTED_CURRENCIES, Transfer, is_supported_currency};
pub use store::LedgerStore;
pub use transfer::{TransferParams, TransferResult, TransferService};
