//! ledgerbank - double-entry money transfers on PostgreSQL
//!
//! # Modules
//!
//! - [`ledger`] - the transactional core: store, executor, transfer workflow
//! - [`gateway`] - axum HTTP surface (account CRUD, transfers, health)
//! - [`db`] - connection pool management
//! - [`config`] - YAML application config
//! - [`logging`] - tracing setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod ledger;
pub mod logging;

// Convenient re-exports at crate root
pub use db::Database;
pub use ledger::{
    Account, Entry, LedgerError, LedgerStore, Transfer, TransferParams, TransferResult,
    TransferService, UnitOfWork,
};
