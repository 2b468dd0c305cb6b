pub mod account;
pub mod health;
pub mod transfer;

pub use account::{create_account, delete_account, get_account, list_accounts, update_account};
pub use health::{HealthResponse, health_check};
pub use transfer::create_transfer;
