pub mod initialize_pool;
pub mod donate;
pub mod sync_balance;
pub mod distribute_funds;
pub mod add_admin;
pub mod remove_admin;
pub mod transfer_ownership;
pub mod views;

pub use initialize_pool::*;
pub use donate::*;
pub use sync_balance::*;
pub use distribute_funds::*;
pub use add_admin::*;
pub use remove_admin::*;
pub use transfer_ownership::*;
pub use views::*;
