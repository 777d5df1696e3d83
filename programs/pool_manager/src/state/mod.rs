pub mod distribution_record;
pub mod donation_record;
pub mod donor_state;
pub mod pool_state;

pub use distribution_record::*;
pub use donation_record::*;
pub use donor_state::*;
pub use pool_state::*;
