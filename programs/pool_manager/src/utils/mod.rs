pub mod batch;
pub mod token;

pub use batch::*;
pub use token::*;
