pub mod gho_token;
pub use gho_token::*;

pub mod token_pool;
pub use token_pool::*;
