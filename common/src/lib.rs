pub mod error;
pub mod search;
pub mod utils;
