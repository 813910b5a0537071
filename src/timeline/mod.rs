pub mod sort_key;
pub mod sort_utils;

pub use sort_key::*;
pub use sort_utils::*;
