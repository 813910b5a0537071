pub mod event;
pub mod roster;
pub mod types;
pub mod utils;

pub use event::*;
pub use roster::*;
pub use types::*;
pub use utils::*;
