pub mod layout;
pub mod position;
pub mod templates;

pub use layout::*;
pub use position::*;
pub use templates::*;
