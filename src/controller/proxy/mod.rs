pub mod http_handlers;
pub mod responses;
pub mod validation;

pub use http_handlers::*;
pub use responses::*;
pub use validation::*;
