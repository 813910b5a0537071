pub mod args;
pub mod error;
pub mod fixtures;
pub mod lineup;
pub mod model;
pub mod routes;
pub mod timeline;
pub mod controller {
    pub mod fixtures;
    pub mod match_detail;
    pub mod proxy;
    pub mod upstream;
}
pub mod view {
    pub mod index;
}

pub use error::AppError;
