pub mod config;
pub mod error;
pub mod visit;

pub use config::CollecteConfig;
pub use error::CollecteError;
pub use visit::{VisitPayload, VisitRecord};
