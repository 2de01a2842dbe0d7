pub mod client_info;
pub mod handlers;
pub mod server;

pub use server::{ApiState, build_router, start};
