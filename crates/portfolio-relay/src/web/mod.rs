// HTTP surface of the relay
pub mod error;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use routes::{create_router, AppState};
pub use server::{build_app, RelayServer};
