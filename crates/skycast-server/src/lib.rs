//! HTTP layer for Skycast.
//!
//! Routes browser requests to the identity and weather upstreams and maps
//! their results onto the service's JSON contract. Each route makes
//! exactly one upstream call; there is no state beyond the shared
//! clients.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, run};
pub use state::AppState;
