//! HTTP API module: router, handlers, and query-parameter decoding.

pub mod handlers;
pub mod params;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
