/// Bloglist HTTP Server
///
/// This crate exposes the blog store and its list statistics over a JSON
/// HTTP API.

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::router;
pub use state::AppState;
