//! HTTP API layer

mod extract;
mod handlers;
mod routes;

pub use handlers::{ErrorResponse, HealthResponse, InsertPersonRequest, MessageResponse};
pub use routes::create_router;
