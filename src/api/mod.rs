//! HTTP API module for the salary input service.
//!
//! This module provides the REST endpoints that expose the validation
//! engine: `GET /`, `GET /health` and `POST /validate`.

mod handlers;
mod response;
mod state;

pub use handlers::{HealthResponse, create_router};
pub use response::{ApiError, CORRELATION_ID_HEADER};
pub use state::AppState;
