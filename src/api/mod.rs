//! HTTP API module for the Shift Pay Engine.
//!
//! This module provides the REST API endpoints for classifying a shift's
//! minutes and calculating its surcharged pay.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalendarResponse};
pub use state::AppState;
