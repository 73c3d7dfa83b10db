//! HTTP API module for the Net Pay Engine.
//!
//! This module provides the REST endpoints a calculator front end talks to:
//! numeric and free-text calculation requests, and the form's reference
//! inputs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, FormInput};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
