//! HTTP API module for the Split Allocation Engine.
//!
//! This module provides the REST API endpoints for computing expense splits
//! and presence-day summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PresenceRequest, SplitRequest, SplitSpecRequest};
pub use response::ApiError;
pub use state::AppState;
