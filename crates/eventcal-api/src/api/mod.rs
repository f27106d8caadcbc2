// HTTP API routes
//
// Each submodule handles a specific resource type with its own AppState.

pub mod common;
pub mod error;
pub mod events;
pub mod lenient;

// Re-export common types
pub use common::{ErrorResponse, MessageResponse};
pub use error::ApiError;
