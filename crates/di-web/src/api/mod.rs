//! HTTP surface: router, handlers and the JSON envelope.

pub mod devices;
pub mod dto;
pub mod envelope;
pub mod error;
mod router;

pub use error::ApiError;
pub use router::build_router;
