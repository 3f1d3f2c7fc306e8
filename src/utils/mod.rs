//! Utility modules shared by the polyhedral core:
//! - Error types
//! - Row primitives over arbitrary-precision integers

pub mod errors;
pub mod seq;

// Re-exports
pub use errors::*;
pub use seq::Int;
