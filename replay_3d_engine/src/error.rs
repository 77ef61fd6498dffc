//! Error types for the Replay3D engine
//!
//! This module defines the error types used throughout the engine,
//! including frame sources, filtering, and viewer backends.

use std::fmt;

/// Result type for Replay3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Replay3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (viewer window, render context, etc.)
    BackendError(String),

    /// Requested frame index is outside the source's range
    SourceExhausted { frame_id: usize, frame_count: usize },

    /// Per-point data arrays no longer line up with the point array
    InvariantViolation(String),

    /// Initialization failed (viewer creation, unknown plugin, etc.)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::SourceExhausted {
                frame_id,
                frame_count,
            } => write!(
                f,
                "Source exhausted: frame {} out of range (source has {} frames)",
                frame_id, frame_count
            ),
            Error::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
