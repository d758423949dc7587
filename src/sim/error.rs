//! Error types for the simulation core
//!
//! The only hard failure is the allocator refusing to grow the particle
//! pool. Bad tuning values (negative spawn counts, negative diameters) are
//! clamped at the boundary instead of failing, because tuning is driven by
//! live user input and must never take the simulation down.

use std::collections::TryReserveError;
use std::fmt;

/// Errors the simulation surfaces to its caller.
#[derive(Debug)]
pub enum SimError {
    /// Allocation failed while creating a particle or growing the pool.
    /// The pool keeps its prior valid state; the frame's remaining spawns
    /// are abandoned.
    OutOfMemory,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::OutOfMemory => write!(f, "particle pool allocation failed"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<TryReserveError> for SimError {
    fn from(_: TryReserveError) -> Self {
        SimError::OutOfMemory
    }
}
