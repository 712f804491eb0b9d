//! Error types for the scheduling engine.
//!
//! The engine raises a single error kind: a configuration error describing
//! the offending input. It is always detected before the first head movement.

use thiserror::Error;

use crate::models::Cylinder;

/// Invalid geometry, head position, request value, or policy token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The disk must have at least one cylinder.
    #[error("invalid geometry: total cylinders must be positive, got {total_cylinders}")]
    InvalidGeometry { total_cylinders: i64 },

    /// Start head outside `[0, max]`.
    #[error("start head {head} is outside the cylinder range [0, {max}]")]
    StartHeadOutOfRange { head: Cylinder, max: Cylinder },

    /// A queued request outside `[0, max]`.
    #[error("request #{index} ({value}) is outside the cylinder range [0, {max}]")]
    RequestOutOfRange {
        index: usize,
        value: Cylinder,
        max: Cylinder,
    },

    /// Worst-case total movement does not fit in an `i64`.
    #[error(
        "geometry too large: {requests} requests on {total_cylinders} cylinders may overflow the movement total"
    )]
    MovementOverflow {
        total_cylinders: i64,
        requests: usize,
    },

    /// Direction token not recognised.
    #[error("unknown direction '{0}' (expected toward-high or toward-low)")]
    UnknownDirection(String),

    /// Algorithm token not recognised.
    #[error("unknown algorithm '{0}' (expected fcfs, sstf, scan or c-scan)")]
    UnknownAlgorithm(String),
}
