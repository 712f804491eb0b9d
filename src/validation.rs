//! Input validation for scheduling runs.
//!
//! Checks a run's inputs before the head moves. Detects:
//! - Start head outside the cylinder range
//! - Requests outside the cylinder range
//! - Queues whose worst-case total movement does not fit in an `i64`
//!
//! Geometry itself is validated by [`DiskGeometry::new`], and direction
//! tokens by `Direction::from_str`, so a constructed value is always valid.
//!
//! # Movement bound
//! Every step moves the head at most `max_cylinder` cylinders, and a run
//! records at most `requests + 2` steps (SCAN reverses at most once, C-SCAN
//! wraps at most once). Total movement is therefore bounded by
//! `(requests + 2) * max_cylinder`, which must not overflow.

use crate::error::ConfigurationError;
use crate::models::{Cylinder, DiskGeometry};

/// Validation result.
pub type ValidationResult = Result<(), ConfigurationError>;

/// Synthetic boundary/wrap steps a single run may add.
const MAX_SYNTHETIC_STEPS: i64 = 2;

/// Validates a run's head position and requests against the geometry.
///
/// Stops at the first problem: the start head is checked first, then the
/// requests in arrival order, then the movement bound.
pub fn validate_input(
    geometry: &DiskGeometry,
    start_head: Cylinder,
    requests: &[Cylinder],
) -> ValidationResult {
    let max = geometry.max_cylinder();

    if !geometry.contains(start_head) {
        return Err(ConfigurationError::StartHeadOutOfRange {
            head: start_head,
            max,
        });
    }

    if let Some((index, &value)) = requests
        .iter()
        .enumerate()
        .find(|(_, &value)| !geometry.contains(value))
    {
        return Err(ConfigurationError::RequestOutOfRange { index, value, max });
    }

    check_movement_bound(geometry, requests.len())
}

/// Returns every problem with the inputs, in the order [`validate_input`]
/// would report them.
pub fn collect_errors(
    geometry: &DiskGeometry,
    start_head: Cylinder,
    requests: &[Cylinder],
) -> Vec<ConfigurationError> {
    let max = geometry.max_cylinder();
    let mut errors = Vec::new();

    if !geometry.contains(start_head) {
        errors.push(ConfigurationError::StartHeadOutOfRange {
            head: start_head,
            max,
        });
    }

    for (index, &value) in requests.iter().enumerate() {
        if !geometry.contains(value) {
            errors.push(ConfigurationError::RequestOutOfRange { index, value, max });
        }
    }

    if let Err(err) = check_movement_bound(geometry, requests.len()) {
        errors.push(err);
    }

    errors
}

/// Fails if `(requests + 2) * max_cylinder` overflows an `i64`.
fn check_movement_bound(geometry: &DiskGeometry, requests: usize) -> ValidationResult {
    let worst_case = i64::try_from(requests)
        .ok()
        .and_then(|n| n.checked_add(MAX_SYNTHETIC_STEPS))
        .and_then(|steps| steps.checked_mul(geometry.max_cylinder()));

    match worst_case {
        Some(_) => Ok(()),
        None => Err(ConfigurationError::MovementOverflow {
            total_cylinders: geometry.total_cylinders(),
            requests,
        }),
    }
}
