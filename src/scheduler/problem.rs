//! Validated input for a scheduling run.

use serde::Serialize;

use crate::error::ConfigurationError;
use crate::models::{Cylinder, DiskGeometry, RequestQueue};
use crate::validation::validate_input;

/// Geometry, start head and requests of one simulation.
///
/// Construction validates every value, so a `SchedulingProblem` can be
/// scheduled by any policy without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingProblem {
    geometry: DiskGeometry,
    start_head: Cylinder,
    requests: RequestQueue,
}

impl SchedulingProblem {
    /// Creates a problem, failing on any out-of-range head or request.
    pub fn new(
        geometry: DiskGeometry,
        start_head: Cylinder,
        requests: impl Into<Vec<Cylinder>>,
    ) -> Result<Self, ConfigurationError> {
        let requests = RequestQueue::new(requests);
        validate_input(&geometry, start_head, requests.as_slice())?;
        Ok(Self {
            geometry,
            start_head,
            requests,
        })
    }

    /// Shorthand that also validates the cylinder count.
    pub fn with_cylinders(
        total_cylinders: i64,
        start_head: Cylinder,
        requests: impl Into<Vec<Cylinder>>,
    ) -> Result<Self, ConfigurationError> {
        Self::new(DiskGeometry::new(total_cylinders)?, start_head, requests)
    }

    #[inline]
    pub fn geometry(&self) -> &DiskGeometry {
        &self.geometry
    }

    #[inline]
    pub fn start_head(&self) -> Cylinder {
        self.start_head
    }

    /// Requests in arrival order.
    #[inline]
    pub fn requests(&self) -> &RequestQueue {
        &self.requests
    }

    /// Number of original requests (the `average_seek` divisor).
    #[inline]
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }
}
