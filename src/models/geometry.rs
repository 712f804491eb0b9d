//! Disk geometry model.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A cylinder index. Valid values lie in `0..total_cylinders`.
pub type Cylinder = i64;

/// Cylinder range of a disk.
///
/// Immutable once constructed. Valid cylinder indices are
/// `0 ..= total_cylinders - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DiskGeometry {
    total_cylinders: i64,
}

impl DiskGeometry {
    /// Creates a geometry, rejecting non-positive cylinder counts.
    pub fn new(total_cylinders: i64) -> Result<Self, ConfigurationError> {
        if total_cylinders <= 0 {
            return Err(ConfigurationError::InvalidGeometry { total_cylinders });
        }
        Ok(Self { total_cylinders })
    }

    /// Number of cylinders.
    #[inline]
    pub fn total_cylinders(&self) -> i64 {
        self.total_cylinders
    }

    /// Highest addressable cylinder (`total_cylinders - 1`).
    #[inline]
    pub fn max_cylinder(&self) -> Cylinder {
        self.total_cylinders - 1
    }

    /// Whether `cylinder` is addressable on this disk.
    #[inline]
    pub fn contains(&self, cylinder: Cylinder) -> bool {
        (0..self.total_cylinders).contains(&cylinder)
    }

    /// Cost of the C-SCAN return jump between the two ends.
    #[inline]
    pub fn wrap_cost(&self) -> i64 {
        self.max_cylinder()
    }
}

impl TryFrom<i64> for DiskGeometry {
    type Error = ConfigurationError;

    fn try_from(total_cylinders: i64) -> Result<Self, Self::Error> {
        Self::new(total_cylinders)
    }
}

impl From<DiskGeometry> for i64 {
    fn from(geometry: DiskGeometry) -> Self {
        geometry.total_cylinders
    }
}
