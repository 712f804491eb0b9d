//! Disk-head scheduling policies and comparison KPIs.
//!
//! Every policy is a pure function of a [`SchedulingProblem`]: it takes a
//! private working copy of the request queue and returns a
//! [`ScheduleResult`]. Policies hold no mutable state, so independent runs
//! can execute on separate threads without coordination.
//!
//! # Policies
//!
//! | Policy | Order | Synthetic visits |
//! |--------|-------|------------------|
//! | FCFS | Arrival order | None |
//! | SSTF | Nearest remaining request | None |
//! | SCAN | Sweep, reverse at the ends | Boundary per reversal |
//! | C-SCAN | Sweep one way, jump back | Boundary + wrap per cycle |
//!
//! # Usage
//!
//! ```
//! use u_disk_schedule::models::Direction;
//! use u_disk_schedule::scheduler::{Algorithm, SchedulingProblem, run_all};
//!
//! let problem =
//!     SchedulingProblem::with_cylinders(200, 50, vec![82, 170, 43, 140, 24, 16, 190]).unwrap();
//! let results = run_all(&problem, &Algorithm::ALL, Direction::TowardHigh);
//! assert_eq!(results[3].algorithm, "C-SCAN");
//! assert_eq!(results[3].final_head_position, 43);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 5.4

mod cscan;
mod fcfs;
mod kpi;
mod problem;
mod scan;
mod sstf;

pub use cscan::CScan;
pub use fcfs::Fcfs;
pub use kpi::{service_delays, AlgorithmKpi, ComparisonKpi};
pub use problem::SchedulingProblem;
pub use scan::Scan;
pub use sstf::Sstf;

use std::fmt::{self, Debug};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::models::{Cylinder, Direction, DiskGeometry, ScheduleResult};

/// A disk-head scheduling policy.
///
/// Implementations receive an already validated problem, so scheduling
/// itself cannot fail.
pub trait DiskScheduler: Send + Sync + Debug {
    /// Policy name (e.g., "SSTF").
    fn name(&self) -> &'static str;

    /// Computes the service order and movement of one run.
    fn schedule(&self, problem: &SchedulingProblem) -> ScheduleResult;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "fcfs")]
    Fcfs,
    #[serde(rename = "sstf")]
    Sstf,
    #[serde(rename = "scan")]
    Scan,
    #[serde(rename = "c-scan", alias = "cscan")]
    CScan,
}

impl Algorithm {
    /// All policies, in the conventional comparison order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
    ];

    /// Display name, as recorded in [`ScheduleResult::algorithm`].
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
        }
    }

    /// Whether the policy takes an initial direction.
    pub fn uses_direction(&self) -> bool {
        matches!(self, Algorithm::Scan | Algorithm::CScan)
    }

    /// Builds the policy. `direction` is ignored by FCFS and SSTF.
    pub fn scheduler(&self, direction: Direction) -> Box<dyn DiskScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sstf => Box::new(Sstf),
            Algorithm::Scan => Box::new(Scan::new(direction)),
            Algorithm::CScan => Box::new(CScan::new(direction)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sstf" => Ok(Algorithm::Sstf),
            "scan" | "elevator" => Ok(Algorithm::Scan),
            "c-scan" | "cscan" | "c_scan" => Ok(Algorithm::CScan),
            _ => Err(ConfigurationError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Validates the inputs and runs one policy.
///
/// Fails with a [`ConfigurationError`] before any step if the head or a
/// request lies outside the disk.
///
/// # Example
/// ```
/// use u_disk_schedule::models::{Direction, DiskGeometry};
/// use u_disk_schedule::scheduler::{schedule, Algorithm};
///
/// let disk = DiskGeometry::new(200).unwrap();
/// let r = schedule(Algorithm::Scan, &disk, 50, &[82, 170, 43], Direction::TowardHigh).unwrap();
/// assert_eq!(r.sequence, vec![82, 170, 199, 43]);
/// ```
pub fn schedule(
    algorithm: Algorithm,
    geometry: &DiskGeometry,
    start_head: Cylinder,
    requests: &[Cylinder],
    direction: Direction,
) -> Result<ScheduleResult, ConfigurationError> {
    let problem = SchedulingProblem::new(*geometry, start_head, requests)?;
    Ok(run(&problem, algorithm, direction))
}

/// Runs one policy on a validated problem.
pub fn run(problem: &SchedulingProblem, algorithm: Algorithm, direction: Direction) -> ScheduleResult {
    let scheduler = algorithm.scheduler(direction);
    debug!(
        "running {} from head {} over {} requests",
        scheduler.name(),
        problem.start_head(),
        problem.request_count()
    );
    let result = scheduler.schedule(problem);
    debug!(
        "{} finished: total movement {}, final head {}",
        result.algorithm, result.total_movement, result.final_head_position
    );
    result
}

/// Runs several policies on the same problem, in the given order.
pub fn run_all(
    problem: &SchedulingProblem,
    algorithms: &[Algorithm],
    direction: Direction,
) -> Vec<ScheduleResult> {
    algorithms
        .iter()
        .map(|&algorithm| run(problem, algorithm, direction))
        .collect()
}
