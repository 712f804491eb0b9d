//! Request workloads.
//!
//! Provides the textbook presets and a seeded random generator for request
//! queues. Every generated value lies inside the disk, so a workload always
//! converts into a valid [`SchedulingProblem`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::models::{Cylinder, DiskGeometry};
use crate::scheduler::SchedulingProblem;

/// A named request queue with its disk and start head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub name: String,
    pub total_cylinders: i64,
    pub start_head: Cylinder,
    pub requests: Vec<Cylinder>,
}

impl Workload {
    /// The textbook example: 200 cylinders, head at 50.
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            total_cylinders: 200,
            start_head: 50,
            requests: vec![82, 170, 43, 140, 24, 16, 190],
        }
    }

    /// A cluster around the head plus two far requests.
    ///
    /// SSTF drains the cluster before it reaches 195 or 5.
    pub fn starvation() -> Self {
        Self {
            name: "starvation".to_string(),
            total_cylinders: 200,
            start_head: 50,
            requests: vec![51, 49, 52, 48, 50, 195, 5],
        }
    }

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "starvation" => Some(Self::starvation()),
            _ => None,
        }
    }

    /// Validates the workload into a schedulable problem.
    pub fn to_problem(&self) -> Result<SchedulingProblem, ConfigurationError> {
        SchedulingProblem::with_cylinders(
            self.total_cylinders,
            self.start_head,
            self.requests.clone(),
        )
    }
}

/// Shape of generated request positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestPattern {
    /// Uniform over the whole disk.
    Uniform,
    /// A `hot_fraction` share of requests within `spread` cylinders of the
    /// start head, the rest uniform.
    Hotspot { spread: i64, hot_fraction: f64 },
}

/// Seeded generator of random workloads.
#[derive(Debug)]
pub struct RequestGenerator {
    geometry: DiskGeometry,
    pattern: RequestPattern,
    rng: StdRng,
}

impl RequestGenerator {
    pub fn new(geometry: DiskGeometry, pattern: RequestPattern, seed: u64) -> Self {
        Self {
            geometry,
            pattern,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniformly random start head.
    pub fn start_head(&mut self) -> Cylinder {
        self.rng.random_range(0..=self.geometry.max_cylinder())
    }

    /// Generates `count` requests for a head at `start_head`.
    pub fn requests(&mut self, start_head: Cylinder, count: usize) -> Vec<Cylinder> {
        let max = self.geometry.max_cylinder();
        let center = start_head.clamp(0, max);
        (0..count)
            .map(|_| match self.pattern {
                RequestPattern::Uniform => self.rng.random_range(0..=max),
                RequestPattern::Hotspot {
                    spread,
                    hot_fraction,
                } => {
                    if self.rng.random_bool(hot_fraction.clamp(0.0, 1.0)) {
                        let lo = (center - spread.abs()).max(0);
                        let hi = (center + spread.abs()).min(max);
                        self.rng.random_range(lo..=hi)
                    } else {
                        self.rng.random_range(0..=max)
                    }
                }
            })
            .collect()
    }

    /// Generates a full workload with a random start head.
    pub fn workload(&mut self, count: usize) -> Workload {
        let start_head = self.start_head();
        let requests = self.requests(start_head, count);
        Workload {
            name: "random".to_string(),
            total_cylinders: self.geometry.total_cylinders(),
            start_head,
            requests,
        }
    }
}
