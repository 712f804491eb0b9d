//! Comparison metrics across policies.
//!
//! Computes how several runs over the same problem compare. These are
//! reporting metrics layered on top of [`ScheduleResult`]; none of them
//! feed back into scheduling.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Efficiency | `min total movement / total movement * 100` |
//! | Best | Run with the least total movement (first listed on ties) |
//! | Service delay | `service position - arrival position` per request |
//! | Max service delay | Largest delay of any request (starvation indicator) |

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::models::{Cylinder, ScheduleResult};

/// Metrics of one run relative to the others.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmKpi {
    pub algorithm: String,
    pub total_movement: i64,
    pub average_seek: f64,
    pub final_head_position: Cylinder,
    /// Percentage of the best run's movement (100 = best).
    pub efficiency_pct: f64,
    /// Worst slot slip of any request versus arrival order.
    pub max_service_delay: i64,
}

/// Side-by-side KPIs for a set of runs.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonKpi {
    /// One entry per run, in input order.
    pub rows: Vec<AlgorithmKpi>,
    /// Least total movement over all runs (0 for no runs).
    pub min_movement: i64,
}

impl ComparisonKpi {
    /// Computes KPIs from runs over the same request queue.
    ///
    /// # Arguments
    /// * `results` - Runs to compare.
    /// * `arrivals` - The original request queue, for service delays.
    pub fn calculate(results: &[ScheduleResult], arrivals: &[Cylinder]) -> Self {
        let min_movement = results
            .iter()
            .map(|r| r.total_movement)
            .min()
            .unwrap_or(0);

        let rows = results
            .iter()
            .map(|r| {
                let efficiency_pct = if r.total_movement == 0 {
                    100.0
                } else {
                    min_movement as f64 / r.total_movement as f64 * 100.0
                };
                AlgorithmKpi {
                    algorithm: r.algorithm.clone(),
                    total_movement: r.total_movement,
                    average_seek: r.average_seek,
                    final_head_position: r.final_head_position,
                    efficiency_pct,
                    max_service_delay: service_delays(r, arrivals)
                        .into_iter()
                        .max()
                        .unwrap_or(0),
                }
            })
            .collect();

        Self { rows, min_movement }
    }

    /// The run with the least total movement.
    pub fn best(&self) -> Option<&AlgorithmKpi> {
        self.rows
            .iter()
            .reduce(|best, row| {
                if row.total_movement < best.total_movement {
                    row
                } else {
                    best
                }
            })
    }

    /// KPIs of a run by algorithm name.
    pub fn get(&self, algorithm: &str) -> Option<&AlgorithmKpi> {
        self.rows.iter().find(|r| r.algorithm == algorithm)
    }
}

/// How many slots later than its arrival slot each request was serviced.
///
/// Entry `i` belongs to `arrivals[i]`. Duplicates are matched in order: the
/// k-th arrival of a cylinder pairs with its k-th service. Negative values
/// mean the request was pulled forward. Requests missing from the result
/// are skipped.
pub fn service_delays(result: &ScheduleResult, arrivals: &[Cylinder]) -> Vec<i64> {
    let mut served_at: HashMap<Cylinder, VecDeque<usize>> = HashMap::new();
    for (pos, cyl) in result.serviced_requests().into_iter().enumerate() {
        served_at.entry(cyl).or_default().push_back(pos);
    }

    arrivals
        .iter()
        .enumerate()
        .filter_map(|(arrival, cyl)| {
            served_at
                .get_mut(cyl)
                .and_then(|slots| slots.pop_front())
                .map(|served| served as i64 - arrival as i64)
        })
        .collect()
}
