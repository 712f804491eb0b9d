//! Shortest-Seek-Time-First.

use super::{DiskScheduler, SchedulingProblem};
use crate::models::{HeadTrace, ScheduleResult, VisitKind};

/// Always services the remaining request closest to the head.
///
/// Equidistant candidates resolve to the one earlier in the remaining queue,
/// which keeps the original relative order.
///
/// Greedy seek minimisation can starve far requests: in a batch, they show
/// up at the tail of the sequence while near-head requests are drained.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl DiskScheduler for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, problem: &SchedulingProblem) -> ScheduleResult {
        let mut trace = HeadTrace::new(problem.start_head());
        let mut remaining = problem.requests().working_set();

        while let Some(idx) = remaining.nearest(trace.head()) {
            let request = remaining.take(idx);
            trace.visit(request, VisitKind::Request);
        }

        trace.finish(self.name(), None, problem.request_count())
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}
