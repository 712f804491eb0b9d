//! Circular SCAN.
//!
//! Like SCAN, but the head services requests in one direction only. When
//! nothing is left ahead it sweeps to the end of the disk, then jumps to the
//! opposite end and keeps going the same way. Both moves are recorded: the
//! sweep as [`VisitKind::Boundary`], the jump as [`VisitKind::Wrap`] costing
//! `total_cylinders - 1`. That fixed jump cost is what separates C-SCAN's
//! overhead from SCAN's.

use super::{DiskScheduler, SchedulingProblem};
use crate::models::{Direction, HeadTrace, ScheduleResult, VisitKind};

/// One-directional sweep with a wrap-around jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct CScan {
    /// Sweep direction (never reversed).
    pub direction: Direction,
}

impl CScan {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl DiskScheduler for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&self, problem: &SchedulingProblem) -> ScheduleResult {
        let max = problem.geometry().max_cylinder();
        let (edge, restart) = match self.direction {
            Direction::TowardHigh => (max, 0),
            Direction::TowardLow => (0, max),
        };

        let mut trace = HeadTrace::new(problem.start_head());
        let mut remaining = problem.requests().working_set();

        while !remaining.is_empty() {
            let next = match self.direction {
                Direction::TowardHigh => remaining.lowest_at_or_above(trace.head()),
                Direction::TowardLow => remaining.highest_at_or_below(trace.head()),
            };

            if let Some(idx) = next {
                let request = remaining.take(idx);
                trace.visit(request, VisitKind::Request);
            } else {
                trace.visit(edge, VisitKind::Boundary);
                trace.visit(restart, VisitKind::Wrap);
            }
        }

        trace.finish(self.name(), Some(self.direction), problem.request_count())
    }

    fn description(&self) -> &'static str {
        "Circular sweep with a return jump to the opposite end"
    }
}
