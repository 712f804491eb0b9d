//! SCAN (elevator).
//!
//! # Algorithm
//!
//! 1. Moving toward high cylinders, service the smallest remaining request
//!    `>= head`; moving toward low, the largest remaining request `<= head`.
//! 2. When nothing is left ahead, sweep to the boundary in the current
//!    direction (a recorded [`VisitKind::Boundary`] step) and reverse.
//! 3. Repeat until the working set is empty.
//!
//! After a reversal every remaining request lies ahead of the head, so each
//! reversal is followed by at least one serviced request.

use super::{DiskScheduler, SchedulingProblem};
use crate::models::{Direction, HeadTrace, ScheduleResult, VisitKind};

/// Sweeps back and forth across the disk, reversing at the ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan {
    /// Initial sweep direction.
    pub direction: Direction,
}

impl Scan {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl DiskScheduler for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, problem: &SchedulingProblem) -> ScheduleResult {
        let max = problem.geometry().max_cylinder();
        let mut trace = HeadTrace::new(problem.start_head());
        let mut remaining = problem.requests().working_set();
        let mut direction = self.direction;

        while !remaining.is_empty() {
            let next = match direction {
                Direction::TowardHigh => remaining.lowest_at_or_above(trace.head()),
                Direction::TowardLow => remaining.highest_at_or_below(trace.head()),
            };

            match next {
                Some(idx) => {
                    let request = remaining.take(idx);
                    trace.visit(request, VisitKind::Request);
                }
                None => {
                    let boundary = match direction {
                        Direction::TowardHigh => max,
                        Direction::TowardLow => 0,
                    };
                    trace.visit(boundary, VisitKind::Boundary);
                    direction = direction.reversed();
                }
            }
        }

        trace.finish(self.name(), Some(self.direction), problem.request_count())
    }

    fn description(&self) -> &'static str {
        "Elevator sweep with reversal at the disk ends"
    }
}
