//! First-Come-First-Served.

use super::{DiskScheduler, SchedulingProblem};
use crate::models::{HeadTrace, ScheduleResult, VisitKind};

/// Services requests strictly in arrival order.
///
/// Fair and deterministic, but ignores head position entirely, so the
/// total movement depends only on how the arrivals happen to interleave.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl DiskScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, problem: &SchedulingProblem) -> ScheduleResult {
        let mut trace = HeadTrace::new(problem.start_head());
        for &request in problem.requests().as_slice() {
            trace.visit(request, VisitKind::Request);
        }
        trace.finish(self.name(), None, problem.request_count())
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_classic() {
        let p = SchedulingProblem::with_cylinders(200, 50, vec![82, 170, 43, 140, 24, 16, 190])
            .unwrap();
        let r = Fcfs.schedule(&p);
        assert_eq!(r.sequence, vec![82, 170, 43, 140, 24, 16, 190]);
        assert_eq!(r.movements, vec![32, 88, 127, 97, 116, 8, 174]);
        assert_eq!(r.total_movement, 642);
        assert!((r.average_seek - 642.0 / 7.0).abs() < 1e-10);
        assert_eq!(r.final_head_position, 190);
        assert_eq!(r.algorithm, "FCFS");
        assert_eq!(r.direction, None);
    }

    #[test]
    fn test_fcfs_duplicates_and_zero_moves() {
        let p = SchedulingProblem::with_cylinders(10, 3, vec![3, 3, 9]).unwrap();
        let r = Fcfs.schedule(&p);
        assert_eq!(r.movements, vec![0, 0, 6]);
        assert_eq!(r.total_movement, 6);
        assert!((r.average_seek - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_empty() {
        let p = SchedulingProblem::with_cylinders(10, 4, vec![]).unwrap();
        let r = Fcfs.schedule(&p);
        assert!(r.sequence.is_empty());
        assert_eq!(r.total_movement, 0);
        assert_eq!(r.average_seek, 0.0);
        assert_eq!(r.final_head_position, 4);
    }
}
