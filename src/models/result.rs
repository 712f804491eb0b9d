//! Result of one scheduling run.
//!
//! A result records every head visit in service order together with the
//! displacement it cost. Synthetic visits (SCAN boundary sweeps, C-SCAN
//! wrap jumps) are kept in the same sequence and tagged with [`VisitKind`],
//! so the movement total can always be reproduced by re-walking the
//! sequence from the start head.

use serde::{Deserialize, Serialize};

use super::{Cylinder, Direction};

/// Why the head visited a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitKind {
    /// A queued request was serviced.
    Request,
    /// The head swept to the end of the disk.
    Boundary,
    /// C-SCAN return jump to the opposite end.
    Wrap,
}

impl VisitKind {
    /// Whether the visit was added by the policy rather than requested.
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        !matches!(self, VisitKind::Request)
    }

    /// Short label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            VisitKind::Request => "request",
            VisitKind::Boundary => "boundary",
            VisitKind::Wrap => "wrap",
        }
    }
}

/// One head movement, reconstructed from a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStep {
    /// 1-based step number.
    pub number: usize,
    pub from: Cylinder,
    pub to: Cylinder,
    pub movement: i64,
    pub kind: VisitKind,
}

/// Output of one algorithm run.
///
/// `sequence`, `movements` and `visits` are parallel vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Algorithm name (e.g., "SSTF", "C-SCAN").
    pub algorithm: String,
    /// Initial sweep direction, for SCAN-family policies.
    pub direction: Option<Direction>,
    /// Head position before the first step.
    pub start_head: Cylinder,
    /// Visited cylinders in order, including synthetic visits.
    pub sequence: Vec<Cylinder>,
    /// Head displacement of each step (always >= 0).
    pub movements: Vec<i64>,
    /// Kind of each visit.
    pub visits: Vec<VisitKind>,
    /// Sum of `movements`.
    pub total_movement: i64,
    /// `total_movement / request_count`, or 0 for an empty queue.
    pub average_seek: f64,
    /// Head position after the last step.
    pub final_head_position: Cylinder,
    /// Number of original requests.
    pub request_count: usize,
}

impl ScheduleResult {
    /// Number of recorded steps (requests plus synthetic visits).
    #[inline]
    pub fn step_count(&self) -> usize {
        self.sequence.len()
    }

    /// Serviced requests in service order, without synthetic visits.
    pub fn serviced_requests(&self) -> Vec<Cylinder> {
        self.sequence
            .iter()
            .zip(&self.visits)
            .filter(|(_, kind)| !kind.is_synthetic())
            .map(|(&cyl, _)| cyl)
            .collect()
    }

    /// Number of synthetic boundary/wrap visits.
    pub fn synthetic_visit_count(&self) -> usize {
        self.visits.iter().filter(|k| k.is_synthetic()).count()
    }

    /// Steps with their origin cylinder filled in.
    pub fn steps(&self) -> Vec<ScheduleStep> {
        let mut from = self.start_head;
        self.sequence
            .iter()
            .zip(&self.movements)
            .zip(&self.visits)
            .enumerate()
            .map(|(i, ((&to, &movement), &kind))| {
                let step = ScheduleStep {
                    number: i + 1,
                    from,
                    to,
                    movement,
                    kind,
                };
                from = to;
                step
            })
            .collect()
    }

    /// Re-walks `sequence` from the start head and sums the seek distances.
    pub fn replayed_movement(&self) -> i64 {
        let mut head = self.start_head;
        let mut total = 0;
        for &cyl in &self.sequence {
            total += (cyl - head).abs();
            head = cyl;
        }
        total
    }
}

/// Records head visits while a policy runs.
#[derive(Debug, Clone)]
pub(crate) struct HeadTrace {
    start: Cylinder,
    head: Cylinder,
    sequence: Vec<Cylinder>,
    movements: Vec<i64>,
    visits: Vec<VisitKind>,
}

impl HeadTrace {
    pub(crate) fn new(start: Cylinder) -> Self {
        Self {
            start,
            head: start,
            sequence: Vec::new(),
            movements: Vec::new(),
            visits: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn head(&self) -> Cylinder {
        self.head
    }

    /// Moves the head to `to` and records the step.
    pub(crate) fn visit(&mut self, to: Cylinder, kind: VisitKind) {
        let movement = (to - self.head).abs();
        log::trace!("{} -> {} ({:?}, moved {})", self.head, to, kind, movement);
        self.sequence.push(to);
        self.movements.push(movement);
        self.visits.push(kind);
        self.head = to;
    }

    pub(crate) fn finish(
        self,
        algorithm: &str,
        direction: Option<Direction>,
        request_count: usize,
    ) -> ScheduleResult {
        let total_movement: i64 = self.movements.iter().sum();
        let average_seek = if request_count == 0 {
            0.0
        } else {
            total_movement as f64 / request_count as f64
        };
        ScheduleResult {
            algorithm: algorithm.to_string(),
            direction,
            start_head: self.start,
            sequence: self.sequence,
            movements: self.movements,
            visits: self.visits,
            total_movement,
            average_seek,
            final_head_position: self.head,
            request_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScheduleResult {
        let mut trace = HeadTrace::new(50);
        trace.visit(82, VisitKind::Request);
        trace.visit(199, VisitKind::Boundary);
        trace.visit(0, VisitKind::Wrap);
        trace.visit(16, VisitKind::Request);
        trace.finish("C-SCAN", Some(Direction::TowardHigh), 2)
    }

    #[test]
    fn test_trace_accounting() {
        let r = sample();
        assert_eq!(r.sequence, vec![82, 199, 0, 16]);
        assert_eq!(r.movements, vec![32, 117, 199, 16]);
        assert_eq!(r.total_movement, 364);
        assert_eq!(r.final_head_position, 16);
        // averaged over original requests only
        assert!((r.average_seek - 182.0).abs() < 1e-10);
    }

    #[test]
    fn test_serviced_requests_skip_synthetic() {
        let r = sample();
        assert_eq!(r.serviced_requests(), vec![82, 16]);
        assert_eq!(r.synthetic_visit_count(), 2);
        assert_eq!(r.step_count(), 4);
    }

    #[test]
    fn test_steps_and_replay() {
        let r = sample();
        let steps = r.steps();
        assert_eq!(steps[0].from, 50);
        assert_eq!(steps[2].from, 199);
        assert_eq!(steps[2].to, 0);
        assert_eq!(steps[2].kind, VisitKind::Wrap);
        assert_eq!(steps[3].number, 4);
        assert_eq!(r.replayed_movement(), r.total_movement);
    }

    #[test]
    fn test_empty_trace() {
        let r = HeadTrace::new(7).finish("FCFS", None, 0);
        assert!(r.sequence.is_empty());
        assert_eq!(r.total_movement, 0);
        assert_eq!(r.average_seek, 0.0);
        assert_eq!(r.final_head_position, 7);
    }

    #[test]
    fn test_serde_roundtrip() {
        let r = sample();
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"wrap\""));
        let back: ScheduleResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
