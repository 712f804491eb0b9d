//! Request queue and the working set consumed during a run.
//!
//! The queue keeps the original arrival order (used by FCFS and for
//! reporting). Each run takes its own [`WorkingSet`] copy, so servicing a
//! request never touches the caller's queue.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::Cylinder;

/// Pending cylinder requests in arrival order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQueue {
    requests: Vec<Cylinder>,
}

impl RequestQueue {
    /// Creates a queue from arrival-ordered requests.
    pub fn new(requests: impl Into<Vec<Cylinder>>) -> Self {
        Self {
            requests: requests.into(),
        }
    }

    /// Requests in arrival order.
    #[inline]
    pub fn as_slice(&self) -> &[Cylinder] {
        &self.requests
    }

    /// Number of original requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the queue holds no requests.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Fresh working copy for one scheduling run.
    pub fn working_set(&self) -> WorkingSet {
        WorkingSet {
            remaining: self.requests.clone(),
        }
    }
}

impl From<Vec<Cylinder>> for RequestQueue {
    fn from(requests: Vec<Cylinder>) -> Self {
        Self::new(requests)
    }
}

/// Requests not yet serviced, in their remaining arrival order.
///
/// Selection methods return a position; [`WorkingSet::take`] removes exactly
/// that occurrence, so duplicates are consumed one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSet {
    remaining: Vec<Cylinder>,
}

impl WorkingSet {
    /// Remaining requests in order.
    #[inline]
    pub fn as_slice(&self) -> &[Cylinder] {
        &self.remaining
    }

    /// Number of requests left.
    #[inline]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether every request has been serviced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Removes and returns the request at `index`, keeping the order of the rest.
    pub fn take(&mut self, index: usize) -> Cylinder {
        self.remaining.remove(index)
    }

    /// Position of the request closest to `head`.
    ///
    /// Equidistant candidates resolve to the earliest one in remaining order.
    pub fn nearest(&self, head: Cylinder) -> Option<usize> {
        self.remaining
            .iter()
            .enumerate()
            .min_by_key(|&(_, &cyl)| (cyl - head).abs())
            .map(|(idx, _)| idx)
    }

    /// Position of the smallest request `>= head` (earliest occurrence on ties).
    pub fn lowest_at_or_above(&self, head: Cylinder) -> Option<usize> {
        self.remaining
            .iter()
            .enumerate()
            .filter(|&(_, &cyl)| cyl >= head)
            .min_by_key(|&(_, &cyl)| cyl)
            .map(|(idx, _)| idx)
    }

    /// Position of the largest request `<= head` (earliest occurrence on ties).
    pub fn highest_at_or_below(&self, head: Cylinder) -> Option<usize> {
        self.remaining
            .iter()
            .enumerate()
            .filter(|&(_, &cyl)| cyl <= head)
            .min_by_key(|&(_, &cyl)| Reverse(cyl))
            .map(|(idx, _)| idx)
    }
}
