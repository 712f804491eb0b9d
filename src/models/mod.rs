//! Disk scheduling domain models.
//!
//! Provides the data types shared by every policy: the disk's cylinder
//! range, the request queue and its per-run working copy, the sweep
//! direction, and the result of a run.
//!
//! # Lifecycle
//!
//! | Type | Lifetime |
//! |------|----------|
//! | `DiskGeometry` | Immutable, reusable across runs |
//! | `RequestQueue` | Original arrival order, never mutated by a run |
//! | `WorkingSet` | Fresh copy per run, consumed as requests are serviced |
//! | `ScheduleResult` | Produced once per run |

mod direction;
mod geometry;
mod queue;
mod result;

pub use direction::Direction;
pub use geometry::{Cylinder, DiskGeometry};
pub use queue::{RequestQueue, WorkingSet};
pub use result::{ScheduleResult, ScheduleStep, VisitKind};

pub(crate) use result::HeadTrace;
