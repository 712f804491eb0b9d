//! Disk-head scheduling engine.
//!
//! Given a disk's cylinder range, a starting head position, and a queue of
//! pending requests, computes the service order and head movement under
//! FCFS, SSTF, SCAN and C-SCAN. The engine is pure: it returns structured
//! results and never performs I/O. Rendering lives in [`report`].
//!
//! # Modules
//!
//! - **`models`**: Domain types: `DiskGeometry`, `Direction`, `RequestQueue`,
//!   `WorkingSet`, `ScheduleResult`, `VisitKind`
//! - **`scheduler`**: Policies, the `DiskScheduler` trait, comparison KPIs
//! - **`validation`**: Fail-fast input checks
//! - **`workload`**: Preset and seeded random request queues
//! - **`config`**: TOML simulation configuration
//! - **`report`**: Text tables for results and comparisons
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Worthington, Ganger & Patt (1994), "Scheduling Algorithms for Modern Disk Drives"

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ConfigurationError;
