//! Text rendering of problems and results.
//!
//! Every function returns a `String`; printing is left to the caller.

use std::fmt::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::ScheduleResult;
use crate::scheduler::{ComparisonKpi, SchedulingProblem};

/// Cylinders per row of the disk layout.
const LAYOUT_BUCKET: i64 = 25;
/// Row cap for the layout; larger disks widen the bucket instead.
const MAX_LAYOUT_ROWS: i64 = 64;

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "Step")]
    step: usize,
    #[tabled(rename = "From")]
    from: i64,
    #[tabled(rename = "To")]
    to: i64,
    #[tabled(rename = "Movement")]
    movement: i64,
    #[tabled(rename = "Kind")]
    kind: &'static str,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Algorithm")]
    algorithm: String,
    #[tabled(rename = "Total Movement")]
    total_movement: i64,
    #[tabled(rename = "Average Seek")]
    average_seek: String,
    #[tabled(rename = "Final Position")]
    final_position: i64,
    #[tabled(rename = "Efficiency")]
    efficiency: String,
    #[tabled(rename = "Max Delay")]
    max_delay: i64,
}

/// Geometry, head and pending requests.
pub fn disk_summary(problem: &SchedulingProblem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Cylinders: {}", problem.geometry().total_cylinders());
    let _ = writeln!(out, "Current Head Position: {}", problem.start_head());
    let _ = writeln!(out, "Pending Requests: {:?}", problem.requests().as_slice());
    out
}

/// Simplified cylinder layout, one row per 25 cylinders, `↑` on the row
/// holding the head.
///
/// Disks too large for [`MAX_LAYOUT_ROWS`] rows get wider buckets.
pub fn disk_layout(problem: &SchedulingProblem) -> String {
    let head = problem.start_head();
    let total = problem.geometry().total_cylinders();
    let min_bucket = total / MAX_LAYOUT_ROWS + i64::from(total % MAX_LAYOUT_ROWS != 0);
    let bucket = LAYOUT_BUCKET.max(min_bucket);

    let mut out = String::new();
    for row in 0..MAX_LAYOUT_ROWS {
        let start = match row.checked_mul(bucket) {
            Some(start) if start < total => start,
            _ => break,
        };
        let marker = if head >= start && head - start < bucket {
            "↑"
        } else {
            "-"
        };
        let _ = writeln!(out, "{start:3} {marker}");
    }
    out
}

/// Per-step table of one run, followed by its totals.
pub fn step_table(result: &ScheduleResult) -> String {
    let rows: Vec<StepRow> = result
        .steps()
        .into_iter()
        .map(|s| StepRow {
            step: s.number,
            from: s.from,
            to: s.to,
            movement: s.movement,
            kind: s.kind.label(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::ascii());

    let mut out = String::new();
    let _ = writeln!(out, "{}", result.algorithm);
    let _ = writeln!(out, "{table}");
    let _ = writeln!(out, "Total Head Movement: {} cylinders", result.total_movement);
    let _ = writeln!(
        out,
        "Average Seek Time: {:.2} cylinders per request",
        result.average_seek
    );
    let _ = writeln!(out, "Final Head Position: {}", result.final_head_position);
    out
}

/// Side-by-side comparison of several runs, with the best one called out.
pub fn comparison_table(kpi: &ComparisonKpi) -> String {
    let rows: Vec<ComparisonRow> = kpi
        .rows
        .iter()
        .map(|r| ComparisonRow {
            algorithm: r.algorithm.clone(),
            total_movement: r.total_movement,
            average_seek: format!("{:.2}", r.average_seek),
            final_position: r.final_head_position,
            efficiency: format!("{:.1}%", r.efficiency_pct),
            max_delay: r.max_service_delay,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::ascii());

    let mut out = format!("{table}\n");
    if let Some(best) = kpi.best() {
        let _ = writeln!(
            out,
            "Best algorithm: {} (Total Movement: {} cylinders)",
            best.algorithm, best.total_movement
        );
    }
    out
}
