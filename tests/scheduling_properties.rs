//! Properties every policy must hold over random workloads.

use std::collections::HashMap;

use u_disk_schedule::models::{Cylinder, Direction, DiskGeometry, ScheduleResult, VisitKind};
use u_disk_schedule::scheduler::{run, run_all, schedule, Algorithm, SchedulingProblem};
use u_disk_schedule::workload::{RequestGenerator, RequestPattern, Workload};
use u_disk_schedule::ConfigurationError;

const SEEDS: std::ops::Range<u64> = 0..40;

fn random_problems() -> Vec<SchedulingProblem> {
    let mut problems = Vec::new();
    for seed in SEEDS {
        let cylinders = 1 + (seed as i64 * 37) % 500;
        let geometry = DiskGeometry::new(cylinders).unwrap();
        let pattern = if seed % 2 == 0 {
            RequestPattern::Uniform
        } else {
            RequestPattern::Hotspot {
                spread: 10,
                hot_fraction: 0.8,
            }
        };
        let count = (seed as usize * 3) % 25;
        let workload = RequestGenerator::new(geometry, pattern, seed).workload(count);
        problems.push(workload.to_problem().unwrap());
    }
    problems
}

fn multiset(values: &[Cylinder]) -> HashMap<Cylinder, usize> {
    let mut counts = HashMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

fn all_runs(problem: &SchedulingProblem) -> Vec<ScheduleResult> {
    let mut results = run_all(problem, &Algorithm::ALL, Direction::TowardHigh);
    results.extend(run_all(
        problem,
        &[Algorithm::Scan, Algorithm::CScan],
        Direction::TowardLow,
    ));
    results
}

#[test]
fn total_movement_is_sum_of_movements_and_replayable() {
    for problem in random_problems() {
        for r in all_runs(&problem) {
            assert_eq!(r.total_movement, r.movements.iter().sum::<i64>());
            assert_eq!(r.total_movement, r.replayed_movement());
            assert!(r.movements.iter().all(|&m| m >= 0));
            assert_eq!(r.sequence.len(), r.movements.len());
            assert_eq!(r.sequence.len(), r.visits.len());
        }
    }
}

#[test]
fn serviced_requests_are_a_permutation_of_the_queue() {
    for problem in random_problems() {
        let original = multiset(problem.requests().as_slice());
        for r in all_runs(&problem) {
            assert_eq!(multiset(&r.serviced_requests()), original, "{}", r.algorithm);
        }
    }
}

#[test]
fn average_seek_divides_by_original_requests() {
    for problem in random_problems() {
        for r in all_runs(&problem) {
            if problem.request_count() == 0 {
                assert_eq!(r.average_seek, 0.0);
                assert_eq!(r.final_head_position, problem.start_head());
            } else {
                let expected = r.total_movement as f64 / problem.request_count() as f64;
                assert!((r.average_seek - expected).abs() < 1e-10);
            }
        }
    }
}

#[test]
fn fcfs_keeps_arrival_order() {
    for problem in random_problems() {
        let r = run(&problem, Algorithm::Fcfs, Direction::TowardHigh);
        assert_eq!(r.sequence, problem.requests().as_slice());
    }
}

#[test]
fn sstf_always_picks_the_nearest_remaining_request() {
    for problem in random_problems() {
        let r = run(&problem, Algorithm::Sstf, Direction::TowardHigh);
        let mut remaining = problem.requests().as_slice().to_vec();
        let mut head = problem.start_head();
        for &chosen in &r.sequence {
            let best = remaining
                .iter()
                .map(|&c| (c - head).abs())
                .min()
                .unwrap();
            assert_eq!((chosen - head).abs(), best);
            // ties go to the earliest remaining candidate
            let first = remaining
                .iter()
                .position(|&c| (c - head).abs() == best)
                .unwrap();
            assert_eq!(remaining[first], chosen);
            remaining.remove(first);
            head = chosen;
        }
        assert!(remaining.is_empty());
    }
}

#[test]
fn synthetic_visits_land_on_disk_ends() {
    for problem in random_problems() {
        let max = problem.geometry().max_cylinder();
        for r in all_runs(&problem) {
            for (cyl, kind) in r.sequence.iter().zip(&r.visits) {
                if kind.is_synthetic() {
                    assert!(*cyl == 0 || *cyl == max);
                }
            }
            if r.algorithm == "C-SCAN" {
                for (i, kind) in r.visits.iter().enumerate() {
                    if *kind == VisitKind::Wrap {
                        assert_eq!(r.visits[i - 1], VisitKind::Boundary);
                        assert_eq!(r.movements[i], problem.geometry().wrap_cost());
                    }
                }
            }
        }
    }
}

#[test]
fn runs_are_idempotent() {
    for problem in random_problems() {
        assert_eq!(all_runs(&problem), all_runs(&problem));
    }
}

#[test]
fn scan_textbook_example() {
    let geometry = DiskGeometry::new(200).unwrap();
    let r = schedule(
        Algorithm::Scan,
        &geometry,
        50,
        &[82, 170, 43, 140, 24, 16, 190],
        Direction::TowardHigh,
    )
    .unwrap();
    assert_eq!(r.serviced_requests(), vec![82, 140, 170, 190, 43, 24, 16]);
    assert_eq!(r.sequence[4], 199);
    assert_eq!(r.final_head_position, 16);
}

#[test]
fn cscan_textbook_example() {
    let geometry = DiskGeometry::new(200).unwrap();
    let r = schedule(
        Algorithm::CScan,
        &geometry,
        50,
        &[82, 170, 43, 140, 24, 16, 190],
        Direction::TowardHigh,
    )
    .unwrap();
    assert_eq!(r.sequence, vec![82, 140, 170, 190, 199, 0, 16, 24, 43]);
    assert_eq!(r.movements[5], 199);
    assert_eq!(r.final_head_position, 43);
}

#[test]
fn sstf_starves_distant_requests() {
    let problem = Workload::starvation().to_problem().unwrap();
    let sstf = run(&problem, Algorithm::Sstf, Direction::TowardHigh);
    let fcfs = run(&problem, Algorithm::Fcfs, Direction::TowardHigh);

    let pos = |r: &ScheduleResult, c: Cylinder| r.sequence.iter().position(|&x| x == c).unwrap();

    for near in 48..=52 {
        assert!(pos(&sstf, near) < pos(&sstf, 195));
        assert!(pos(&sstf, near) < pos(&sstf, 5));
    }
    // FCFS reaches 195 in arrival order; SSTF defers it to the end
    assert_eq!(pos(&fcfs, 195), 5);
    assert_eq!(pos(&sstf, 195), 6);
}

#[test]
fn configuration_errors_fail_before_scheduling() {
    assert_eq!(
        DiskGeometry::new(0),
        Err(ConfigurationError::InvalidGeometry { total_cylinders: 0 })
    );

    let geometry = DiskGeometry::new(10).unwrap();
    for algorithm in Algorithm::ALL {
        let err = schedule(algorithm, &geometry, 10, &[1], Direction::TowardHigh).unwrap_err();
        assert_eq!(err, ConfigurationError::StartHeadOutOfRange { head: 10, max: 9 });

        let err = schedule(algorithm, &geometry, 0, &[1, -2], Direction::TowardHigh).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::RequestOutOfRange {
                index: 1,
                value: -2,
                max: 9
            }
        );
    }

    assert_eq!(
        "diagonal".parse::<Direction>(),
        Err(ConfigurationError::UnknownDirection("diagonal".into()))
    );
}

#[test]
fn movement_totals_cannot_overflow() {
    let huge = DiskGeometry::new(i64::MAX).unwrap();
    let max = huge.max_cylinder();
    for algorithm in Algorithm::ALL {
        let err = schedule(algorithm, &huge, 0, &[max, 0, max], Direction::TowardHigh).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MovementOverflow {
                total_cylinders: i64::MAX,
                requests: 3
            }
        );
    }

    // largest disk that still fits 3 requests plus 2 synthetic steps
    let geometry = DiskGeometry::new(i64::MAX / 5 + 1).unwrap();
    let max = geometry.max_cylinder();
    for algorithm in Algorithm::ALL {
        for direction in [Direction::TowardHigh, Direction::TowardLow] {
            let r = schedule(algorithm, &geometry, max / 2, &[max, 0, max], direction).unwrap();
            assert_eq!(r.total_movement, r.replayed_movement());
            assert!(r.total_movement >= max);
        }
    }
}
