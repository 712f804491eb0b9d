use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use u_disk_schedule::config::SimulationConfig;
use u_disk_schedule::models::{Cylinder, Direction, DiskGeometry};
use u_disk_schedule::report;
use u_disk_schedule::scheduler::{run_all, Algorithm, ComparisonKpi, SchedulingProblem};
use u_disk_schedule::workload::{RequestGenerator, RequestPattern, Workload};

#[derive(Parser, Debug)]
#[command(author, version, about = "Disk-head scheduling simulator", long_about = None)]
struct Args {
    /// Path to a TOML simulation config
    #[arg(short, long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in workload: classic or starvation
    #[arg(short, long)]
    preset: Option<String>,

    /// Generate this many random requests instead of a fixed queue
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Total cylinders (overrides config/preset)
    #[arg(long)]
    cylinders: Option<i64>,

    /// Start head position (overrides config/preset)
    #[arg(long, allow_negative_numbers = true)]
    head: Option<Cylinder>,

    /// Comma-separated request queue, e.g. 82,170,43
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    requests: Option<Vec<Cylinder>>,

    /// Initial sweep direction for SCAN/C-SCAN
    #[arg(short, long)]
    direction: Option<String>,

    /// Comma-separated algorithms to run
    #[arg(short, long, value_delimiter = ',')]
    algorithms: Option<Vec<String>>,

    /// Print the per-step table of every run
    #[arg(long)]
    steps: bool,

    /// Save all results to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Minimal output (comparison table only)
    #[arg(short, long)]
    quiet: bool,
}

struct Plan {
    problem: SchedulingProblem,
    algorithms: Vec<Algorithm>,
    direction: Direction,
}

fn build_plan(args: &Args) -> Result<Plan, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => Some(SimulationConfig::from_file(path)?),
        None => None,
    };

    let base = match (&config, &args.preset) {
        (Some(c), None) => Workload {
            name: "config".to_string(),
            total_cylinders: c.total_cylinders,
            start_head: c.start_head,
            requests: c.requests.clone(),
        },
        (None, Some(name)) => {
            Workload::preset(name).ok_or_else(|| format!("unknown preset '{name}'"))?
        }
        (None, None) => Workload::classic(),
        (Some(_), Some(_)) => return Err("--config and --preset are mutually exclusive".into()),
    };

    let total_cylinders = args.cylinders.unwrap_or(base.total_cylinders);
    let mut start_head = args.head.unwrap_or(base.start_head);
    let mut requests = args.requests.clone().unwrap_or(base.requests);

    if let Some(count) = args.random {
        let geometry = DiskGeometry::new(total_cylinders)?;
        let mut generator = RequestGenerator::new(geometry, RequestPattern::Uniform, args.seed);
        if args.head.is_none() {
            start_head = generator.start_head();
        }
        requests = generator.requests(start_head, count);
    }

    let problem = SchedulingProblem::with_cylinders(total_cylinders, start_head, requests)?;

    let direction = match (&args.direction, &config) {
        (Some(token), _) => token.parse::<Direction>()?,
        (None, Some(c)) => c.direction()?,
        (None, None) => Direction::default(),
    };

    let algorithms = match (&args.algorithms, &config) {
        (Some(tokens), _) => tokens
            .iter()
            .map(|t| t.parse::<Algorithm>())
            .collect::<Result<Vec<Algorithm>, _>>()?,
        (None, Some(c)) => c.algorithms()?,
        (None, None) => Algorithm::ALL.to_vec(),
    };

    Ok(Plan {
        problem,
        algorithms,
        direction,
    })
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let plan = match build_plan(&args) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    info!(
        "simulating {} algorithm(s) on {} cylinders",
        plan.algorithms.len(),
        plan.problem.geometry().total_cylinders()
    );

    if !args.quiet {
        println!("=== Disk Geometry & I/O Requests ===");
        print!("{}", report::disk_summary(&plan.problem));
        println!("Initial Direction: {}", plan.direction);
        println!("\nDisk Cylinder Layout (Simplified View):");
        print!("{}", report::disk_layout(&plan.problem));
        println!();
    }

    let results = run_all(&plan.problem, &plan.algorithms, plan.direction);

    if args.steps && !args.quiet {
        for result in &results {
            println!("{}", report::step_table(result));
        }
    }

    let kpi = ComparisonKpi::calculate(&results, plan.problem.requests().as_slice());
    print!("{}", report::comparison_table(&kpi));

    if let Some(path) = args.output {
        let saved = serde_json::to_string_pretty(&results)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(&path, json).map_err(|e| e.to_string()));
        match saved {
            Ok(()) => {
                if !args.quiet {
                    println!("\nResults saved to {:?}", path);
                }
            }
            Err(e) => {
                eprintln!("Error saving results: {}", e);
                process::exit(1);
            }
        }
    }
}
