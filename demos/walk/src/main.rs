//! walk — command-line driver for the rust_walk simulator.
//!
//! ```text
//! walk <walker_type> <steps> <simulations> <n_steps>
//!      [--portals x1,y1,x2,y2,x3,y3,...] [--obstacles x1,y1,x2,y2,...]
//!      [--weights w1,w2,w3,w4,w5] [--seed N] [--output DIR]
//! ```
//!
//! Walker types: 1 continuous, 2 variable step, 3 discrete, 4 weighted
//! discrete.  With `--output`, per-step and per-run statistics go to CSV
//! files and the session summary to `summary.json`.  Set `RUST_LOG=debug`
//! for per-run log lines.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rw_core::SessionConfig;
use rw_output::{CsvWriter, SessionOutputObserver};
use rw_plane::{parse_obstacles, parse_portals};
use rw_sim::{NoopObserver, SessionBuilder, SessionReport};
use rw_walker::{DirectionWeights, WalkerKind, WalkerSpec};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "walk")]
#[command(about = "A simulation of a random walker on a plane with obstacles and portals", long_about = None)]
struct Cli {
    /// Type of the walker (1 continuous, 2 variable step, 3 discrete, 4 weighted discrete)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
    walker_type: u8,

    /// Number of steps the walker takes in each run
    steps: u64,

    /// Number of runs
    simulations: u32,

    /// Step index at which the distance statistics are taken (1..=steps)
    n_steps: u64,

    /// Portal coordinates "x1,y1,x2,y2,x3,y3" (segment then destination), repeated
    #[arg(long)]
    portals: Option<String>,

    /// Obstacle coordinates "x1,y1,x2,y2", repeated
    #[arg(long)]
    obstacles: Option<String>,

    /// Direction weights "w1,w2,w3,w4,w5" (up, down, right, left, towards origin) for type 4
    #[arg(long)]
    weights: Option<DirectionWeights>,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Directory for CSV output and summary.json
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let kind = WalkerKind::from_code(cli.walker_type)?;
    let walker = match (kind, cli.weights) {
        (WalkerKind::WeightedDiscrete, Some(weights)) => WalkerSpec::weighted(weights),
        (kind, weights) => WalkerSpec { kind, weights },
    };
    let config = SessionConfig::new(cli.steps, cli.simulations, cli.n_steps, cli.seed);

    let obstacles = match cli.obstacles.as_deref() {
        Some(s) => parse_obstacles(s).context("parsing --obstacles")?,
        None => Vec::new(),
    };
    let portals = match cli.portals.as_deref() {
        Some(s) => parse_portals(s).context("parsing --portals")?,
        None => Vec::new(),
    };

    let mut session = SessionBuilder::new(config, walker)
        .obstacles(obstacles)
        .portals(portals)
        .build()?;
    info!(
        walker = %kind,
        steps = cli.steps,
        simulations = cli.simulations,
        n_steps = cli.n_steps,
        obstacles = session.plane.obstacles().len(),
        portals = session.plane.portals().len(),
        "starting session",
    );

    let t0 = Instant::now();
    let report = match &cli.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating CSV output in {}", dir.display()))?;
            let mut obs = SessionOutputObserver::new(writer);
            let report = session.run(&mut obs)?;
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing CSV output");
            }
            write_summary(dir, &report)?;
            report
        }
        None => session.run(&mut NoopObserver)?,
    };
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "session finished");

    print_summary(&report, cli.simulations);
    Ok(())
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_summary(report: &SessionReport, simulations: u32) {
    let s = &report.summary;
    println!("Runs: {}  |  stuck: {}", s.runs, s.stuck_runs);
    println!("Avg distance from origin : {:.4}", s.avg_distance_from_origin);
    println!("Avg distance from x-axis : {:.4}", s.avg_distance_from_x_axis);
    println!("Avg distance from y-axis : {:.4}", s.avg_distance_from_y_axis);
    println!("Avg unsuccessful moves   : {:.2}", s.avg_unsuccessful_moves);

    // Cross-run averages are only meaningful with more than one run.
    if simulations > 1 {
        println!("Avg steps to exit radius : {:.2}", s.avg_steps_to_exit);
        println!("Avg time to exit radius  : {:?}", s.avg_time_to_exit);
        println!("Avg y-axis crossings     : {:.2}", s.avg_y_axis_crossings);
    }
}

fn write_summary(dir: &std::path::Path, report: &SessionReport) -> Result<()> {
    let path = dir.join("summary.json");
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let doc = serde_json::json!({
        "summary":    report.summary,
        "mean_steps": report.mean_step_stats(),
    });
    serde_json::to_writer_pretty(BufWriter::new(file), &doc)?;
    info!(path = %path.display(), "wrote session summary");
    Ok(())
}
