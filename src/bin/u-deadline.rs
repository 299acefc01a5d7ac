//! u-deadline — schedule unit-time tasks against deadlines.
//!
//! # Usage
//!
//! ```text
//! u-deadline                       # built-in 10-task example
//! u-deadline --tasks 20 --seed 7   # random deadlines
//! u-deadline --deadlines 2,0,0     # explicit 0-based deadlines
//! u-deadline --config run.toml --json
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use u_deadline::config::{DeadlineSource, RunConfig};
use u_deadline::diagnostics::{ScheduleListing, TaskListing};
use u_deadline::scheduler::{DeadlineScheduler, ScheduleKpi, ScheduleTrace};

#[derive(Parser)]
#[command(name = "u-deadline", about = "Unit-time deadline scheduler")]
struct Cli {
    /// Number of tasks; deadlines are drawn at random.
    #[arg(short = 'n', long, conflicts_with = "deadlines")]
    tasks: Option<usize>,

    /// Seed for random deadlines.
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit 0-based deadlines, comma separated.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    deadlines: Option<Vec<i64>>,

    /// TOML run configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the per-step forest table.
    #[arg(long)]
    no_table: bool,

    /// Print the schedule as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_run_config(self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(values) = self.deadlines {
            config.deadlines = DeadlineSource::Explicit { values };
        } else if let Some(count) = self.tasks {
            config.deadlines = DeadlineSource::Random {
                count,
                seed: self.seed,
            };
        } else if let (Some(seed), DeadlineSource::Random { seed: slot, .. }) =
            (self.seed, &mut config.deadlines)
        {
            *slot = Some(seed);
        }

        if self.no_table {
            config.output.table = false;
        }
        if self.json {
            config.output.json = true;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_run_config()?;
    let deadlines = config.deadlines.resolve()?;
    info!(tasks = deadlines.len(), source = ?config.deadlines, "resolved deadlines");

    let scheduler = DeadlineScheduler::new().with_config(config.scheduler_config());
    let trace = scheduler.schedule_traced(&deadlines)?;
    let kpi = ScheduleKpi::calculate(&trace.schedule);

    if config.output.json {
        let report = serde_json::json!({
            "deadlines": deadlines,
            "schedule": trace.schedule,
            "kpi": kpi,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&deadlines, &trace);
        println!(
            "\n{} of {} task(s) miss their deadline",
            kpi.late_count, kpi.task_count
        );
    }
    Ok(())
}

fn print_text(deadlines: &[usize], trace: &ScheduleTrace) {
    println!("Description of task(s)\n----------------------");
    print!("{}", TaskListing::new(deadlines));

    println!("\nScheduling of task(s)\n---------------------");
    if trace.snapshots.is_empty() {
        print!("{}", ScheduleListing::new(&trace.schedule));
        return;
    }

    // Interleave each assignment with the table captured right after it.
    let listing = ScheduleListing::new(&trace.schedule);
    for (assignment, snapshot) in trace.schedule.assignments.iter().zip(&trace.snapshots) {
        println!("{}", listing.line(assignment));
        print!("{snapshot}");
    }
}
