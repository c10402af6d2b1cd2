/*
SPDX-License-Identifier: MIT
*/

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use ticksim::sim::{simulate, Policy};
use ticksim::stats;
use ticksim::task::TaskSet;
use ticksim::{report, workload};

// ── CLI argument definition ───────────────────────────────────────────────────

/// ticksim – discrete-time CPU scheduling simulator.
///
/// Example:
///   ticksim tasks.txt RR 2
///   ticksim tasks.txt FCFS
#[derive(Debug, Parser)]
#[command(
    name = "ticksim",
    about = "Simulate FCFS, Round Robin, or SRTF scheduling over a task list",
    long_about = None,
)]
struct Cli {
    /// Path to the task list file (one `pid arrival_time burst_time` per line).
    task_list: PathBuf,

    /// Scheduling policy: FCFS, RR, or SRTF.
    policy: String,

    /// Time quantum in ticks — required by RR, ignored otherwise.
    quantum: Option<u32>,
}

impl Cli {
    /// Validate the policy/quantum combination into a typed [`Policy`].
    fn parse_policy(&self) -> Result<Policy, String> {
        match self.policy.as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SRTF" => Ok(Policy::Srtf),
            "RR" => {
                let quantum = self
                    .quantum
                    .ok_or("time quantum is required for Round Robin")?;
                let quantum = NonZeroU32::new(quantum)
                    .ok_or("time quantum must be a positive integer")?;
                Ok(Policy::RoundRobin { quantum })
            }
            other => Err(format!(
                "unknown scheduling policy '{other}' (valid: FCFS, RR, SRTF)"
            )),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug);
    // default is warnings only so the report stays uncluttered.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // ── Configuration validation ──────────────────────────────────────────────
    let policy = match cli.parse_policy() {
        Ok(policy) => policy,
        Err(msg) => {
            error!("{msg}");
            process::exit(1);
        }
    };

    info!(
        task_list = %cli.task_list.display(),
        policy = policy.name(),
        "configuration"
    );

    // ── Load the workload ─────────────────────────────────────────────────────
    let tasks = match workload::load_from_file(&cli.task_list) {
        Ok(tasks) => tasks,
        Err(e) => {
            error!("failed to load workload: {e:#}");
            process::exit(1);
        }
    };
    if tasks.is_empty() {
        error!(
            "no tasks loaded from {} — nothing to simulate",
            cli.task_list.display()
        );
        process::exit(1);
    }

    let task_set = match TaskSet::new(tasks) {
        Ok(ts) => ts,
        Err(e) => {
            error!("invalid workload: {e}");
            process::exit(1);
        }
    };

    // ── Simulate and report ───────────────────────────────────────────────────
    let result = match simulate(task_set, policy) {
        Ok(result) => result,
        Err(e) => {
            error!("simulation failed: {e}");
            process::exit(1);
        }
    };

    let statistics = stats::aggregate(&result.tasks, &result.timeline);
    print!("{}", report::render(&result, &statistics));
}
