//! Policy runners for the ticksim simulator.
//!
//! [`simulate`] implements three classical single-processor scheduling
//! policies over a fixed [`TaskSet`], producing a tick-by-tick [`Timeline`]
//! and filling in each task's timing metrics.
//!
//! # Design decisions vs the classic C exercise
//!
//! | Topic | C | Rust |
//! |---|---|---|
//! | RR ready queue | Fixed `[100]` circular buffer, manual `% 100` | `VecDeque<usize>` — no capacity cliff |
//! | "already queued" flag | Global `in_queue[100]` array | `queued` field on the task record |
//! | RR idle arrival scan | `for (int i = ~0; ...)` (defective start index) | Full registry scan per idle tick |
//! | Quantum | Bare `int`, validated at `main` | `NonZeroU32` inside [`Policy::RoundRobin`] |
//! | Output | `printf` interleaved with the algorithm | [`Timeline`] events; rendering is the caller's concern |
//! | CPU usage | Hard-coded `100.00%` | Idle ticks recorded; utilisation measured |
//!
//! # Example
//! ```rust,ignore
//! let tasks = TaskSet::new(vec![Task::new(1, 0, 5), Task::new(2, 2, 3)])?;
//! let result = simulate(tasks, Policy::Fcfs)?;
//! let stats = stats::aggregate(&result.tasks, &result.timeline);
//! ```

pub mod error;
pub mod timeline;

mod fcfs;
mod rr;
mod srtf;

pub use error::SimulationError;
pub use timeline::{Timeline, TimelineEvent};

use std::num::NonZeroU32;

use tracing::info;

use crate::task::{Task, TaskSet};

// ── Policy selector ───────────────────────────────────────────────────────────

/// Scheduling policy for one simulation run.
///
/// Carrying the quantum inside the `RoundRobin` variant (as a `NonZeroU32`)
/// makes the one illegal configuration — RR without a positive quantum —
/// unrepresentable, instead of a runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served: non-preemptive, registry order.
    Fcfs,
    /// Round Robin: preemptive, `quantum`-bounded time slices.
    RoundRobin { quantum: NonZeroU32 },
    /// Shortest-Remaining-Time-First: preemptive, re-evaluated every tick.
    Srtf,
}

impl Policy {
    /// Canonical policy name as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::RoundRobin { .. } => "RR",
            Policy::Srtf => "SRTF",
        }
    }
}

// ── SimulationResult ──────────────────────────────────────────────────────────

/// Immutable outcome of one simulation run: the finished tasks (metrics
/// filled in, registry order preserved) plus the recorded timeline.
///
/// One policy run is a single atomic unit of work — the mutable registry
/// never escapes the runner, only this frozen result does.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Tasks in registry order, each with `remaining_time == 0`,
    /// `finish_time` set, and the three derived metrics computed.
    pub tasks: Vec<Task>,
    /// Per-tick event log, ending with the all-finished marker.
    pub timeline: Timeline,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run `policy` over `tasks` to completion.
///
/// Consumes the registry (the runner exclusively owns it for the run) and
/// returns the finished tasks together with the timeline.  The registry is
/// assumed well-formed: all bursts ≥ 1, arrival order for FCFS.
///
/// # Errors
/// [`SimulationError::NoTasks`] if the registry is empty.
pub fn simulate(tasks: TaskSet, policy: Policy) -> Result<SimulationResult, SimulationError> {
    if tasks.is_empty() {
        return Err(SimulationError::NoTasks);
    }

    let mut tasks = tasks.into_tasks();
    let mut timeline = Timeline::new();

    info!(
        policy = policy.name(),
        task_count = tasks.len(),
        "simulation start"
    );

    match policy {
        Policy::Fcfs => fcfs::run(&mut tasks, &mut timeline),
        Policy::RoundRobin { quantum } => rr::run(&mut tasks, quantum, &mut timeline),
        Policy::Srtf => srtf::run(&mut tasks, &mut timeline),
    }

    info!(
        makespan = timeline.makespan(),
        busy = timeline.busy_ticks(),
        idle = timeline.idle_ticks(),
        "simulation complete"
    );

    Ok(SimulationResult { tasks, timeline })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn quantum(q: u32) -> NonZeroU32 {
        NonZeroU32::new(q).unwrap()
    }

    fn tasks(defs: &[(u32, u32, u32)]) -> TaskSet {
        TaskSet::new(
            defs.iter()
                .map(|&(pid, arrival, burst)| Task::new(pid, arrival, burst))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_task_set_returns_no_tasks_error() {
        let err = simulate(TaskSet::new(vec![]).unwrap(), Policy::Fcfs).unwrap_err();
        assert!(matches!(err, SimulationError::NoTasks));
    }

    #[test]
    fn every_policy_finishes_every_task() {
        let defs = [(1, 0, 5), (2, 2, 3), (3, 4, 1)];
        for policy in [
            Policy::Fcfs,
            Policy::RoundRobin {
                quantum: quantum(2),
            },
            Policy::Srtf,
        ] {
            let result = simulate(tasks(&defs), policy).unwrap();
            for task in &result.tasks {
                assert!(task.is_finished(), "{}: pid {} unfinished", policy.name(), task.pid);
                assert!(task.finish_time.is_some());
            }
        }
    }

    #[test]
    fn no_task_finishes_before_its_minimum_possible_time() {
        let defs = [(1, 0, 4), (2, 1, 6), (3, 3, 2)];
        for policy in [
            Policy::Fcfs,
            Policy::RoundRobin {
                quantum: quantum(3),
            },
            Policy::Srtf,
        ] {
            let result = simulate(tasks(&defs), policy).unwrap();
            for task in &result.tasks {
                let finish = task.finish_time.unwrap();
                assert!(
                    finish >= task.arrival_time + task.burst_time,
                    "{}: pid {} finished at {finish}",
                    policy.name(),
                    task.pid
                );
                assert_eq!(
                    task.waiting_time,
                    finish - task.arrival_time - task.burst_time
                );
            }
        }
    }

    #[test]
    fn busy_ticks_always_equal_total_burst() {
        let defs = [(1, 2, 3), (2, 9, 4)];
        for policy in [
            Policy::Fcfs,
            Policy::RoundRobin {
                quantum: quantum(1),
            },
            Policy::Srtf,
        ] {
            let result = simulate(tasks(&defs), policy).unwrap();
            assert_eq!(result.timeline.busy_ticks(), 7, "{}", policy.name());
        }
    }

    #[test]
    fn result_preserves_registry_order() {
        let result = simulate(tasks(&[(9, 0, 1), (3, 0, 1), (7, 0, 1)]), Policy::Srtf).unwrap();
        let pids: Vec<u32> = result.tasks.iter().map(|t| t.pid).collect();
        assert_eq!(pids, vec![9, 3, 7]);
    }

    #[test]
    fn simulation_is_deterministic() {
        let defs = [(1, 0, 5), (2, 0, 5), (3, 1, 2)];
        let reference = simulate(
            tasks(&defs),
            Policy::RoundRobin {
                quantum: quantum(2),
            },
        )
        .unwrap();
        for _ in 0..10 {
            let again = simulate(
                tasks(&defs),
                Policy::RoundRobin {
                    quantum: quantum(2),
                },
            )
            .unwrap();
            assert_eq!(again.tasks, reference.tasks);
            assert_eq!(again.timeline.events(), reference.timeline.events());
        }
    }

    #[test]
    fn policy_names_match_cli_surface() {
        assert_eq!(Policy::Fcfs.name(), "FCFS");
        assert_eq!(
            Policy::RoundRobin {
                quantum: quantum(1)
            }
            .name(),
            "RR"
        );
        assert_eq!(Policy::Srtf.name(), "SRTF");
    }
}
