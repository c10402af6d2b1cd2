//! Aggregate statistics over a finished simulation.
//!
//! Pure reduction: same finished registry and timeline in, same
//! [`Statistics`] out — aggregating twice yields identical figures.
//!
//! CPU utilisation is measured from the timeline (`busy / makespan`) rather
//! than assumed to be 100 %; a workload with arrival gaps reports the real
//! fraction of the makespan spent running.

use crate::sim::Timeline;
use crate::task::Task;

// ── Statistics ────────────────────────────────────────────────────────────────

/// Arithmetic means of the per-task metrics plus overall CPU utilisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Mean of `waiting_time` across all tasks, in ticks.
    pub avg_waiting_time: f64,
    /// Mean of `response_time` across all tasks, in ticks.
    pub avg_response_time: f64,
    /// Mean of `turnaround_time` across all tasks, in ticks.
    pub avg_turnaround_time: f64,
    /// Busy ticks as a percentage of the makespan (0.0–100.0).
    pub cpu_utilization: f64,
}

/// Reduce a fully-simulated registry and its timeline into [`Statistics`].
///
/// Assumes every task has been completed (metrics filled in).  An empty
/// registry — which [`simulate`](crate::sim::simulate) never produces —
/// yields all-zero statistics rather than NaN.
pub fn aggregate(tasks: &[Task], timeline: &Timeline) -> Statistics {
    if tasks.is_empty() {
        return Statistics {
            avg_waiting_time: 0.0,
            avg_response_time: 0.0,
            avg_turnaround_time: 0.0,
            cpu_utilization: 0.0,
        };
    }

    let n = tasks.len() as f64;
    let total_waiting: u64 = tasks.iter().map(|t| u64::from(t.waiting_time)).sum();
    let total_response: u64 = tasks.iter().map(|t| u64::from(t.response_time)).sum();
    let total_turnaround: u64 = tasks.iter().map(|t| u64::from(t.turnaround_time)).sum();

    let makespan = timeline.makespan();
    let cpu_utilization = if makespan == 0 {
        0.0
    } else {
        f64::from(timeline.busy_ticks()) / f64::from(makespan) * 100.0
    };

    Statistics {
        avg_waiting_time: total_waiting as f64 / n,
        avg_response_time: total_response as f64 / n,
        avg_turnaround_time: total_turnaround as f64 / n,
        cpu_utilization,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
