//! First-Come-First-Served: non-preemptive, strict registry order.

use tracing::debug;

use super::timeline::Timeline;
use crate::task::Task;

/// Run every task to completion, one at a time, in registry order.
///
/// The registry is assumed to be in arrival order (ties broken by input
/// order); the runner never looks ahead, so an out-of-order registry simply
/// executes in registry order with idle gaps.
///
/// Idle ticks between the clock and the next task's arrival are recorded
/// one event per tick so utilisation can be measured from the timeline.
pub(super) fn run(tasks: &mut [Task], timeline: &mut Timeline) {
    let mut time: u32 = 0;

    for task in tasks.iter_mut() {
        // Processor idles until the next task in line arrives.
        while time < task.arrival_time {
            timeline.push_idle(time);
            time += 1;
        }

        task.mark_started(time);
        debug!(pid = task.pid, time, "fcfs: task started");

        // One uninterrupted span of `burst_time` ticks.
        while task.remaining_time > 0 {
            timeline.push_run(time, task.pid);
            task.remaining_time -= 1;
            time += 1;
        }

        task.complete(time);
        timeline.push_finished(time, task.pid);
        debug!(pid = task.pid, finish = time, "fcfs: task finished");
    }

    timeline.push_all_finished(time);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
