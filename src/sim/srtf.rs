//! Shortest-Remaining-Time-First: preemptive, re-evaluated every tick.
//!
//! Each tick the whole registry is scanned for the eligible task (arrived,
//! unfinished) with the smallest `remaining_time`; strict `<` in the scan
//! means the first minimal candidate in registry order wins ties.  The O(n)
//! rescan per tick is intentional at this scale; a min-priority structure
//! keyed on remaining time (re-keyed per decrement, stable tie-break) would
//! be a drop-in replacement with identical observable behaviour.

use tracing::debug;

use super::timeline::Timeline;
use crate::task::Task;

/// Run the preemptive shortest-remaining-time-first policy to completion.
pub(super) fn run(tasks: &mut [Task], timeline: &mut Timeline) {
    let mut time: u32 = 0;
    let mut completed = 0usize;

    while completed < tasks.len() {
        // Pick the arrived, unfinished task with minimal remaining time.
        // Strict `<` rejects later equal candidates, so ties fall to the
        // earliest registry position.
        let mut current: Option<usize> = None;
        for (i, task) in tasks.iter().enumerate() {
            if task.remaining_time > 0 && task.arrival_time <= time {
                match current {
                    Some(c) if tasks[c].remaining_time <= task.remaining_time => {}
                    _ => current = Some(i),
                }
            }
        }

        match current {
            Some(i) => {
                let task = &mut tasks[i];
                task.mark_started(time);
                task.remaining_time -= 1;
                timeline.push_run(time, task.pid);

                if task.remaining_time == 0 {
                    task.complete(time + 1);
                    timeline.push_finished(time + 1, task.pid);
                    completed += 1;
                    debug!(pid = task.pid, finish = time + 1, "srtf: task finished");
                }
            }
            None => timeline.push_idle(time),
        }

        time += 1;
    }

    timeline.push_all_finished(time);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
