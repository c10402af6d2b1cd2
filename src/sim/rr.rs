/*
SPDX-License-Identifier: MIT
*/

//! Round Robin: preemptive, quantum-bounded time slicing over a FIFO ready
//! queue.
//!
//! The ready queue holds registry indices in a `VecDeque` (no fixed-capacity
//! circular buffer, no index arithmetic).  The "already queued" flag lives on
//! the task record itself and stays set while the task is running, so the
//! arrival scans below never admit the running task or a queued one twice.
//!
//! # Admission ordering
//! Tasks that arrive during a slice are admitted — in registry order —
//! **before** the preempted task is returned to the tail.  This is the
//! fairness rule that makes Scenario-style interleavings deterministic: a
//! task that became ready during your quantum gets the processor before you
//! run again.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use tracing::debug;

use super::timeline::Timeline;
use crate::task::Task;

/// Time-slice all tasks until completion, with the given quantum.
pub(super) fn run(tasks: &mut [Task], quantum: NonZeroU32, timeline: &mut Timeline) {
    let quantum = quantum.get();
    let mut time: u32 = 0;
    let mut remaining_tasks = tasks.len();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(tasks.len());

    // Admit everything that is ready at tick 0, in registry order.
    for (i, task) in tasks.iter_mut().enumerate() {
        if task.arrival_time == 0 {
            task.queued = true;
            queue.push_back(i);
        }
    }

    while remaining_tasks > 0 {
        // Nothing ready: idle one tick, then scan the whole registry for
        // tasks arriving at the new time.
        let Some(i) = queue.pop_front() else {
            timeline.push_idle(time);
            time += 1;
            for (j, task) in tasks.iter_mut().enumerate() {
                if task.arrival_time == time && !task.queued {
                    task.queued = true;
                    queue.push_back(j);
                }
            }
            continue;
        };

        tasks[i].mark_started(time);
        let runtime = tasks[i].remaining_time.min(quantum);
        debug!(pid = tasks[i].pid, time, runtime, "rr: slice start");

        for _ in 0..runtime {
            timeline.push_run(time, tasks[i].pid);
            time += 1;
        }
        tasks[i].remaining_time -= runtime;

        // Admit arrivals that occurred during the slice, in registry order,
        // before the just-run task is considered for re-queueing.
        for (j, task) in tasks.iter_mut().enumerate() {
            if task.arrival_time <= time && !task.queued && task.remaining_time > 0 {
                task.queued = true;
                queue.push_back(j);
            }
        }

        if tasks[i].remaining_time == 0 {
            tasks[i].queued = false;
            tasks[i].complete(time);
            timeline.push_finished(time, tasks[i].pid);
            remaining_tasks -= 1;
            debug!(pid = tasks[i].pid, finish = time, "rr: task finished");
        } else {
            queue.push_back(i);
        }
    }

    timeline.push_all_finished(time);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
