/*
SPDX-License-Identifier: MIT
*/

//! Core task data structures for the ticksim simulator.
//!
//! A [`Task`] is one schedulable unit; a [`TaskSet`] is the ordered registry
//! the policy runners operate on:
//!
//! ```text
//! workload file ──(reader)──► TaskSet ──(policy runner)──► SimulationResult
//!                              ↑ input                      ↑ output
//!                              mutable working copies        finished tasks + timeline
//! ```
//!
//! # Ownership model
//! The `TaskSet` is **owned** by one policy runner for the duration of one
//! simulation run.  The caller moves it into [`simulate`]; the compiler
//! guarantees no other component observes the tasks while their scheduling
//! metadata is being mutated.  The finished tasks come back inside the
//! immutable result.
//!
//! [`simulate`]: crate::sim::simulate

use thiserror::Error;

// ── Task ──────────────────────────────────────────────────────────────────────

/// One schedulable unit.
///
/// Mirrors the fields a classical scheduling exercise tracks per process,
/// with two improvements over the usual C layout:
///
/// * `start_time` / `finish_time` are `Option<u32>` instead of `-1` / `0`
///   sentinels — "finished but never started" is unrepresentable.
/// * All tick values are `u32`; `remaining_time` can never go negative.
///
/// # Lifecycle
/// Created by [`Task::new`] (or the workload reader), collected into a
/// [`TaskSet`], mutated in place by exactly one policy runner, then returned
/// to the caller fully finished: `remaining_time == 0`, `finish_time` set,
/// and the three derived metrics filled in by [`Task::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    // ── Identity / fixed parameters ───────────────────────────────────────────
    /// Process identifier, unique within a `TaskSet`.
    pub pid: u32,

    /// Tick at which the task becomes eligible to run.
    pub arrival_time: u32,

    /// Total CPU ticks the task needs in order to finish.  Always ≥ 1 for
    /// tasks produced by the workload reader.
    pub burst_time: u32,

    // ── Scheduling state (mutated by the policy runners) ──────────────────────
    /// Burst ticks not yet consumed.  Starts at `burst_time`, monotonically
    /// non-increasing, reaches 0 exactly once.
    pub remaining_time: u32,

    /// Tick of the task's first execution.  `None` until it first runs; set
    /// at most once.
    pub start_time: Option<u32>,

    /// Tick immediately after the task's last execution tick.  Set exactly
    /// once, when `remaining_time` reaches 0.
    pub finish_time: Option<u32>,

    // ── Derived metrics (filled in by `complete()`) ───────────────────────────
    /// `turnaround_time - burst_time`.
    pub waiting_time: u32,

    /// `start_time - arrival_time`.
    pub response_time: u32,

    /// `finish_time - arrival_time`.
    pub turnaround_time: u32,

    /// Round-Robin bookkeeping: is this task currently sitting in the ready
    /// queue?  Prevents duplicate admission.  Scoped to one simulation run;
    /// meaningless outside the RR runner.
    pub(crate) queued: bool,
}

impl Task {
    /// Create a fresh, not-yet-scheduled task.
    pub fn new(pid: u32, arrival_time: u32, burst_time: u32) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            finish_time: None,
            waiting_time: 0,
            response_time: 0,
            turnaround_time: 0,
            queued: false,
        }
    }

    /// Record the first execution tick.  No-op if already started.
    pub(crate) fn mark_started(&mut self, time: u32) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Mark the task finished at `finish` and derive the three metrics:
    ///
    /// * `turnaround_time = finish_time - arrival_time`
    /// * `waiting_time    = turnaround_time - burst_time`
    /// * `response_time   = start_time - arrival_time`
    ///
    /// # Panics
    /// Panics in debug builds if the task still has remaining work or was
    /// never started — both would be logic defects in a policy runner, not
    /// runtime conditions.
    pub(crate) fn complete(&mut self, finish: u32) {
        debug_assert_eq!(
            self.remaining_time, 0,
            "complete() called on pid {} with {} ticks remaining",
            self.pid, self.remaining_time
        );
        let start = self.start_time.unwrap_or(self.arrival_time);
        debug_assert!(self.start_time.is_some(), "complete() before first run");

        self.finish_time = Some(finish);
        self.turnaround_time = finish - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        self.response_time = start - self.arrival_time;
    }

    /// Returns `true` once the task has consumed its whole burst.
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}

// ── TaskSet (registry) ────────────────────────────────────────────────────────

/// Error returned by [`TaskSet::new`] when two tasks share a pid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duplicate pid {pid} in task set — pids must be unique")]
pub struct DuplicatePid {
    /// The offending pid.
    pub pid: u32,
}

/// Ordered registry of tasks for one simulation run.
///
/// The sequence order is the input order and is load-bearing: it is the FCFS
/// execution order, the RR initial-admission and arrival-scan order, and the
/// SRTF tie-break order.  Tasks are never added or removed after
/// construction, only mutated by the owning policy runner.
#[derive(Debug, Clone)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    /// Build a registry from `tasks`, preserving their order.
    ///
    /// # Errors
    /// Returns [`DuplicatePid`] if any two tasks carry the same pid.
    pub fn new(tasks: Vec<Task>) -> Result<Self, DuplicatePid> {
        for (i, task) in tasks.iter().enumerate() {
            if tasks[..i].iter().any(|t| t.pid == task.pid) {
                return Err(DuplicatePid { pid: task.pid });
            }
        }
        Ok(Self { tasks })
    }

    /// Number of tasks in the registry.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the registry holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Borrow the tasks in registry order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consume the registry, yielding the tasks in registry order.
    pub(crate) fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
