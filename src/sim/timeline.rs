//! Tick-by-tick execution timeline.
//!
//! The policy runners record one event per tick ([`TimelineEvent::Idle`] or
//! [`TimelineEvent::Run`]) plus completion markers.  Ticks are contiguous
//! from 0, so the makespan is simply the number of tick events recorded;
//! busy and idle ticks are counted as events are pushed so CPU utilisation
//! can be measured instead of assumed.

// ── TimelineEvent ─────────────────────────────────────────────────────────────

/// One entry in the simulation timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    /// The processor was idle for the tick starting at `time`.
    Idle { time: u32 },

    /// Task `pid` occupied the processor for the tick starting at `time`.
    Run { time: u32, pid: u32 },

    /// Task `pid` completed; `time` is its finish time (the tick immediately
    /// after its last execution tick).  Not a tick itself.
    Finished { time: u32, pid: u32 },

    /// Every task has completed; `time` is the makespan.  Recorded exactly
    /// once, as the final event.
    AllFinished { time: u32 },
}

// ── Timeline ──────────────────────────────────────────────────────────────────

/// Ordered event log for one simulation run.
///
/// Built incrementally by a policy runner, then frozen inside the
/// [`SimulationResult`](crate::sim::SimulationResult).
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
    busy_ticks: u32,
    idle_ticks: u32,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an idle tick at `time`.
    pub(crate) fn push_idle(&mut self, time: u32) {
        self.events.push(TimelineEvent::Idle { time });
        self.idle_ticks += 1;
    }

    /// Record one running tick of `pid` at `time`.
    pub(crate) fn push_run(&mut self, time: u32, pid: u32) {
        self.events.push(TimelineEvent::Run { time, pid });
        self.busy_ticks += 1;
    }

    /// Record the completion of `pid` at finish time `time`.
    pub(crate) fn push_finished(&mut self, time: u32, pid: u32) {
        self.events.push(TimelineEvent::Finished { time, pid });
    }

    /// Record the end-of-simulation marker.
    pub(crate) fn push_all_finished(&mut self, time: u32) {
        self.events.push(TimelineEvent::AllFinished { time });
    }

    /// All events in recording order.
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Ticks spent running a task.
    pub fn busy_ticks(&self) -> u32 {
        self.busy_ticks
    }

    /// Ticks spent with the processor idle.
    pub fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    /// Total simulated ticks from 0 to completion of the last task.
    pub fn makespan(&self) -> u32 {
        self.busy_ticks + self.idle_ticks
    }

    /// The pid running during the tick starting at `time`, or `None` if the
    /// processor was idle then (or the tick is past the makespan).
    ///
    /// Linear scan — used by tests and small reports, not by the runners.
    pub fn running_at(&self, time: u32) -> Option<u32> {
        self.events.iter().find_map(|e| match *e {
            TimelineEvent::Run { time: t, pid } if t == time => Some(pid),
            _ => None,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makespan_counts_busy_and_idle_ticks() {
        let mut tl = Timeline::new();
        tl.push_idle(0);
        tl.push_run(1, 42);
        tl.push_run(2, 42);
        tl.push_finished(3, 42);
        tl.push_all_finished(3);

        assert_eq!(tl.busy_ticks(), 2);
        assert_eq!(tl.idle_ticks(), 1);
        assert_eq!(tl.makespan(), 3);
    }

    #[test]
    fn completion_markers_are_not_ticks() {
        let mut tl = Timeline::new();
        tl.push_run(0, 1);
        tl.push_finished(1, 1);
        tl.push_all_finished(1);
        assert_eq!(tl.makespan(), 1);
        assert_eq!(tl.events().len(), 3);
    }

    #[test]
    fn running_at_finds_the_occupying_pid() {
        let mut tl = Timeline::new();
        tl.push_run(0, 1);
        tl.push_idle(1);
        tl.push_run(2, 2);

        assert_eq!(tl.running_at(0), Some(1));
        assert_eq!(tl.running_at(1), None);
        assert_eq!(tl.running_at(2), Some(2));
        assert_eq!(tl.running_at(99), None);
    }
}
