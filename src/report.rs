//! Text rendering of a finished simulation.
//!
//! Presentation only — the runners record [`TimelineEvent`]s and the
//! aggregator computes [`Statistics`]; this module turns both into the
//! line-per-tick report the original tool printed:
//!
//! ```text
//! <time 0> process 1 is running
//! <time 1> idle
//! <time 2> process 2 is running
//! <time 3> process 2 is finished...
//! <time 3> All processes finished...
//! ```

use std::fmt::Write;

use crate::sim::{SimulationResult, TimelineEvent};
use crate::stats::Statistics;

/// Render one timeline event as its report line (without trailing newline).
pub fn event_line(event: &TimelineEvent) -> String {
    match *event {
        TimelineEvent::Idle { time } => format!("<time {time}> idle"),
        TimelineEvent::Run { time, pid } => format!("<time {time}> process {pid} is running"),
        TimelineEvent::Finished { time, pid } => {
            format!("<time {time}> process {pid} is finished...")
        }
        TimelineEvent::AllFinished { time } => format!("<time {time}> All processes finished..."),
    }
}

/// Render the statistics block.
pub fn statistics_block(stats: &Statistics) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "================ Statistics ================");
    let _ = writeln!(out, "Average waiting time: {:.2}", stats.avg_waiting_time);
    let _ = writeln!(out, "Average response time: {:.2}", stats.avg_response_time);
    let _ = writeln!(
        out,
        "Average turnaround time: {:.2}",
        stats.avg_turnaround_time
    );
    let _ = writeln!(out, "Overall CPU usage: {:.2}%", stats.cpu_utilization);
    let _ = writeln!(out, "==========================================");
    out
}

/// Render the full report: every timeline line, then the statistics block.
pub fn render(result: &SimulationResult, stats: &Statistics) -> String {
    let mut out = String::new();
    for event in result.timeline.events() {
        out.push_str(&event_line(event));
        out.push('\n');
    }
    out.push_str(&statistics_block(stats));
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{simulate, Policy};
    use crate::stats::aggregate;
    use crate::task::{Task, TaskSet};

    #[test]
    fn event_lines_match_expected_format() {
        assert_eq!(event_line(&TimelineEvent::Idle { time: 3 }), "<time 3> idle");
        assert_eq!(
            event_line(&TimelineEvent::Run { time: 0, pid: 1 }),
            "<time 0> process 1 is running"
        );
        assert_eq!(
            event_line(&TimelineEvent::Finished { time: 5, pid: 1 }),
            "<time 5> process 1 is finished..."
        );
        assert_eq!(
            event_line(&TimelineEvent::AllFinished { time: 8 }),
            "<time 8> All processes finished..."
        );
    }

    #[test]
    fn full_report_for_single_task_with_idle_gap() {
        let tasks = TaskSet::new(vec![Task::new(1, 3, 2)]).unwrap();
        let result = simulate(tasks, Policy::Fcfs).unwrap();
        let stats = aggregate(&result.tasks, &result.timeline);
        let report = render(&result, &stats);

        let expected_timeline = "\
<time 0> idle
<time 1> idle
<time 2> idle
<time 3> process 1 is running
<time 4> process 1 is running
<time 5> process 1 is finished...
<time 5> All processes finished...
";
        assert!(report.starts_with(expected_timeline), "got:\n{report}");
        assert!(report.contains("Average waiting time: 0.00"));
        assert!(report.contains("Overall CPU usage: 40.00%"));
    }

    #[test]
    fn statistics_block_uses_two_decimal_places() {
        let stats = Statistics {
            avg_waiting_time: 1.5,
            avg_response_time: 1.5,
            avg_turnaround_time: 5.5,
            cpu_utilization: 100.0,
        };
        let block = statistics_block(&stats);
        assert!(block.contains("Average waiting time: 1.50"));
        assert!(block.contains("Average response time: 1.50"));
        assert!(block.contains("Average turnaround time: 5.50"));
        assert!(block.contains("Overall CPU usage: 100.00%"));
    }
}
