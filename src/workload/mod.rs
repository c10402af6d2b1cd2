//! Workload file loading.
//!
//! A workload file lists one task per line as three whitespace-separated
//! non-negative integers:
//!
//! ```text
//! pid  arrival_time  burst_time
//! ```
//!
//! Parsing stops at the first malformed line (matching the original
//! `fscanf` loop, which returned whatever it had read so far) and at
//! [`MAX_TASKS`] tasks.  Both conditions are logged at `warn`; only an
//! unreadable file is an error.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::task::Task;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Maximum number of tasks loaded from one workload file.
///
/// Lines past this count are ignored with a warning.  The simulation core
/// itself has no capacity limit; this caps pathological inputs at the same
/// bound the original fixed-size array imposed.
pub const MAX_TASKS: usize = 100;

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parse one workload line into a task, or `None` if it is malformed.
///
/// A line is well-formed when it holds exactly three `u32` fields and the
/// burst time is ≥ 1 (a zero-burst task is unschedulable and the core
/// assumes `burst_time ≥ 1`).
fn parse_line(line: &str) -> Option<Task> {
    let mut fields = line.split_whitespace();
    let pid = fields.next()?.parse().ok()?;
    let arrival_time = fields.next()?.parse().ok()?;
    let burst_time: u32 = fields.next()?.parse().ok()?;
    if burst_time == 0 || fields.next().is_some() {
        return None;
    }
    Some(Task::new(pid, arrival_time, burst_time))
}

/// Read tasks from the workload file at `path`, in file order.
///
/// * Stops at the first malformed line; everything read so far is returned.
/// * Stops after [`MAX_TASKS`] tasks, warning about the truncation.
/// * An empty result (empty file, or malformed first line) is **not** an
///   error here — the caller decides whether zero tasks is fatal.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn load_from_file(path: &Path) -> Result<Vec<Task>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot open workload file: {}", path.display()))?;

    let mut tasks = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        match parse_line(line) {
            Some(task) => {
                debug!(
                    pid = task.pid,
                    arrival = task.arrival_time,
                    burst = task.burst_time,
                    "task loaded"
                );
                tasks.push(task);
            }
            None => {
                warn!(
                    line = lineno + 1,
                    "malformed workload line — stopping here with {} task(s)",
                    tasks.len()
                );
                break;
            }
        }
        if tasks.len() >= MAX_TASKS {
            warn!(
                "max task limit reached — only {} tasks loaded from {}",
                MAX_TASKS,
                path.display()
            );
            break;
        }
    }

    Ok(tasks)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper: write a workload string to a temp file and return it.
    fn workload_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_well_formed_file_in_order() {
        let f = workload_tempfile("1 0 5\n2 2 3\n3 4 1\n");
        let tasks = load_from_file(f.path()).unwrap();

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].pid, 1);
        assert_eq!(tasks[1].arrival_time, 2);
        assert_eq!(tasks[2].burst_time, 1);
        assert_eq!(tasks[0].remaining_time, tasks[0].burst_time);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let f = workload_tempfile("  7\t0   4\n");
        let tasks = load_from_file(f.path()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].pid, 7);
    }

    #[test]
    fn stops_at_first_malformed_line() {
        let f = workload_tempfile("1 0 5\ntwo 2 3\n3 4 1\n");
        let tasks = load_from_file(f.path()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].pid, 1);
    }

    #[test]
    fn zero_burst_counts_as_malformed() {
        let f = workload_tempfile("1 0 0\n2 0 3\n");
        let tasks = load_from_file(f.path()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn trailing_fields_count_as_malformed() {
        let f = workload_tempfile("1 0 5 99\n");
        let tasks = load_from_file(f.path()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn truncates_at_max_tasks() {
        let mut content = String::new();
        for i in 0..(MAX_TASKS + 10) {
            content.push_str(&format!("{} 0 1\n", i));
        }
        let f = workload_tempfile(&content);
        let tasks = load_from_file(f.path()).unwrap();
        assert_eq!(tasks.len(), MAX_TASKS);
    }

    #[test]
    fn empty_file_yields_zero_tasks_without_error() {
        let f = workload_tempfile("");
        let tasks = load_from_file(f.path()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_from_file(Path::new("/nonexistent/workload.txt")).unwrap_err();
        assert!(err.to_string().contains("cannot open workload file"));
    }
}
