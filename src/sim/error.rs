/*
SPDX-License-Identifier: MIT
*/

//! Structured error type for the simulation core.
//!
//! The core deliberately has a narrow failure surface: configuration errors
//! (unknown policy name, missing RR quantum) are rejected by the CLI before
//! the core runs, and input errors (unreadable file, malformed lines, zero
//! tasks) belong to the workload reader.  What remains is the one
//! precondition [`simulate`](super::simulate) checks itself.

use thiserror::Error;

/// Top-level error returned by [`simulate`](super::simulate).
#[derive(Debug, Error)]
pub enum SimulationError {
    /// `simulate()` was called with an empty task set.
    ///
    /// The caller is expected to reject an empty workload before invoking
    /// the core, but the precondition is cheap to state here too.
    #[error("no tasks provided — task set is empty")]
    NoTasks,
}
