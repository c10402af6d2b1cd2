/*
SPDX-License-Identifier: MIT
*/

//! ticksim – discrete-time CPU scheduling simulator.
//!
//! Simulates a fixed task set on a single processor under one of three
//! classical policies (FCFS, Round Robin, SRTF), producing a tick-by-tick
//! timeline and aggregate timing statistics.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── task      – Task record + ordered TaskSet registry
//! ├── workload  – task-list file reader
//! ├── sim       – the three policy runners + timeline
//! ├── stats     – averages and CPU utilisation
//! └── report    – text rendering of timeline and statistics
//! ```

pub mod report;
pub mod sim;
pub mod stats;
pub mod task;
pub mod workload;
