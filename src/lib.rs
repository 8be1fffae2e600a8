//! Single-CPU process scheduling simulator.
//!
//! Runs a finite, fully-known batch of processes through the classical
//! scheduling policies and reports each policy's Gantt trace, per-process
//! timing rows and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Schedule`, `TimeSlice`, `ScheduleRow`
//! - **`dispatching`**: Ranking rules that order pending work (arrival,
//!   remaining burst, priority value)
//! - **`scheduler`**: FCFS, preemptive SJF, preemptive Priority and
//!   Round-robin, plus `ScheduleMetrics`
//! - **`simulation`**: Validates a batch once and runs the selected policies
//! - **`validation`**: Input integrity checks (duplicate IDs, negative fields)
//! - **`loader`**: CSV process files
//! - **`report`**: Text and JSON rendering
//! - **`workload`**: Seeded random process batches
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::scheduler::{Scheduler, SjfScheduler};
//!
//! let processes = vec![
//!     Process::new(1, 8, 0),
//!     Process::new(2, 4, 1),
//!     Process::new(3, 9, 2),
//!     Process::new(4, 5, 3),
//! ];
//! let schedule = SjfScheduler::new().schedule(&processes);
//! assert_eq!(schedule.dispatch_order(), vec![1, 2, 4, 3]);
//! assert_eq!(schedule.slices.len(), 5);
//! assert_eq!(schedule.makespan(), 26);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
