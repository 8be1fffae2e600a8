//! Schedule quality metrics.
//!
//! Computes the aggregate figures reported under every schedule table.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Wait | sum(wait) / N |
//! | Average Turnaround | sum(turnaround) / N |
//! | Throughput | N / makespan |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / makespan |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Aggregate performance figures of one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of finalized processes (N).
    pub process_count: usize,
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Processes completed per time unit, up to the latest completion.
    pub throughput: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a finished schedule.
    ///
    /// Returns `None` when the schedule has no rows, instead of dividing
    /// by zero. A schedule whose makespan is zero (only zero-burst work at
    /// t=0) reports zero throughput and utilization.
    pub fn calculate(schedule: &Schedule) -> Option<Self> {
        if schedule.rows.is_empty() {
            return None;
        }

        let count = schedule.rows.len() as f64;
        let total_wait: f64 = schedule.rows.iter().map(|r| r.wait as f64).sum();
        let total_turnaround: f64 = schedule.rows.iter().map(|r| r.turnaround as f64).sum();
        let makespan = schedule.makespan();

        let (throughput, cpu_utilization) = if makespan > 0 {
            (
                count / makespan as f64,
                schedule.busy_time() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Some(Self {
            process_count: schedule.rows.len(),
            average_wait: total_wait / count,
            average_turnaround: total_turnaround / count,
            throughput,
            makespan,
            cpu_utilization,
        })
    }
}
