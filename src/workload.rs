//! Reproducible random workloads.
//!
//! Generates process batches from a seed, for exploring policies without
//! writing an input file. The same seed and settings always produce the
//! same batch.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Seeded generator of process batches.
///
/// Arrivals start at 0 and advance by a random gap per process, so the
/// output is already arrival-ordered. Ids run from 1 to `count`.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::workload::WorkloadGenerator;
///
/// let batch = WorkloadGenerator::seeded(7).generate(5);
/// assert_eq!(batch.len(), 5);
/// assert_eq!(batch, WorkloadGenerator::seeded(7).generate(5));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    rng: StdRng,
    burst: RangeInclusive<i64>,
    arrival_gap: RangeInclusive<i64>,
    priority: RangeInclusive<i64>,
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges: burst 1..=10, arrival gap
    /// 0..=4, priority 0..=4.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            burst: 1..=10,
            arrival_gap: 0..=4,
            priority: 0..=4,
        }
    }

    /// Sets the burst range (clamped to non-negative values).
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst = ordered(min.max(0), max.max(0));
        self
    }

    /// Sets the range of gaps between consecutive arrivals.
    pub fn with_arrival_gap(mut self, min: i64, max: i64) -> Self {
        self.arrival_gap = ordered(min.max(0), max.max(0));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.priority = ordered(min, max);
        self
    }

    /// Generates `count` processes.
    pub fn generate(&mut self, count: usize) -> Vec<Process> {
        let mut arrival = 0;
        let mut processes = Vec::with_capacity(count);
        for (index, id) in (1..=count as i64).enumerate() {
            if index > 0 {
                arrival += self.rng.random_range(self.arrival_gap.clone());
            }
            let burst = self.rng.random_range(self.burst.clone());
            let priority = self.rng.random_range(self.priority.clone());
            processes.push(Process::new(id, burst, arrival).with_priority(priority));
        }
        processes
    }
}

fn ordered(a: i64, b: i64) -> RangeInclusive<i64> {
    a.min(b)..=a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Policy, ScheduleMetrics, DEFAULT_QUANTUM};
    use crate::validation::validate_processes;

    #[test]
    fn test_generate_is_reproducible() {
        let a = WorkloadGenerator::seeded(42).generate(20);
        let b = WorkloadGenerator::seeded(42).generate(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_respects_ranges() {
        let batch = WorkloadGenerator::seeded(1)
            .with_burst_range(2, 5)
            .with_arrival_gap(1, 1)
            .with_priority_range(3, 0)
            .generate(50);

        assert!(validate_processes(&batch).is_ok());
        for (index, p) in batch.iter().enumerate() {
            assert_eq!(p.id, index as i64 + 1);
            assert_eq!(p.arrival, index as i64);
            assert!((2..=5).contains(&p.burst));
            assert!((0..=3).contains(&p.priority));
        }
    }

    #[test]
    fn test_generate_zero() {
        assert!(WorkloadGenerator::seeded(0).generate(0).is_empty());
    }

    #[test]
    fn test_random_workloads_satisfy_schedule_invariants() {
        let quantum = DEFAULT_QUANTUM;
        for seed in 0..25 {
            let batch = WorkloadGenerator::seeded(seed)
                .with_burst_range(0, 12)
                .with_arrival_gap(0, 6)
                .generate(12);
            let total_burst: i64 = batch.iter().map(|p| p.burst).sum();

            for policy in Policy::ALL {
                let schedule = policy.scheduler(quantum).schedule(&batch);
                assert_eq!(schedule.process_count(), batch.len(), "{policy:?} seed {seed}");
                assert!(schedule.is_well_formed(), "{policy:?} seed {seed}");
                assert_eq!(schedule.busy_time(), total_burst);

                for row in &schedule.rows {
                    assert!(row.wait >= 0, "{policy:?} seed {seed}");
                    assert_eq!(row.turnaround, row.burst + row.wait);
                    assert_eq!(row.completion, row.arrival + row.wait + row.burst);
                }
                for slice in &schedule.slices {
                    let process = batch.iter().find(|p| p.id == slice.process_id).unwrap();
                    assert!(slice.start >= process.arrival);
                }

                let metrics = ScheduleMetrics::calculate(&schedule).unwrap();
                assert!(metrics.throughput.is_finite());
                assert!(metrics.cpu_utilization <= 1.0 + 1e-10);
            }
        }
    }

    #[test]
    fn test_random_fcfs_runs_in_arrival_order() {
        let quantum = DEFAULT_QUANTUM;
        for seed in 0..10 {
            let batch = WorkloadGenerator::seeded(seed).generate(15);
            let schedule = Policy::Fcfs.scheduler(quantum).schedule(&batch);
            let expected: Vec<i64> = batch.iter().map(|p| p.id).collect();
            let completed: Vec<i64> = schedule.rows.iter().map(|r| r.id).collect();
            assert_eq!(completed, expected);
            assert_eq!(schedule.slices.len(), batch.len());
        }
    }
}
