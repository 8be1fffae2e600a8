//! First-come, first-served scheduler.
//!
//! Non-preemptive: processes run to completion in arrival order, one
//! slice each.

use super::cpu::Cpu;
use super::{arrival_ordered, Scheduler};
use crate::models::{Process, Schedule};

/// First-come, first-served scheduler.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{FcfsScheduler, Scheduler};
///
/// let processes = vec![Process::new(1, 4, 0), Process::new(2, 3, 2)];
/// let schedule = FcfsScheduler::new().schedule(&processes);
/// assert_eq!(schedule.completion_of(2), Some(7));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new FCFS scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut cpu = Cpu::new(self.name());
        for mut process in arrival_ordered(processes) {
            let burst = process.remaining();
            cpu.run(&mut process, burst);
            cpu.finish(&process);
        }
        cpu.into_schedule()
    }
}
