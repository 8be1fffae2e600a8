//! Multi-policy simulation driver.
//!
//! Validates a process batch once, then runs each selected policy on its
//! own copy of the batch and pairs every schedule with its metrics.
//! Outcomes always come back in canonical policy order (FCFS, SJF,
//! Priority, Round-robin), whether the policies ran sequentially or in
//! parallel.

use std::num::NonZeroU32;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::error::{Error, Result};
use crate::models::{Process, Schedule};
use crate::scheduler::{Policy, ScheduleMetrics, Scheduler, DEFAULT_QUANTUM};
use crate::validation::validate_processes;

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Round-robin time quantum.
    pub quantum: NonZeroU32,
    /// Policies to run. Duplicates are ignored; order is canonical.
    pub policies: Vec<Policy>,
    /// Run each policy on its own thread.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            policies: Policy::ALL.to_vec(),
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration (all policies, quantum 3).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Restricts the run to the given policies.
    ///
    /// An empty list selects every policy.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        self.policies = policies.into_iter().collect();
        if self.policies.is_empty() {
            self.policies = Policy::ALL.to_vec();
        }
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Selected policies, deduplicated, in canonical order.
    pub fn selected_policies(&self) -> Vec<Policy> {
        let mut policies = self.policies.clone();
        policies.sort();
        policies.dedup();
        policies
    }
}

/// Result of running one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Trace and rows.
    pub schedule: Schedule,
    /// Aggregate figures; `None` when there were no processes.
    pub metrics: Option<ScheduleMetrics>,
}

impl Outcome {
    /// Pairs a schedule with its metrics.
    pub fn from_schedule(schedule: Schedule) -> Self {
        let metrics = ScheduleMetrics::calculate(&schedule);
        Self { schedule, metrics }
    }

    /// Policy title.
    pub fn title(&self) -> &str {
        &self.schedule.policy
    }
}

/// A validated process batch ready to be simulated.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::simulation::{Simulation, SimulationConfig};
///
/// let processes = vec![Process::new(1, 4, 0), Process::new(2, 3, 2)];
/// let simulation = Simulation::new(processes, SimulationConfig::new()).unwrap();
/// let outcomes = simulation.run();
/// assert_eq!(outcomes.len(), 4);
/// assert_eq!(outcomes[0].title(), "First-come, first-serve");
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    processes: Vec<Process>,
    config: SimulationConfig,
}

impl Simulation {
    /// Validates `processes` and prepares a simulation.
    pub fn new(processes: Vec<Process>, config: SimulationConfig) -> Result<Self> {
        validate_processes(&processes).map_err(Error::Validation)?;
        Ok(Self { processes, config })
    }

    /// The input batch.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// The configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs every selected policy.
    pub fn run(&self) -> Vec<Outcome> {
        let span = info_span!(
            "simulation",
            processes = self.processes.len(),
            quantum = self.config.quantum.get(),
            parallel = self.config.parallel
        );
        let _enter = span.enter();

        let schedulers: Vec<Box<dyn Scheduler>> = self
            .config
            .selected_policies()
            .into_iter()
            .map(|policy| policy.scheduler(self.config.quantum))
            .collect();

        if self.config.parallel {
            thread::scope(|scope| {
                let handles: Vec<_> = schedulers
                    .iter()
                    .map(|scheduler| scope.spawn(move || self.run_one(scheduler.as_ref())))
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                    })
                    .collect()
            })
        } else {
            schedulers
                .iter()
                .map(|scheduler| self.run_one(scheduler.as_ref()))
                .collect()
        }
    }

    fn run_one(&self, scheduler: &dyn Scheduler) -> Outcome {
        let outcome = Outcome::from_schedule(scheduler.schedule(&self.processes));
        match &outcome.metrics {
            Some(m) => info!(
                policy = scheduler.name(),
                average_wait = m.average_wait,
                average_turnaround = m.average_turnaround,
                throughput = m.throughput,
                "policy finished"
            ),
            None => info!(policy = scheduler.name(), "no processes to schedule"),
        }
        outcome
    }
}
