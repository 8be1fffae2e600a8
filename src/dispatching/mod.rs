//! Ranking rules for ordering pending processes.
//!
//! Each scheduling policy orders its pending work by one integer key:
//! arrival time (FCFS, round-robin admission), remaining burst (SJF) or
//! priority value (Priority). Rules are pure: they never mutate a process.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{rules, RankingRule};
//! use u_cpu_schedule::models::Process;
//!
//! let mut processes = vec![Process::new(2, 5, 0), Process::new(1, 3, 4)];
//! processes.sort_by(|a, b| rules::ShortestRemaining.compare(a, b));
//! assert_eq!(processes[0].id, 1);
//! ```

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::Process;

/// Key returned by a ranking rule.
///
/// Lower keys rank first.
pub type RankKey = i64;

/// A rule that ranks processes by a single integer key.
///
/// # Key Convention
/// **Lower key = runs first.** Ties are broken by ascending process id,
/// which makes every ordering total and deterministic.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT").
    fn name(&self) -> &'static str;

    /// Ranking key of a process.
    fn key(&self, process: &Process) -> RankKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Total order: key ascending, then id ascending.
    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        self.key(a)
            .cmp(&self.key(b))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Whether `arriving` outranks `running` strictly on the key.
    ///
    /// Equal keys never preempt.
    fn preempts(&self, running: &Process, arriving: &Process) -> bool {
        self.key(arriving) < self.key(running)
    }
}
