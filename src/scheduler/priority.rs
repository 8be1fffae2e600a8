//! Preemptive priority scheduler.

use super::preemptive::PreemptiveScheduler;
use crate::dispatching::rules::LowestPriorityValue;

/// Priority scheduling with preemption on arrival.
///
/// Lower priority values are more urgent. An arriving process preempts
/// only with a strictly lower value; held work is resumed in priority
/// order, ties by id.
pub type PriorityScheduler = PreemptiveScheduler<LowestPriorityValue>;

impl PreemptiveScheduler<LowestPriorityValue> {
    /// Creates a new priority scheduler.
    pub fn new() -> Self {
        Self::with_rule("Priority", LowestPriorityValue)
    }
}

impl Default for PreemptiveScheduler<LowestPriorityValue> {
    fn default() -> Self {
        Self::new()
    }
}
