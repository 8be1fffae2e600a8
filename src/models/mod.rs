//! Scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the
//! process being scheduled and the schedule a policy produces.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Process` | One unit of CPU work (id, burst, arrival, priority) |
//! | `TimeSlice` | One contiguous CPU-occupancy interval |
//! | `ScheduleRow` | Finalized timing figures for one process |
//! | `Schedule` | Gantt trace + rows for one policy run |

mod process;
mod schedule;

pub use process::{Process, ProcessId};
pub use schedule::{Schedule, ScheduleRow, TimeSlice};
