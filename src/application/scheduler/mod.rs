//! Cycle scheduling.
//!
//! The [`Scheduler`] is a synchronous state machine: callers feed it the
//! current instant through [`Scheduler::poll`] and report completion with
//! [`Scheduler::complete`]. The async [`driver`] runs it on a tokio task at
//! a fixed resolution and hands each tick to a [`CycleHandler`].
//!
//! # States
//!
//! ```text
//! Idle --start--> Running <--activation--> Dormant
//!                    |                        |
//!                    +---------stop-----------+--> Stopped
//! ```
//!
//! `Dormant` only occurs with an activation schedule: outside its windows
//! the whole service sleeps, and both cadences are re-anchored on resume.

mod cadence;
pub mod driver;
mod machine;

pub use cadence::Cadence;
pub use driver::{spawn, SchedulerHandle};
pub use machine::{CycleHandler, Scheduler, SchedulerConfig, SchedulerState, Tick};
