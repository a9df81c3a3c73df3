//! Application services (use cases).
//!
//! These services hold the monitoring logic and coordinate the outbound
//! ports. None of them know which concrete feed or transport is wired in.

pub mod aggregator;
pub mod cycle;
pub mod dispatcher;
pub mod evaluator;
pub mod gate;
pub mod sampler;
pub mod scheduler;
