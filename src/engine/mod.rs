//! Navigation Engine - diffing, sequencing and orchestration.
//!
//! - Navigator: the show/pop/back orchestrator over tree, tracker and host
//! - StepQueue: strict one-at-a-time runner for deferred transition actions

mod navigator;
mod sequencer;

pub use navigator::*;
