//! Onboarding tutorial wizard
//!
//! A generic linear step flow, the two tutorial steps, the tutorial that
//! ties them together, and a line-prompt session that drives it.

pub mod flow;
pub mod session;
pub mod steps;
pub mod tutorial;

pub use flow::{Advance, FlowState, StepEntry, StepFlow};
pub use session::{TutorialOutcome, TutorialSession};
pub use steps::{BuildStep, TokenMode, TokenStep};
pub use tutorial::{Tutorial, TutorialStep};
