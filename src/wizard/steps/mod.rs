//! Tutorial wizard steps
//!
//! Per-step state whose completion predicates gate the flow.

pub mod build;
pub mod token;

pub use build::BuildStep;
pub use token::{TokenMode, TokenStep, INVALID_FORMAT_KEY};
