//! Linear step flow
//!
//! A fixed, ordered list of steps with at most one open at a time. Which step
//! is open lives in a single `FlowState`, so two open steps cannot be
//! represented. Whether a step may be completed is decided by the caller and
//! passed in as `ready`.

use std::fmt::Debug;

use crate::error::{DaystepError, DaystepResult};

/// Where the flow is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// No step open
    Idle,
    /// Step at this index is open
    StepOpen(usize),
    /// The caller declared the flow done
    Completed,
}

/// Result of completing a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The following step was opened
    Opened(usize),
    /// The completed step is the last one; it stays open
    LastStep,
}

/// One step and its finished flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEntry<S> {
    pub id: S,
    pub finished: bool,
}

/// Ordered steps with a single open step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFlow<S> {
    steps: Vec<StepEntry<S>>,
    state: FlowState,
}

impl<S: Copy + Eq + Debug> StepFlow<S> {
    /// Create a flow with every step unfinished and nothing open
    pub fn new(ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            steps: ids
                .into_iter()
                .map(|id| StepEntry {
                    id,
                    finished: false,
                })
                .collect(),
            state: FlowState::Idle,
        }
    }

    /// Open the first step
    pub fn start(&mut self) {
        if !self.steps.is_empty() {
            self.state = FlowState::StepOpen(0);
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Index of the open step
    pub fn current(&self) -> Option<usize> {
        match self.state {
            FlowState::StepOpen(index) => Some(index),
            FlowState::Idle | FlowState::Completed => None,
        }
    }

    /// Id of the open step
    pub fn current_id(&self) -> Option<S> {
        self.current().map(|index| self.steps[index].id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepEntry<S>] {
        &self.steps
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.state == FlowState::StepOpen(index)
    }

    pub fn is_finished(&self, index: usize) -> bool {
        self.steps.get(index).is_some_and(|s| s.finished)
    }

    pub fn is_completed(&self) -> bool {
        self.state == FlowState::Completed
    }

    pub fn step_id(&self, index: usize) -> Option<S> {
        self.steps.get(index).map(|s| s.id)
    }

    pub fn index_of(&self, id: S) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    fn check_index(&self, index: usize) -> DaystepResult<()> {
        if index < self.steps.len() {
            Ok(())
        } else {
            Err(DaystepError::step_not_found(index.to_string()))
        }
    }

    /// Open step `index`, closing whichever step was open
    pub fn open(&mut self, index: usize) -> DaystepResult<()> {
        self.check_index(index)?;
        self.state = FlowState::StepOpen(index);
        Ok(())
    }

    /// Whether the continue action of step `index` is enabled
    pub fn can_continue(&self, index: usize, ready: bool) -> bool {
        ready && self.is_open(index)
    }

    /// Mark step `index` finished and move on
    ///
    /// Fails when the step is not open or `ready` is false. Finishing the last
    /// step leaves it open; moving to `Completed` is up to the caller.
    pub fn complete(&mut self, index: usize, ready: bool) -> DaystepResult<Advance> {
        self.check_index(index)?;
        if !self.is_open(index) {
            return Err(DaystepError::Validation(format!(
                "Step {:?} is not open",
                self.steps[index].id
            )));
        }
        if !ready {
            return Err(DaystepError::Validation(format!(
                "Step {:?} is not ready to continue",
                self.steps[index].id
            )));
        }

        self.steps[index].finished = true;

        let next = index + 1;
        if next < self.steps.len() {
            self.state = FlowState::StepOpen(next);
            Ok(Advance::Opened(next))
        } else {
            Ok(Advance::LastStep)
        }
    }

    /// Go back to a finished step
    ///
    /// Later steps keep their finished flags.
    pub fn reopen(&mut self, index: usize) -> DaystepResult<()> {
        self.check_index(index)?;
        if !self.steps[index].finished {
            return Err(DaystepError::Validation(format!(
                "Step {:?} has not been finished yet",
                self.steps[index].id
            )));
        }
        self.state = FlowState::StepOpen(index);
        Ok(())
    }

    /// Close the flow; every step must be finished
    pub fn finish(&mut self) -> DaystepResult<()> {
        if let Some(pending) = self.steps.iter().find(|s| !s.finished) {
            return Err(DaystepError::Validation(format!(
                "Step {:?} has not been finished yet",
                pending.id
            )));
        }
        self.state = FlowState::Completed;
        Ok(())
    }
}
