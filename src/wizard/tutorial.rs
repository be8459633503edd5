//! Onboarding tutorial
//!
//! Two steps: provide a token, then pick a build tool to run the analysis.
//! The flow only knows step order; readiness comes from the step states.

use serde_json::json;
use std::fmt;

use super::flow::{Advance, FlowState, StepFlow};
use super::steps::{BuildStep, TokenStep};
use crate::audit::{Action, AuditEntry, AuditLogger, Source};
use crate::error::{DaystepError, DaystepResult};
use crate::models::TokenExpiry;
use crate::picker::LabelFormatter;

/// Steps of the tutorial, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TutorialStep {
    ProvideToken,
    RunAnalysis,
}

impl TutorialStep {
    pub const ALL: [TutorialStep; 2] = [TutorialStep::ProvideToken, TutorialStep::RunAnalysis];

    /// Label key of the step heading
    pub fn title_key(self) -> &'static str {
        match self {
            Self::ProvideToken => "onboarding.token.header",
            Self::RunAnalysis => "onboarding.analysis.header",
        }
    }
}

impl fmt::Display for TutorialStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProvideToken => write!(f, "provide_token"),
            Self::RunAnalysis => write!(f, "run_analysis"),
        }
    }
}

/// Tutorial state: the step flow plus each step's own state
#[derive(Debug)]
pub struct Tutorial {
    flow: StepFlow<TutorialStep>,
    token: TokenStep,
    build: BuildStep,
    audit: Option<AuditLogger>,
}

impl Tutorial {
    /// Create a tutorial for `project_key` with the first step open
    pub fn new(project_key: impl Into<String>, expiry: TokenExpiry) -> Self {
        let mut flow = StepFlow::new(TutorialStep::ALL);
        flow.start();
        Self {
            flow,
            token: TokenStep::new(project_key, expiry),
            build: BuildStep::new(),
            audit: None,
        }
    }

    /// Record transitions in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn flow(&self) -> &StepFlow<TutorialStep> {
        &self.flow
    }

    pub fn token_step(&self) -> &TokenStep {
        &self.token
    }

    pub fn token_step_mut(&mut self) -> &mut TokenStep {
        &mut self.token
    }

    pub fn build_step(&self) -> &BuildStep {
        &self.build
    }

    pub fn build_step_mut(&mut self) -> &mut BuildStep {
        &mut self.build
    }

    pub fn current_step(&self) -> Option<TutorialStep> {
        self.flow.current_id()
    }

    pub fn is_completed(&self) -> bool {
        self.flow.state() == FlowState::Completed
    }

    /// Completion predicate of `step`
    pub fn is_ready(&self, step: TutorialStep) -> bool {
        match step {
            TutorialStep::ProvideToken => self.token.is_ready(),
            TutorialStep::RunAnalysis => self.build.is_ready(),
        }
    }

    /// Whether the open step's continue action is enabled
    pub fn continue_enabled(&self) -> bool {
        match self.flow.current() {
            Some(index) => self
                .flow
                .step_id(index)
                .is_some_and(|step| self.flow.can_continue(index, self.is_ready(step))),
            None => false,
        }
    }

    /// Complete the open step
    ///
    /// Completing the last step also completes the tutorial. The audit entries
    /// are written after the flow has moved; if that write fails the error is
    /// returned and the transition stands.
    pub fn continue_step(&mut self) -> DaystepResult<Advance> {
        let index = self
            .flow
            .current()
            .ok_or_else(|| DaystepError::Validation("No step is open".into()))?;
        let step = self
            .flow
            .step_id(index)
            .ok_or_else(|| DaystepError::step_not_found(index.to_string()))?;

        let advance = self.flow.complete(index, self.is_ready(step))?;
        let mut entries = vec![(Action::CompleteStep, step, index)];

        match advance {
            Advance::Opened(next) => {
                if let Some(next_step) = self.flow.step_id(next) {
                    entries.push((Action::OpenStep, next_step, next));
                }
            }
            Advance::LastStep => {
                self.flow.finish()?;
                entries.push((Action::FinishFlow, step, index));
            }
        }

        self.record(&entries)?;
        Ok(advance)
    }

    /// Click on a step heading; only finished steps can be reopened
    ///
    /// Returns whether the step was reopened.
    pub fn click_heading(&mut self, step: TutorialStep) -> DaystepResult<bool> {
        let index = self
            .flow
            .index_of(step)
            .ok_or_else(|| DaystepError::step_not_found(step.to_string()))?;

        if !self.flow.is_finished(index) || self.flow.is_open(index) {
            return Ok(false);
        }

        self.flow.reopen(index)?;
        self.record(&[(Action::ReopenStep, step, index)])?;
        Ok(true)
    }

    /// Heading text of `step`
    pub fn step_title(&self, step: TutorialStep, formatter: &dyn LabelFormatter) -> String {
        formatter.format_label(step.title_key(), &[])
    }

    fn record(&self, transitions: &[(Action, TutorialStep, usize)]) -> DaystepResult<()> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };
        let entries: Vec<_> = transitions
            .iter()
            .map(|(action, step, index)| {
                AuditEntry::new(Source::Wizard, *action, step.to_string())
                    .with_detail(&json!({ "index": index }))
            })
            .collect();
        logger.log_batch(&entries)
    }
}
