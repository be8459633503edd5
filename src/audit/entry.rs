//! Audit entry data structures
//!
//! One entry per state transition worth keeping: date selections and resets,
//! wizard step changes, and token creation/deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Component that produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Picker,
    Wizard,
    Token,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Picker => write!(f, "PICKER"),
            Source::Wizard => write!(f, "WIZARD"),
            Source::Token => write!(f, "TOKEN"),
        }
    }
}

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Select,
    Reset,
    Navigate,
    OpenStep,
    CompleteStep,
    ReopenStep,
    FinishFlow,
    CreateToken,
    DeleteToken,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Select => "select",
            Action::Reset => "reset",
            Action::Navigate => "navigate",
            Action::OpenStep => "open_step",
            Action::CompleteStep => "complete_step",
            Action::ReopenStep => "reopen_step",
            Action::FinishFlow => "finish_flow",
            Action::CreateToken => "create_token",
            Action::DeleteToken => "delete_token",
        };
        write!(f, "{}", name)
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the transition happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub source: Source,

    pub action: Action,

    /// What the transition applied to (a date, a step name, a token id)
    pub subject: String,

    /// Extra structured context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry timestamped now
    pub fn new(source: Source, action: Action, subject: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            source,
            action,
            subject: subject.into(),
            detail: None,
        }
    }

    /// Attach structured detail
    pub fn with_detail<T: Serialize>(mut self, detail: &T) -> Self {
        self.detail = serde_json::to_value(detail).ok();
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.source,
            self.action,
            self.subject
        );

        if let Some(detail) = &self.detail {
            output.push_str(&format!("\n  {}", detail));
        }

        output
    }
}
