//! Build step
//!
//! Picks the build tool, and the OS when the tool's instructions depend on it.

use crate::models::{BuildTool, OsFamily};

/// State of the build selection step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStep {
    tool: Option<BuildTool>,
    os: Option<OsFamily>,
}

impl BuildStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Option<BuildTool> {
        self.tool
    }

    pub fn os(&self) -> Option<OsFamily> {
        self.os
    }

    /// Choose a tool; the OS is kept only if the new tool still needs one
    pub fn select_tool(&mut self, tool: BuildTool) {
        self.tool = Some(tool);
        if !tool.requires_os() {
            self.os = None;
        }
    }

    pub fn select_os(&mut self, os: OsFamily) {
        self.os = Some(os);
    }

    /// Whether the OS selector should be shown
    pub fn needs_os(&self) -> bool {
        self.tool.is_some_and(BuildTool::requires_os)
    }

    /// Completion predicate of the step
    pub fn is_ready(&self) -> bool {
        match self.tool {
            None => false,
            Some(tool) if tool.requires_os() => self.os.is_some(),
            Some(_) => true,
        }
    }
}
