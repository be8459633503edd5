//! Build tool selection for the analysis step

use serde::{Deserialize, Serialize};
use std::fmt;

/// Build technology of the analysed project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildTool {
    Maven,
    Gradle,
    DotNetCore,
    DotNetFramework,
    CFamily,
    Other,
}

impl BuildTool {
    pub const ALL: [BuildTool; 6] = [
        BuildTool::Maven,
        BuildTool::Gradle,
        BuildTool::DotNetCore,
        BuildTool::DotNetFramework,
        BuildTool::CFamily,
        BuildTool::Other,
    ];

    /// Whether the instructions depend on the operating system
    pub fn requires_os(self) -> bool {
        matches!(self, Self::CFamily | Self::Other)
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maven => write!(f, "Maven"),
            Self::Gradle => write!(f, "Gradle"),
            Self::DotNetCore => write!(f, ".NET Core"),
            Self::DotNetFramework => write!(f, ".NET Framework"),
            Self::CFamily => write!(f, "C, C++ or ObjC"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Operating system the scanner runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Linux,
    Windows,
    MacOs,
}

impl OsFamily {
    pub const ALL: [OsFamily; 3] = [OsFamily::Linux, OsFamily::Windows, OsFamily::MacOs];
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "Linux"),
            Self::Windows => write!(f, "Windows"),
            Self::MacOs => write!(f, "macOS"),
        }
    }
}
