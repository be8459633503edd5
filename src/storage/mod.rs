//! Storage layer for daystep
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod tokens;

pub use file_io::{read_json, write_json_atomic};
pub use tokens::TokenRepository;

use crate::config::paths::DaystepPaths;
use crate::error::DaystepError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: DaystepPaths,
    pub tokens: TokenRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DaystepPaths) -> Result<Self, DaystepError> {
        paths.ensure_directories()?;

        Ok(Self {
            tokens: TokenRepository::new(paths.tokens_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DaystepPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), DaystepError> {
        self.tokens.load()?;
        Ok(())
    }
}
