//! Token repository for JSON storage
//!
//! Manages loading and saving token metadata to tokens.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DaystepError;
use crate::models::{TokenId, UserToken};

use super::file_io::{read_json, write_json_atomic};

/// Serializable token data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TokenData {
    tokens: Vec<UserToken>,
}

/// Repository for token persistence
pub struct TokenRepository {
    path: PathBuf,
    data: RwLock<HashMap<TokenId, UserToken>>,
}

impl TokenRepository {
    /// Create a new token repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load tokens from disk
    pub fn load(&self) -> Result<(), DaystepError> {
        let file_data: TokenData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            DaystepError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for token in file_data.tokens {
            data.insert(token.id, token);
        }

        Ok(())
    }

    /// Save tokens to disk
    pub fn save(&self) -> Result<(), DaystepError> {
        let tokens = self.get_all()?;
        write_json_atomic(&self.path, &TokenData { tokens })
    }

    /// Get all tokens, oldest first
    pub fn get_all(&self) -> Result<Vec<UserToken>, DaystepError> {
        let data = self.data.read().map_err(|e| {
            DaystepError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut tokens: Vec<_> = data.values().cloned().collect();
        tokens.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(tokens)
    }

    /// Get a token by exact name
    pub fn get_by_name(&self, name: &str) -> Result<Option<UserToken>, DaystepError> {
        let data = self.data.read().map_err(|e| {
            DaystepError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|t| t.name == name).cloned())
    }

    /// Insert or replace a token
    pub fn upsert(&self, token: UserToken) -> Result<(), DaystepError> {
        let mut data = self.data.write().map_err(|e| {
            DaystepError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(token.id, token);
        Ok(())
    }

    /// Remove a token, returning it if it existed
    pub fn delete(&self, id: TokenId) -> Result<Option<UserToken>, DaystepError> {
        let mut data = self.data.write().map_err(|e| {
            DaystepError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id))
    }

    /// Count tokens
    pub fn count(&self) -> Result<usize, DaystepError> {
        let data = self.data.read().map_err(|e| {
            DaystepError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
