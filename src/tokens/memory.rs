//! In-memory token store

use chrono::NaiveDate;

use super::api::{issue_token, NewToken, TokenApi};
use crate::error::{DaystepError, DaystepResult};
use crate::models::{GeneratedToken, TokenId, UserToken};

/// Keeps tokens for the lifetime of the value; nothing touches disk
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    tokens: Vec<UserToken>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every token
    pub fn reset(&mut self) {
        self.tokens.clear();
    }
}

impl TokenApi for MemoryTokenStore {
    fn create_token(
        &mut self,
        request: NewToken,
        today: NaiveDate,
    ) -> DaystepResult<GeneratedToken> {
        let generated = issue_token(request, today, &self.tokens)?;
        self.tokens.push(generated.token.clone());
        Ok(generated)
    }

    fn delete_token(&mut self, id: TokenId) -> DaystepResult<UserToken> {
        let index = self
            .tokens
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DaystepError::token_not_found(id.to_string()))?;
        Ok(self.tokens.remove(index))
    }

    fn list_tokens(&self) -> DaystepResult<Vec<UserToken>> {
        Ok(self.tokens.clone())
    }
}
