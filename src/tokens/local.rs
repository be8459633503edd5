//! File-backed token service
//!
//! Implements the token collaborator on top of the token repository, saving
//! after every change and recording creations/deletions in the audit log.

use chrono::NaiveDate;
use serde_json::json;

use super::api::{issue_token, NewToken, TokenApi};
use crate::audit::{Action, AuditEntry, AuditLogger, Source};
use crate::error::{DaystepError, DaystepResult};
use crate::models::{GeneratedToken, TokenId, UserToken};
use crate::storage::Storage;

/// Token collaborator backed by `data/tokens.json`
pub struct LocalTokenService<'a> {
    storage: &'a Storage,
    audit: Option<AuditLogger>,
}

impl<'a> LocalTokenService<'a> {
    /// Create a new token service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            audit: None,
        }
    }

    /// Record changes in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Find a token by full id, short id (`tok-xxxxxxxx`) or exact name
    ///
    /// Ids win over names.
    pub fn find(&self, identifier: &str) -> DaystepResult<UserToken> {
        let by_id = self
            .storage
            .tokens
            .get_all()?
            .into_iter()
            .find(|t| t.id.matches(identifier));
        if let Some(token) = by_id {
            return Ok(token);
        }

        self.storage
            .tokens
            .get_by_name(identifier)?
            .ok_or_else(|| DaystepError::token_not_found(identifier))
    }

    fn record(&self, entry: AuditEntry) -> DaystepResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

impl TokenApi for LocalTokenService<'_> {
    fn create_token(
        &mut self,
        request: NewToken,
        today: NaiveDate,
    ) -> DaystepResult<GeneratedToken> {
        let existing = self.storage.tokens.get_all()?;
        let generated = issue_token(request, today, &existing)?;

        self.storage.tokens.upsert(generated.token.clone())?;
        self.storage.tokens.save()?;

        self.record(
            AuditEntry::new(
                Source::Token,
                Action::CreateToken,
                generated.token.id.to_string(),
            )
            .with_detail(&json!({
                "name": generated.token.name,
                "expires_at": generated.token.expires_at,
            })),
        )?;

        Ok(generated)
    }

    fn delete_token(&mut self, id: TokenId) -> DaystepResult<UserToken> {
        let removed = self
            .storage
            .tokens
            .delete(id)?
            .ok_or_else(|| DaystepError::token_not_found(id.to_string()))?;
        self.storage.tokens.save()?;

        self.record(
            AuditEntry::new(Source::Token, Action::DeleteToken, id.to_string())
                .with_detail(&json!({ "name": removed.name })),
        )?;

        Ok(removed)
    }

    fn list_tokens(&self) -> DaystepResult<Vec<UserToken>> {
        self.storage.tokens.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::DaystepPaths;
    use crate::models::TokenExpiry;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaystepPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 1, 17).unwrap()
    }

    #[test]
    fn test_create_persists_and_audits() {
        let (temp_dir, storage) = create_test_storage();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut service = LocalTokenService::new(&storage).with_audit(logger.clone());

        let generated = service
            .create_token(
                NewToken::for_project("Testing token", "my-project", TokenExpiry::OneYear),
                today(),
            )
            .unwrap();

        let reloaded = Storage::new(storage.paths().clone()).unwrap();
        reloaded.tokens.load().unwrap();
        assert_eq!(reloaded.tokens.count().unwrap(), 1);

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, Action::CreateToken);
        assert_eq!(entries[0].subject, generated.token.id.to_string());
    }

    #[test]
    fn test_find_by_short_id_and_name() {
        let (_temp, storage) = create_test_storage();
        let mut service = LocalTokenService::new(&storage);
        let generated = service
            .create_token(NewToken::for_project("ci", "p", TokenExpiry::ThirtyDays), today())
            .unwrap();

        let short = generated.token.id.to_string();
        assert_eq!(service.find(&short).unwrap().id, generated.token.id);
        assert_eq!(service.find("ci").unwrap().id, generated.token.id);
        assert!(service.find("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_prefers_id_over_name() {
        let (_temp, storage) = create_test_storage();
        let mut service = LocalTokenService::new(&storage);
        let first = service
            .create_token(NewToken::for_project("ci", "p", TokenExpiry::ThirtyDays), today())
            .unwrap();
        let short = first.token.id.to_string();
        let second = service
            .create_token(
                NewToken::for_project(short.clone(), "p", TokenExpiry::ThirtyDays),
                today(),
            )
            .unwrap();

        assert_eq!(service.find(&short).unwrap().id, first.token.id);
        assert_ne!(first.token.id, second.token.id);
    }

    #[test]
    fn test_delete() {
        let (_temp, storage) = create_test_storage();
        let mut service = LocalTokenService::new(&storage);
        let generated = service
            .create_token(NewToken::for_project("ci", "p", TokenExpiry::ThirtyDays), today())
            .unwrap();

        service.delete_token(generated.token.id).unwrap();
        assert!(service.list_tokens().unwrap().is_empty());
        assert!(service
            .delete_token(generated.token.id)
            .unwrap_err()
            .is_not_found());
    }
}
