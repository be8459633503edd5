//! Token collaborator interface
//!
//! The tutorial only needs three things from whoever issues tokens: create
//! one, delete one, and list them. Anything that can do that plugs in here.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{DaystepError, DaystepResult};
use crate::models::{GeneratedToken, TokenExpiry, TokenId, TokenType, UserToken};

/// Prefix of every token value issued locally
pub const TOKEN_VALUE_PREFIX: &str = "dst_";

/// Request to create a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToken {
    pub name: String,
    pub token_type: TokenType,
    pub project_key: Option<String>,
    pub expiry: TokenExpiry,
}

impl NewToken {
    /// A project analysis token for `project_key`
    pub fn for_project(
        name: impl Into<String>,
        project_key: impl Into<String>,
        expiry: TokenExpiry,
    ) -> Self {
        Self {
            name: name.into(),
            token_type: TokenType::ProjectAnalysisToken,
            project_key: Some(project_key.into()),
            expiry,
        }
    }
}

/// Create/delete/list operations on user tokens
pub trait TokenApi {
    /// Create a token; `today` anchors the expiration date
    fn create_token(&mut self, request: NewToken, today: NaiveDate)
        -> DaystepResult<GeneratedToken>;

    /// Delete a token by id
    fn delete_token(&mut self, id: TokenId) -> DaystepResult<UserToken>;

    /// All tokens, oldest first
    fn list_tokens(&self) -> DaystepResult<Vec<UserToken>>;
}

/// Validate a request and mint the token with a fresh secret value
pub(crate) fn issue_token(
    request: NewToken,
    today: NaiveDate,
    existing: &[UserToken],
) -> DaystepResult<GeneratedToken> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(DaystepError::Validation("Token name cannot be empty".into()));
    }
    if existing.iter().any(|t| t.name == name) {
        return Err(DaystepError::Token(format!(
            "A token named '{}' already exists",
            name
        )));
    }

    let token = UserToken {
        id: TokenId::new(),
        name: name.to_string(),
        token_type: request.token_type,
        project_key: request.project_key,
        created_at: Utc::now(),
        expires_at: request.expiry.expiration_date(today),
    };
    let value = format!("{}{}", TOKEN_VALUE_PREFIX, Uuid::new_v4().simple());

    Ok(GeneratedToken { token, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_valid_token_format;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 1, 17).unwrap()
    }

    #[test]
    fn test_issue_token() {
        let request = NewToken::for_project("Analyze my-project", "my-project", TokenExpiry::NinetyDays);
        let generated = issue_token(request, today(), &[]).unwrap();

        assert_eq!(generated.token.name, "Analyze my-project");
        assert_eq!(generated.token.project_key.as_deref(), Some("my-project"));
        assert_eq!(
            generated.token.expires_at,
            NaiveDate::from_ymd_opt(2018, 4, 17)
        );
        assert!(generated.value.starts_with(TOKEN_VALUE_PREFIX));
        assert!(is_valid_token_format(&generated.value));
    }

    #[test]
    fn test_issue_rejects_blank_name() {
        let request = NewToken::for_project("   ", "p", TokenExpiry::ThirtyDays);
        assert!(issue_token(request, today(), &[]).unwrap_err().is_validation());
    }

    #[test]
    fn test_issue_rejects_duplicate_name() {
        let first = issue_token(
            NewToken::for_project("ci", "p", TokenExpiry::ThirtyDays),
            today(),
            &[],
        )
        .unwrap();

        let err = issue_token(
            NewToken::for_project("ci", "p", TokenExpiry::ThirtyDays),
            today(),
            &[first.token],
        )
        .unwrap_err();
        assert!(matches!(err, DaystepError::Token(_)));
    }
}
