//! User token models
//!
//! Metadata for analysis tokens issued to a user. The secret value is handed
//! out once at creation and never stored alongside the metadata.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TokenId;
use crate::error::{DaystepError, DaystepResult};

/// How long a generated token stays valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TokenExpiry {
    #[default]
    #[serde(rename = "30")]
    ThirtyDays,
    #[serde(rename = "90")]
    NinetyDays,
    #[serde(rename = "365")]
    OneYear,
    #[serde(rename = "0")]
    NoExpiration,
}

impl TokenExpiry {
    /// All choices, in the order the expiry selector lists them
    pub const ALL: [TokenExpiry; 4] = [
        TokenExpiry::ThirtyDays,
        TokenExpiry::NinetyDays,
        TokenExpiry::OneYear,
        TokenExpiry::NoExpiration,
    ];

    /// Lifetime in days (0 = never expires)
    pub fn days(self) -> u32 {
        match self {
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
            Self::OneYear => 365,
            Self::NoExpiration => 0,
        }
    }

    /// Parse a lifetime in days
    pub fn from_days(days: u32) -> DaystepResult<Self> {
        Self::ALL
            .into_iter()
            .find(|expiry| expiry.days() == days)
            .ok_or_else(|| {
                DaystepError::Validation(format!(
                    "Unsupported token expiry: {} days (use 30, 90, 365 or 0)",
                    days
                ))
            })
    }

    /// Expiration date for a token created on `created`
    pub fn expiration_date(self, created: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::NoExpiration => None,
            other => Some(created + Duration::days(i64::from(other.days()))),
        }
    }

    /// Label key for the expiry selector
    pub fn label_key(self) -> String {
        format!("users.tokens.expiration.{}", self.days())
    }
}

impl fmt::Display for TokenExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoExpiration => write!(f, "No expiration"),
            other => write!(f, "{} days", other.days()),
        }
    }
}

/// What a token may be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// Analysis of a single project
    #[default]
    ProjectAnalysisToken,
    /// Analysis of any project the user can access
    GlobalAnalysisToken,
    /// General user token
    UserToken,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectAnalysisToken => write!(f, "Project analysis"),
            Self::GlobalAnalysisToken => write!(f, "Global analysis"),
            Self::UserToken => write!(f, "User"),
        }
    }
}

/// Token metadata as listed by the token collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserToken {
    pub id: TokenId,
    pub name: String,
    #[serde(default)]
    pub token_type: TokenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
}

impl UserToken {
    /// Whether the token has expired on `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_at.is_some_and(|expires| today >= expires)
    }
}

/// A freshly created token together with its secret value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedToken {
    pub token: UserToken,
    pub value: String,
}

/// Whether a pasted token value has the expected shape
///
/// Tokens are non-empty runs of ASCII letters, digits and underscores.
pub fn is_valid_token_format(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expiration_dates() {
        let created = date(2018, 1, 17);
        assert_eq!(
            TokenExpiry::ThirtyDays.expiration_date(created),
            Some(date(2018, 2, 16))
        );
        assert_eq!(
            TokenExpiry::OneYear.expiration_date(created),
            Some(date(2019, 1, 17))
        );
        assert_eq!(TokenExpiry::NoExpiration.expiration_date(created), None);
    }

    #[test]
    fn test_from_days() {
        assert_eq!(TokenExpiry::from_days(90).unwrap(), TokenExpiry::NinetyDays);
        assert_eq!(TokenExpiry::from_days(0).unwrap(), TokenExpiry::NoExpiration);
        assert!(TokenExpiry::from_days(7).unwrap_err().is_validation());
    }

    #[test]
    fn test_expiry_serialization() {
        let json = serde_json::to_string(&TokenExpiry::OneYear).unwrap();
        assert_eq!(json, "\"365\"");
        let parsed: TokenExpiry = serde_json::from_str("\"0\"").unwrap();
        assert_eq!(parsed, TokenExpiry::NoExpiration);
    }

    #[test]
    fn test_label_key() {
        assert_eq!(TokenExpiry::OneYear.label_key(), "users.tokens.expiration.365");
    }

    #[test]
    fn test_token_format() {
        assert!(is_valid_token_format("validtokenvalue"));
        assert!(is_valid_token_format("tok_0123abc"));
        assert!(!is_valid_token_format("INVALID TOKEN VALUE"));
        assert!(!is_valid_token_format(""));
        assert!(!is_valid_token_format("abc-def"));
    }

    #[test]
    fn test_is_expired() {
        let token = UserToken {
            id: TokenId::new(),
            name: "ci".into(),
            token_type: TokenType::ProjectAnalysisToken,
            project_key: None,
            created_at: Utc::now(),
            expires_at: Some(date(2018, 2, 16)),
        };
        assert!(!token.is_expired(date(2018, 2, 15)));
        assert!(token.is_expired(date(2018, 2, 16)));
    }
}
