//! Token step
//!
//! The user either generates a named token with an expiry or pastes one they
//! already have. The step is ready once a usable token value exists.

use chrono::NaiveDate;

use crate::error::{DaystepError, DaystepResult};
use crate::models::{is_valid_token_format, GeneratedToken, TokenExpiry};
use crate::tokens::{NewToken, TokenApi};

/// Label key shown under an invalid pasted token
pub const INVALID_FORMAT_KEY: &str = "onboarding.token.invalid_format";

/// How the user provides a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenMode {
    #[default]
    Generate,
    UseExisting,
}

/// State of the token step
#[derive(Debug, Clone)]
pub struct TokenStep {
    project_key: String,
    mode: TokenMode,
    name: String,
    expiry: TokenExpiry,
    generated: Option<GeneratedToken>,
    existing_value: String,
}

impl TokenStep {
    /// Start in generate mode with a name derived from the project
    pub fn new(project_key: impl Into<String>, expiry: TokenExpiry) -> Self {
        let project_key = project_key.into();
        Self {
            name: format!("Analyze \"{}\"", project_key),
            project_key,
            mode: TokenMode::Generate,
            expiry,
            generated: None,
            existing_value: String::new(),
        }
    }

    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    pub fn mode(&self) -> TokenMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiry(&self) -> TokenExpiry {
        self.expiry
    }

    pub fn generated(&self) -> Option<&GeneratedToken> {
        self.generated.as_ref()
    }

    pub fn existing_value(&self) -> &str {
        &self.existing_value
    }

    pub fn set_mode(&mut self, mode: TokenMode) {
        self.mode = mode;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_expiry(&mut self, expiry: TokenExpiry) {
        self.expiry = expiry;
    }

    pub fn set_existing_value(&mut self, value: impl Into<String>) {
        self.existing_value = value.into();
    }

    /// Generate a token through the collaborator
    pub fn generate(&mut self, api: &mut dyn TokenApi, today: NaiveDate) -> DaystepResult<&GeneratedToken> {
        if self.generated.is_some() {
            return Err(DaystepError::Validation(
                "A token has already been generated; delete it first".into(),
            ));
        }

        let request = NewToken::for_project(self.name.trim(), &self.project_key, self.expiry);
        let generated = api.create_token(request, today)?;
        Ok(self.generated.insert(generated))
    }

    /// Delete the generated token through the collaborator
    pub fn delete(&mut self, api: &mut dyn TokenApi) -> DaystepResult<()> {
        let Some(generated) = &self.generated else {
            return Err(DaystepError::Validation("No token has been generated".into()));
        };
        api.delete_token(generated.token.id)?;
        self.generated = None;
        Ok(())
    }

    /// Inline validation message for the pasted token, if any
    pub fn validation_message(&self) -> Option<&'static str> {
        let value = self.existing_value.trim();
        if self.mode == TokenMode::UseExisting && !value.is_empty() && !is_valid_token_format(value)
        {
            Some(INVALID_FORMAT_KEY)
        } else {
            None
        }
    }

    /// The value later steps use, if one is available
    pub fn token_value(&self) -> Option<&str> {
        match self.mode {
            TokenMode::Generate => self.generated.as_ref().map(|g| g.value.as_str()),
            TokenMode::UseExisting => {
                let value = self.existing_value.trim();
                is_valid_token_format(value).then_some(value)
            }
        }
    }

    /// Completion predicate of the step
    pub fn is_ready(&self) -> bool {
        self.token_value().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::MemoryTokenStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 1, 17).unwrap()
    }

    #[test]
    fn test_default_name() {
        let step = TokenStep::new("my-project", TokenExpiry::ThirtyDays);
        assert_eq!(step.name(), "Analyze \"my-project\"");
        assert_eq!(step.mode(), TokenMode::Generate);
        assert!(!step.is_ready());
    }

    #[test]
    fn test_generate_then_delete() {
        let mut api = MemoryTokenStore::new();
        let mut step = TokenStep::new("my-project", TokenExpiry::ThirtyDays);
        step.set_name("Testing token");
        step.set_expiry(TokenExpiry::OneYear);

        let generated = step.generate(&mut api, today()).unwrap();
        assert_eq!(generated.token.name, "Testing token");
        assert!(step.is_ready());
        assert!(step.generate(&mut api, today()).unwrap_err().is_validation());

        step.delete(&mut api).unwrap();
        assert!(!step.is_ready());
        assert!(api.list_tokens().unwrap().is_empty());
        assert!(step.delete(&mut api).unwrap_err().is_validation());
    }

    #[test]
    fn test_existing_token_validation() {
        let mut step = TokenStep::new("my-project", TokenExpiry::ThirtyDays);
        step.set_mode(TokenMode::UseExisting);
        assert_eq!(step.validation_message(), None);

        step.set_existing_value("INVALID TOKEN VALUE");
        assert_eq!(step.validation_message(), Some(INVALID_FORMAT_KEY));
        assert!(!step.is_ready());

        step.set_existing_value("validtokenvalue");
        assert_eq!(step.validation_message(), None);
        assert!(step.is_ready());
        assert_eq!(step.token_value(), Some("validtokenvalue"));
    }

    #[test]
    fn test_mode_switch_changes_predicate() {
        let mut api = MemoryTokenStore::new();
        let mut step = TokenStep::new("my-project", TokenExpiry::ThirtyDays);
        step.generate(&mut api, today()).unwrap();

        step.set_mode(TokenMode::UseExisting);
        assert!(!step.is_ready());

        step.set_mode(TokenMode::Generate);
        assert!(step.is_ready());
    }

    #[test]
    fn test_validation_message_only_in_existing_mode() {
        let mut step = TokenStep::new("my-project", TokenExpiry::ThirtyDays);
        step.set_existing_value("not valid");
        assert_eq!(step.validation_message(), None);
    }
}
