//! User settings for daystep
//!
//! Manages user preferences including the calendar week start, label style,
//! default token expiry and audit logging.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::paths::DaystepPaths;
use crate::error::DaystepError;
use crate::models::TokenExpiry;

/// First day of the week shown in the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FirstDayOfWeek {
    #[default]
    Sunday,
    Monday,
}

impl FirstDayOfWeek {
    /// The chrono weekday this preference maps to
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

/// How navigation labels and step titles are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Human-readable English text
    #[default]
    English,
    /// Raw label keys with their arguments (`key.arg1.arg2`)
    Keys,
}

/// User settings for daystep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First day of week in the calendar grid
    #[serde(default)]
    pub first_day_of_week: FirstDayOfWeek,

    /// Label rendering style
    #[serde(default)]
    pub label_style: LabelStyle,

    /// Expiry preselected when generating a token
    #[serde(default)]
    pub default_token_expiry: TokenExpiry,

    /// Number of years offered by the year selector (at most 200 are used)
    #[serde(default = "default_year_span")]
    pub year_span: u32,

    /// Whether state transitions are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_year_span() -> u32 {
    10
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            first_day_of_week: FirstDayOfWeek::default(),
            label_style: LabelStyle::default(),
            default_token_expiry: TokenExpiry::default(),
            year_span: default_year_span(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DaystepPaths) -> Result<Self, DaystepError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DaystepError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DaystepError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DaystepPaths) -> Result<(), DaystepError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DaystepError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DaystepError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.first_day_of_week, FirstDayOfWeek::Sunday);
        assert_eq!(settings.label_style, LabelStyle::English);
        assert_eq!(settings.default_token_expiry, TokenExpiry::ThirtyDays);
        assert_eq!(settings.year_span, 10);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaystepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.first_day_of_week = FirstDayOfWeek::Monday;
        settings.label_style = LabelStyle::Keys;
        settings.default_token_expiry = TokenExpiry::OneYear;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.first_day_of_week, FirstDayOfWeek::Monday);
        assert_eq!(loaded.label_style, LabelStyle::Keys);
        assert_eq!(loaded.default_token_expiry, TokenExpiry::OneYear);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"label_style": "keys"}"#).unwrap();
        assert_eq!(settings.label_style, LabelStyle::Keys);
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaystepPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, DaystepError::Config(_)));
    }

    #[test]
    fn test_week_start_maps_to_weekday() {
        assert_eq!(FirstDayOfWeek::Sunday.weekday(), Weekday::Sun);
        assert_eq!(FirstDayOfWeek::Monday.weekday(), Weekday::Mon);
    }
}
