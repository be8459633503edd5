//! Label formatting
//!
//! Labels are addressed by key plus positional arguments. The picker and the
//! tutorial only ever produce keys; a `LabelFormatter` turns them into text.

use crate::config::LabelStyle;

/// Key used for the previous/next month navigation labels
pub const MONTH_NAVIGATION_KEY: &str = "show_month_x_of_year_y";

/// Turns a label key and its arguments into display text
pub trait LabelFormatter {
    fn format_label(&self, key: &str, args: &[&str]) -> String;
}

/// Renders `key.arg1.arg2`, leaving the label untranslated
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyFormatter;

impl LabelFormatter for KeyFormatter {
    fn format_label(&self, key: &str, args: &[&str]) -> String {
        let mut label = key.to_string();
        for arg in args {
            label.push('.');
            label.push_str(arg);
        }
        label
    }
}

/// Built-in English labels with `{0}`, `{1}`, ... placeholders
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishFormatter;

const ENGLISH: &[(&str, &str)] = &[
    (MONTH_NAVIGATION_KEY, "Show {0} {1}"),
    ("continue", "Continue"),
    ("onboarding.token.header", "Provide a token"),
    ("onboarding.analysis.header", "Run analysis on your project"),
    ("onboarding.token.generate", "Generate"),
    ("onboarding.token.delete", "Delete"),
    (
        "onboarding.token.generate.PROJECT_ANALYSIS_TOKEN",
        "Generate a project token",
    ),
    ("onboarding.token.use_existing_token", "Use existing token"),
    ("onboarding.token.use_existing_token.label", "Existing token value"),
    ("onboarding.token.name.label", "Token name"),
    (
        "onboarding.token.invalid_format",
        "The token you have entered has an invalid format.",
    ),
    ("users.tokens.expiration.30", "30 days"),
    ("users.tokens.expiration.90", "90 days"),
    ("users.tokens.expiration.365", "1 year"),
    ("users.tokens.expiration.0", "No expiration"),
];

impl LabelFormatter for EnglishFormatter {
    fn format_label(&self, key: &str, args: &[&str]) -> String {
        let Some((_, template)) = ENGLISH.iter().find(|(k, _)| *k == key) else {
            return KeyFormatter.format_label(key, args);
        };

        fill_placeholders(template, args)
    }
}

/// Replace `{n}` with `args[n]` in one pass, so argument text is never rescanned
fn fill_placeholders(template: &str, args: &[&str]) -> String {
    let mut label = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        label.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let arg = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            args.get(index).map(|arg| (*arg, close))
        });

        match arg {
            Some((arg, close)) => {
                label.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                label.push('{');
                rest = after;
            }
        }
    }
    label.push_str(rest);
    label
}

/// The formatter matching a configured label style
pub fn formatter_for(style: LabelStyle) -> Box<dyn LabelFormatter> {
    match style {
        LabelStyle::English => Box::new(EnglishFormatter),
        LabelStyle::Keys => Box::new(KeyFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_formatter_joins_args() {
        assert_eq!(
            KeyFormatter.format_label(MONTH_NAVIGATION_KEY, &["December", "2017"]),
            "show_month_x_of_year_y.December.2017"
        );
        assert_eq!(KeyFormatter.format_label("continue", &[]), "continue");
    }

    #[test]
    fn test_english_formatter_fills_placeholders() {
        assert_eq!(
            EnglishFormatter.format_label(MONTH_NAVIGATION_KEY, &["February", "2018"]),
            "Show February 2018"
        );
        assert_eq!(
            EnglishFormatter.format_label("onboarding.token.header", &[]),
            "Provide a token"
        );
    }

    #[test]
    fn test_placeholder_text_in_args_is_kept() {
        assert_eq!(
            EnglishFormatter.format_label(MONTH_NAVIGATION_KEY, &["{1}", "2018"]),
            "Show {1} 2018"
        );
        assert_eq!(fill_placeholders("{0} {9} {x", &["a"]), "a {9} {x");
    }

    #[test]
    fn test_english_formatter_falls_back_to_keys() {
        assert_eq!(
            EnglishFormatter.format_label("unknown.key", &["x"]),
            "unknown.key.x"
        );
    }

    #[test]
    fn test_formatter_for_style() {
        let keys = formatter_for(LabelStyle::Keys);
        assert_eq!(keys.format_label("continue", &[]), "continue");
        let english = formatter_for(LabelStyle::English);
        assert_eq!(english.format_label("continue", &[]), "Continue");
    }
}
