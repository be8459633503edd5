//! Token display formatting

use chrono::NaiveDate;

use crate::models::{GeneratedToken, UserToken};

/// Format tokens as a table
pub fn format_token_list(tokens: &[UserToken], today: NaiveDate) -> String {
    if tokens.is_empty() {
        return "No tokens found.".to_string();
    }

    let name_width = tokens
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let project_width = tokens
        .iter()
        .map(|t| t.project_key.as_deref().map_or(1, str::len))
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<project_width$}  {:<10}  {:<13}  {}\n",
        "ID",
        "Name",
        "Project",
        "Created",
        "Expires",
        "Status",
        name_width = name_width,
        project_width = project_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<project_width$}  {:-<10}  {:-<13}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        project_width = project_width,
    ));

    for token in tokens {
        let expires = token
            .expires_at
            .map_or_else(|| "Never".to_string(), |d| d.to_string());
        let status = if token.is_expired(today) {
            "Expired"
        } else {
            "Active"
        };

        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<project_width$}  {:<10}  {:<13}  {}\n",
            token.id.to_string(),
            token.name,
            token.project_key.as_deref().unwrap_or("-"),
            token.created_at.format("%Y-%m-%d").to_string(),
            expires,
            status,
            name_width = name_width,
            project_width = project_width,
        ));
    }

    output
}

/// Format a freshly created token, including its one-time value
pub fn format_token_created(generated: &GeneratedToken) -> String {
    let token = &generated.token;
    let mut output = String::new();

    output.push_str(&format!("Created token: {}\n", token.name));
    output.push_str(&format!("  ID:      {}\n", token.id));
    output.push_str(&format!("  Type:    {}\n", token.token_type));
    if let Some(project) = &token.project_key {
        output.push_str(&format!("  Project: {}\n", project));
    }
    match token.expires_at {
        Some(date) => output.push_str(&format!("  Expires: {}\n", date)),
        None => output.push_str("  Expires: Never\n"),
    }
    output.push_str(&format!("  Value:   {}\n", generated.value));
    output.push_str("\nCopy the value now; it will not be shown again.\n");

    output
}
