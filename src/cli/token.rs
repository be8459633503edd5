//! Token CLI commands
//!
//! Implements CLI commands for token management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::{format_token_created, format_token_list};
use crate::error::DaystepResult;
use crate::models::{TokenExpiry, TokenType};
use crate::storage::Storage;
use crate::tokens::{LocalTokenService, NewToken, TokenApi};

/// Token subcommands
#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// List all tokens
    List,
    /// Create a token and print its value once
    Create {
        /// Token name
        name: String,
        /// Lifetime in days: 30, 90, 365, or 0 for no expiration
        #[arg(short, long)]
        expiry: Option<u32>,
        /// Restrict the token to one project
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Delete a token
    Delete {
        /// Token ID (tok-xxxxxxxx or full UUID) or name
        token: String,
    },
}

/// Handle a token command
pub fn handle_token_command(
    storage: &Storage,
    settings: &Settings,
    audit: Option<AuditLogger>,
    today: NaiveDate,
    cmd: TokenCommands,
) -> DaystepResult<()> {
    let mut service = LocalTokenService::new(storage);
    if let Some(logger) = audit {
        service = service.with_audit(logger);
    }

    match cmd {
        TokenCommands::List => {
            let tokens = service.list_tokens()?;
            println!("{}", format_token_list(&tokens, today).trim_end());
            if !tokens.is_empty() {
                println!("\nTotal: {} tokens", tokens.len());
            }
        }

        TokenCommands::Create {
            name,
            expiry,
            project,
        } => {
            let expiry = match expiry {
                Some(days) => TokenExpiry::from_days(days)?,
                None => settings.default_token_expiry,
            };
            let request = match project {
                Some(project) => NewToken::for_project(name, project, expiry),
                None => NewToken {
                    name,
                    token_type: TokenType::UserToken,
                    project_key: None,
                    expiry,
                },
            };

            let generated = service.create_token(request, today)?;
            print!("{}", format_token_created(&generated));
        }

        TokenCommands::Delete { token } => {
            let found = service.find(&token)?;
            let removed = service.delete_token(found.id)?;
            println!("Deleted token: {} ({})", removed.name, removed.id);
        }
    }

    Ok(())
}
