//! Onboarding tutorial command

use chrono::NaiveDate;
use clap::Args;
use std::io;

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::DaystepResult;
use crate::picker::formatter_for;
use crate::storage::Storage;
use crate::tokens::LocalTokenService;
use crate::wizard::{Tutorial, TutorialSession};

/// Arguments of `daystep tutorial`
#[derive(Args, Debug)]
pub struct TutorialArgs {
    /// Key of the project to analyze
    #[arg(short, long, default_value = "my-project")]
    pub project: String,
}

/// Run the tutorial on stdin/stdout
pub fn handle_tutorial_command(
    storage: &Storage,
    settings: &Settings,
    audit: Option<AuditLogger>,
    today: NaiveDate,
    args: TutorialArgs,
) -> DaystepResult<()> {
    let mut tutorial = Tutorial::new(args.project, settings.default_token_expiry);
    let mut service = LocalTokenService::new(storage);
    if let Some(logger) = audit {
        tutorial = tutorial.with_audit(logger.clone());
        service = service.with_audit(logger);
    }

    let formatter = formatter_for(settings.label_style);
    let stdin = io::stdin();
    let mut session = TutorialSession::new(stdin.lock(), io::stdout(), today);
    session.run(&mut tutorial, &mut service, formatter.as_ref())?;

    Ok(())
}
