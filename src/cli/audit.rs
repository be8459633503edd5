//! Audit log viewing

use clap::Args;

use crate::audit::AuditLogger;
use crate::error::DaystepResult;

/// Arguments of `daystep audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(logger: &AuditLogger, args: AuditArgs) -> DaystepResult<()> {
    let entries = logger.read_recent(args.limit)?;
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
