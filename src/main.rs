use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use daystep::cli::{
    audit_logger, handle_audit_command, handle_calendar_command, handle_pick_command,
    handle_token_command, handle_tutorial_command, AuditArgs, CalendarArgs, PickArgs,
    TokenCommands, TutorialArgs,
};
use daystep::audit::AuditLogger;
use daystep::config::{DaystepPaths, Settings};
use daystep::storage::Storage;

#[derive(Parser)]
#[command(
    name = "daystep",
    version,
    about = "Calendar date picker and onboarding tutorial for the terminal",
    long_about = "daystep picks dates from a keyboard-driven calendar popover with \
                  bounded selection and range highlighting, and walks you through \
                  providing an analysis token and choosing a build tool."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a date in the interactive calendar
    Pick(PickArgs),

    /// Print a month grid with navigation labels
    #[command(alias = "cal")]
    Calendar(CalendarArgs),

    /// Run the onboarding tutorial
    Tutorial(TutorialArgs),

    /// Token management commands
    #[command(subcommand)]
    Token(TokenCommands),

    /// Show recent audit log entries
    Audit(AuditArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DaystepPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let audit = audit_logger(&paths, &settings);
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Pick(args)) => {
            handle_pick_command(args, &settings, audit, today)?;
        }
        Some(Commands::Calendar(args)) => {
            handle_calendar_command(args, &settings, today)?;
        }
        Some(Commands::Tutorial(args)) => {
            handle_tutorial_command(&storage, &settings, audit, today, args)?;
        }
        Some(Commands::Token(cmd)) => {
            handle_token_command(&storage, &settings, audit, today, cmd)?;
        }
        Some(Commands::Audit(args)) => {
            let logger = AuditLogger::new(paths.audit_log());
            handle_audit_command(&logger, args)?;
        }
        Some(Commands::Config) => {
            println!("daystep Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Date format:          {}", settings.date_format);
            println!("  First day of week:    {:?}", settings.first_day_of_week);
            println!("  Label style:          {:?}", settings.label_style);
            println!("  Default token expiry: {}", settings.default_token_expiry);
            println!("  Year span:            {}", settings.year_span);
            println!("  Audit enabled:        {}", settings.audit_enabled);
        }
        None => {
            println!("daystep - calendar date picker and onboarding tutorial");
            println!();
            println!("Run 'daystep --help' for usage information.");
            println!("Run 'daystep pick' to open the calendar.");
        }
    }

    Ok(())
}
