//! Command-line interface for `civic_issues`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::config::{CliOverrides, Workspace};
use crate::logging;

/// `civic` - Civic issue reporting and triage.
#[derive(Parser, Debug)]
#[command(name = "civic")]
#[command(
    author,
    version,
    about = "Civic issue reporting and triage",
    long_about = None,
    after_help = "Status changes and deletes require an admin identity (--role admin or an admin session)."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Data directory holding issue and session slots
    #[arg(long, global = true, env = "CIVIC_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Act as the user with this ID
    #[arg(long, global = true, env = "CIVIC_USER_ID")]
    pub user_id: Option<i64>,

    /// Act as the user with this email
    #[arg(long, global = true, env = "CIVIC_USER_EMAIL")]
    pub user_email: Option<String>,

    /// Display name for the acting user
    #[arg(long, global = true, env = "CIVIC_USER_NAME")]
    pub user_name: Option<String>,

    /// Role for the acting user (user or admin)
    #[arg(long, global = true, env = "CIVIC_ROLE")]
    pub role: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            data_dir: self.data_dir.clone(),
            user_id: self.user_id,
            user_email: self.user_email.clone(),
            user_name: self.user_name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report a new issue
    Report(ReportArgs),

    /// List issues
    List(ListArgs),

    /// Show issue details
    Show {
        /// Issue ID
        id: i64,
    },

    /// Change an issue's status (admin)
    Status {
        /// Issue ID
        id: i64,
        /// New status: pending, in-progress or resolved
        status: String,
    },

    /// Delete an issue (admin)
    Delete {
        /// Issue ID
        id: i64,
    },

    /// Counts by status and category
    Stats,

    /// Show the acting identity
    Whoami,

    /// Print the JSON schema of the issue snapshot
    Schema,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Short title
    #[arg(long)]
    pub title: Option<String>,

    /// What is wrong
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// roads, sanitation, water, electricity, parks or other
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// low, medium (default) or high
    #[arg(long, short = 'u')]
    pub urgency: Option<String>,

    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Photo to attach (max 5 MB)
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by status (or "all")
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Filter by category (or "all")
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Case-insensitive text in title or description
    #[arg(long)]
    pub search: Option<String>,

    /// Only issues reported by the acting user
    #[arg(long)]
    pub mine: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let overrides = cli.overrides();
    let workspace = Workspace::discover(&overrides)?;

    logging::init_logging(cli.verbose, cli.quiet, workspace.config.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
    debug!(
        data_dir = %workspace.data_dir.display(),
        config = ?workspace.config,
        "Resolved workspace"
    );
    if let Some(command) = &cli.command {
        debug!(command = command.name(), "Running command");
    }

    let json = cli.json;
    match cli.command {
        Some(Commands::Report(args)) => {
            commands::report::execute(&args, json, &workspace, &overrides)?;
        }
        Some(Commands::List(args)) => {
            commands::list::execute(&args, json, &workspace, &overrides)?;
        }
        Some(Commands::Show { id }) => commands::show::execute(id, json, &workspace)?,
        Some(Commands::Status { id, status }) => {
            commands::status::execute(id, &status, json, &workspace, &overrides)?;
        }
        Some(Commands::Delete { id }) => {
            commands::delete::execute(id, json, &workspace, &overrides)?;
        }
        Some(Commands::Stats) => commands::stats::execute(json, &workspace)?,
        Some(Commands::Whoami) => commands::whoami::execute(json, &workspace, &overrides)?,
        Some(Commands::Schema) => commands::schema::execute()?,
        Some(Commands::Version) => {
            println!("civic {}", env!("CARGO_PKG_VERSION"));
        }
        None => println!("civic - Civic issue reporting and triage. Use --help for usage."),
    }

    Ok(())
}

impl Commands {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Report(_) => "report",
            Self::List(_) => "list",
            Self::Show { .. } => "show",
            Self::Status { .. } => "status",
            Self::Delete { .. } => "delete",
            Self::Stats => "stats",
            Self::Whoami => "whoami",
            Self::Schema => "schema",
            Self::Version => "version",
        }
    }
}
