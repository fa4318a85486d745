pub mod toml_config;

pub use toml_config::PlannerConfig;

#[cfg(feature = "cli")]
use crate::adapters::encoders::OutputFormat;
#[cfg(feature = "cli")]
use crate::domain::model::{Goal, PlanRequest};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "vitalforce")]
#[command(about = "Generate personalized gym training plans and export them as reports")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the routines in the catalog
    Routines {
        /// Only show routines for this goal
        #[arg(long)]
        goal: Option<String>,
    },
    /// Generate a plan for a member and store it under a session
    Enroll(EnrollArgs),
    /// Show the plan stored for a session
    Show {
        #[arg(long)]
        session: String,
    },
    /// Render the stored plan and write the report file
    Download(DownloadArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct EnrollArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub age: String,

    /// Days per week the member would like to train
    #[arg(long)]
    pub days: u32,

    /// muscle_gain or fat_loss
    #[arg(long)]
    pub goal: String,

    /// Reuse an existing session id instead of creating one
    #[arg(long)]
    pub session: Option<String>,

    /// Seed for reproducible plans
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(feature = "cli")]
impl EnrollArgs {
    pub fn to_request(&self) -> Result<PlanRequest> {
        Ok(PlanRequest {
            member_name: self.name.trim().to_string(),
            member_age: self.age.trim().to_string(),
            goal: self.goal.parse::<Goal>()?,
            requested_days: self.days,
        })
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct DownloadArgs {
    #[arg(long)]
    pub session: String,

    /// Overrides report.format from the config
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Overrides storage.output_dir from the config
    #[arg(long)]
    pub output: Option<String>,

    /// Also write the schedule as CSV next to the report
    #[arg(long)]
    pub csv: bool,
}
