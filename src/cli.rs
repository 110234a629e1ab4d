use crate::model::Policy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert a RiskAssess lab schedule into a calendar import file
#[derive(Parser, Debug)]
#[command(name = "labcal")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// RiskAssess export to convert. Prompts for a file when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Calendar CSV to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How period numbers become event times
    #[arg(short, long, value_enum, default_value_t = Policy::WednesdayMerge)]
    pub policy: Policy,

    /// TOML file replacing the built-in period times
    #[arg(long)]
    pub periods: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an empty schedule with the expected columns
    Init {
        #[arg(default_value = "lab_schedule.csv")]
        filename: String,
    },
}
