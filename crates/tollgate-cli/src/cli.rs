//! CLI definition using clap

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tollgate_types::OutputFormat;

#[derive(Parser)]
#[command(name = "tollgate")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Toll parking facility: fee quotes and admission/release replay")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table)
    #[arg(long, short = 'f', global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a single stay
    Quote {
        /// Hourly rate
        #[arg(long)]
        rate: Decimal,

        /// Fixed amount charged once per stay
        #[arg(long, default_value_t = Decimal::ZERO)]
        fixed: Decimal,

        /// Stay length in minutes
        #[arg(long, short = 'm', conflicts_with_all = ["from", "to"], required_unless_present_all = ["from", "to"])]
        minutes: Option<i64>,

        /// Stay start (RFC 3339)
        #[arg(long, requires = "to")]
        from: Option<DateTime<Utc>>,

        /// Stay end (RFC 3339)
        #[arg(long, requires = "from")]
        to: Option<DateTime<Utc>>,
    },

    /// Replay an admit/release script against the configured facility
    Simulate {
        /// Script file (TOML)
        script: PathBuf,

        /// Facility config file; defaults to the user config
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Manage the facility configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}
