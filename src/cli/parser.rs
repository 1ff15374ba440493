use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for patient-trends
/// CLI application to summarize clinic reservations stored in SQLite
#[derive(Parser)]
#[command(
    name = "patient-trends",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize clinic patients by profession, gender and age for a month and time of day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter options shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Reservation year (default: current year if present in the data, else the first year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Reservation month 1-12 (default: current month)
    #[arg(long)]
    pub month: Option<u32>,

    /// Time slot id, repeatable (default: all slots).
    /// One of: early-morning, morning, noon, afternoon, evening, night
    #[arg(long = "slot", value_name = "ID")]
    pub slots: Vec<String>,

    /// Do not filter by time of day at all (same as an empty slot selection)
    #[arg(long = "any-time", conflicts_with = "slots")]
    pub any_time: bool,

    /// Reference date for age computation (YYYY-MM-DD, default: today)
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty reservation database
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Show the selectable years, months and time slots
    Range,

    /// Print patient statistics for a month
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Export patient statistics for a month
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
