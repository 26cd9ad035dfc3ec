use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Week-per-row calendar dataset generator.
#[derive(Parser)]
#[command(
    name = "weekcal",
    version,
    about = "Generate week-per-row CSV calendar data for printable planners"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate the week-per-row CSV for a year.
    Generate(GenerateArgs),
    /// Print public holidays as `yyyy-mm-dd,name` lines.
    Holidays(HolidaysArgs),
}

/// Country whose public holidays to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Country {
    /// Czech Republic.
    Cz,
    /// France.
    Fr,
}

/// Holiday name style (only the Czech calendar distinguishes them).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Full official names.
    #[default]
    Long,
    /// Abbreviated everyday names.
    Short,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Year to generate data for.
    pub year: u16,

    /// Extra weeks of the following year.
    #[arg(short, long, default_value_t = 2)]
    pub extra_weeks: u16,

    /// Start page for week 1 (even number).
    #[arg(short, long, default_value_t = 2)]
    pub start_page: u32,

    /// Birthday file with "YYYY-mm-dd,name" lines (0000 = unknown year).
    #[arg(short, long, value_name = "FILE")]
    pub birthday_file: Option<PathBuf>,

    /// Nameday file with "{0|1},mm-dd,name" lines (0 rows are skipped).
    #[arg(short, long, value_name = "FILE")]
    pub nameday_file: Option<PathBuf>,

    /// Event file with "YYYY-mm-dd,name" lines.
    #[arg(long, value_name = "FILE")]
    pub event_file: Option<PathBuf>,

    /// Moon-phase file with "YYYY-mm-dd,name" lines.
    #[arg(short, long, value_name = "FILE")]
    pub moon_file: Option<PathBuf>,

    /// Holiday file with "YYYY-mm-dd,name" lines.
    #[arg(short = 'd', long, value_name = "FILE")]
    pub holiday_file: Option<PathBuf>,

    /// Month-name file with one name per line, January first.
    #[arg(short = 't', long, value_name = "FILE")]
    pub month_file: Option<PathBuf>,

    /// Compute holidays for a country instead of reading a file.
    #[arg(long, value_enum, conflicts_with = "holiday_file")]
    pub holiday_country: Option<Country>,

    /// Write the CSV here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Country whose holidays to print.
    #[arg(short, long, value_enum)]
    pub country: Country,

    /// First year to print.
    #[arg(long)]
    pub from: u16,

    /// Last year to print (defaults to the year after `--from`).
    #[arg(long)]
    pub to: Option<u16>,

    /// Name style.
    #[arg(long, value_enum, default_value = "long")]
    pub style: Style,

    /// Write the lines here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
