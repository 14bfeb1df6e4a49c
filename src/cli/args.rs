//! CLI argument definitions using clap
//!
//! Commands:
//! - neodb inspect (--pdes <designation> | --name <name>) [--verbose]
//! - neodb query [filters...] [--limit <n>] [--outfile <path>]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::filters::QueryOptions;
use crate::timefmt::parse_date;

/// neodb - Explore near-earth objects and their close approaches
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// NEO CSV file, overrides the config
    #[arg(long, global = true)]
    pub neofile: Option<PathBuf>,

    /// Close approach JSON file, overrides the config
    #[arg(long, global = true)]
    pub cadfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a single NEO by designation or name
    Inspect(InspectArgs),

    /// Query close approaches matching every given criterion
    Query(QueryArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InspectArgs {
    /// Primary designation, exact match
    #[arg(short = 'p', long, conflicts_with = "name", required_unless_present = "name")]
    pub pdes: Option<String>,

    /// IAU name, exact match
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Also list every close approach of the NEO
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date_arg)]
    pub start_date: Option<NaiveDate>,

    /// Approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date_arg)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance (au)
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance (au)
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity (km/s)
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity (km/s)
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter (km)
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter (km)
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs not flagged as potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results; 0 means unlimited
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to a .csv or .json file instead of stdout
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// Converts the flags into filter options
    pub fn to_options(&self) -> QueryOptions {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        QueryOptions {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous,
        }
    }
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("'{}' is not a YYYY-MM-DD date", value))
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
