//! Subcommands of `nm-cli`.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Subcommand;
use nm_chart_ui::ChartId;
use nm_data::DashboardData;
use std::fs;
use std::path::{Path, PathBuf};

pub mod charts;
pub mod check;
pub mod sample;

#[derive(Subcommand)]
pub enum Command {
    /// Print the Chart.js configs the dashboard builds from a page payload
    Charts {
        /// Dashboard data JSON (template or legacy global field names)
        #[arg(short, long)]
        data: PathBuf,

        /// Replace the trend series with a headerless `date,count` CSV
        #[arg(long)]
        trend_csv: Option<PathBuf>,

        /// Only print this chart (trend, sentiment, platform, interaction)
        #[arg(short, long)]
        chart: Option<ChartId>,

        #[arg(long)]
        pretty: bool,
    },

    /// Report shape problems in a page payload
    Check {
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Emit a deterministic demo payload
    Sample {
        /// Number of days in the trend series, at most 3660
        #[arg(long, default_value_t = 31)]
        days: u32,

        /// Last day of the trend series (YYYY-MM-DD), defaults to today
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Platform names for the distribution chart (repeatable)
        #[arg(short, long = "platform")]
        platforms: Vec<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Charts {
            data,
            trend_csv,
            chart,
            pretty,
        } => {
            let mut page = load_data(&data)?;
            if let Some(csv_path) = trend_csv {
                let csv_data = read(&csv_path)?;
                page.trend = nm_data::TrendSeries::from_csv(&csv_data)
                    .with_context(|| format!("parsing {}", csv_path.display()))?;
                log::info!("loaded {} trend points from {}", page.trend.len(), csv_path.display());
            }
            println!("{}", charts::render(&page, chart, pretty)?);
            Ok(())
        }
        Command::Check { data } => {
            let raw = read(&data)?;
            let report = check::check(&raw)
                .with_context(|| format!("{} is not valid dashboard data", data.display()))?;
            print!("{report}");
            Ok(())
        }
        Command::Sample {
            days,
            end,
            platforms,
        } => {
            let end = end.unwrap_or_else(|| chrono::Local::now().date_naive());
            let payload = sample::generate(days, end, &platforms)?;
            println!("{}", payload.to_json_pretty()?);
            Ok(())
        }
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_data(path: &Path) -> anyhow::Result<DashboardData> {
    let json = read(path)?;
    DashboardData::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}
