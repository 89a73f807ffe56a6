use anyhow::{Context, Result};
use blogdex::scaffold::entry_date;
use blogdex::{
    Config, build_index, collect_entries, create_entry, create_year, filter_by_period,
    format_listing,
};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "blogdex",
    version,
    about = "Index a date-organised tree of markdown posts"
)]
struct Cli {
    /// Blog root to scan and scaffold into
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Index output path (relative paths resolve against the root)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Config file (defaults to <root>/blogdex.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the month directories for a year
    CreateYear {
        /// The year to scaffold
        year: i32,
    },
    /// Create a new blog entry (defaults to today) and rebuild the index
    CreateEntry {
        /// Title of the entry
        title: String,
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month, 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
        /// Day, 1-31 (defaults to the current day)
        #[arg(long)]
        day: Option<u32>,
    },
    /// List published entries, optionally for one year and month
    List {
        /// Only entries from this year
        year: Option<i32>,
        /// Only entries from this month (requires a year)
        month: Option<u32>,
    },
    /// Write the JSON index
    Build,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.root, cli.config.as_deref())?;
    if let Some(output) = &cli.output {
        config = config.with_output(output);
    }
    Ok(config)
}

fn build(config: &Config, today: NaiveDate) -> Result<()> {
    build_index(config, today)?;
    Ok(())
}

fn list(config: &Config, today: NaiveDate, year: Option<i32>, month: Option<u32>) {
    let entries = filter_by_period(collect_entries(config, today), year, month);

    for line in format_listing(&entries) {
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogdex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::CreateYear { year } => {
            create_year(&config.root, year)?;
        }
        Command::CreateEntry {
            title,
            year,
            month,
            day,
        } => {
            let date = entry_date(
                year.unwrap_or(today.year()),
                month.unwrap_or(today.month()),
                day.unwrap_or(today.day()),
            )?;

            create_entry(&config.root, date, &title)
                .with_context(|| format!("Failed to create entry {:?}", title))?;
            build(&config, today)?;
        }
        Command::List { year, month } => list(&config, today, year, month),
        Command::Build => build(&config, today)?,
    }

    Ok(())
}
