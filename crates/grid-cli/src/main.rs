//! `calgrid` CLI -- render month blocks, day views and agendas as JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Month block around today (clock read in the configured timezone)
//! calgrid month
//!
//! # Month block of a given day, with a fixed "today"
//! calgrid month --date 03-May-1988 --today 1988-05-03
//!
//! # Weeks appended when the month view scrolls past 05-Jun-1988
//! calgrid extend 05-Jun-1988
//!
//! # Day view of 1 Feb 2021 over an events file
//! calgrid day 2021-2-1 -i events.json
//!
//! # Agenda for the next 7 days, events piped on stdin
//! cat events.json | calgrid agenda --days 7 -i -
//!
//! # Custom layout settings
//! calgrid --config grid.toml month -o month.json
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use grid_engine::day::DayStyle;
use grid_engine::grid::{extend_weeks, month_block_for, weekday_names, Week};
use grid_engine::{
    agenda, agenda_range, parse_day_id, parse_day_view_date, AgendaBucket, CalendarDay, DayVariant,
    DayView, Event, GridConfig,
};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "calgrid",
    version,
    about = "Calendar month/day/agenda layout CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with grid settings (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Date to treat as today, YYYY-MM-DD (defaults to the clock in the configured timezone)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Month block containing a day
    Month {
        /// Day id, DD-Mon-YYYY (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Weeks following the last rendered day of the month view
    Extend {
        /// Day id of the last rendered day, DD-Mon-YYYY
        last_day: String,
    },
    /// Events of one day placed on the quarter-hour grid
    Day {
        /// Date to show, YYYY-MM-DD
        date: String,
        /// Events JSON file ("-" reads stdin; no events if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Events grouped by date over a range
    Agenda {
        /// First date, YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,
        /// Last date, YYYY-MM-DD
        #[arg(long)]
        end: Option<String>,
        /// Number of days from today (overrides --start/--end)
        #[arg(long)]
        days: Option<u32>,
        /// Events JSON file ("-" reads stdin; no events if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// JSON output shapes
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DayDto {
    date: NaiveDate,
    id: String,
    label: String,
    short_date: String,
    name: String,
    variant: DayVariant,
    style: &'static DayStyle,
}

impl From<&CalendarDay> for DayDto {
    fn from(day: &CalendarDay) -> Self {
        Self {
            date: day.date,
            id: day.id(),
            label: day.label(),
            short_date: day.short_date(),
            name: day.name.clone(),
            variant: day.variant,
            style: day.style,
        }
    }
}

#[derive(Serialize)]
struct MonthDto {
    today: DayDto,
    week_days: Vec<String>,
    weeks: Vec<Vec<DayDto>>,
}

#[derive(Serialize)]
struct AgendaDto<'a> {
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(flatten)]
    bucket: &'a AgendaBucket,
}

fn weeks_dto(weeks: &[Week]) -> Vec<Vec<DayDto>> {
    weeks
        .iter()
        .map(|week| week.days.iter().map(DayDto::from).collect())
        .collect()
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let today = resolve_today(cli.today.as_deref(), &config)?;
    tracing::debug!(%today, "resolved today");

    let json = match cli.command {
        Commands::Month { date } => {
            let reference = match date {
                Some(id) => parse_day_id(&id).context("Invalid --date")?,
                None => today,
            };
            let block = month_block_for(reference, today, &config);
            let dto = MonthDto {
                today: DayDto::from(&grid_engine::classify(today, today)),
                week_days: weekday_names(config.week_start),
                weeks: weeks_dto(&block.weeks),
            };
            serde_json::to_string_pretty(&dto)?
        }
        Commands::Extend { last_day } => {
            let last_day = parse_day_id(&last_day).context("Invalid last day")?;
            let weeks = extend_weeks(last_day, config.scroll_days, today);
            serde_json::to_string_pretty(&weeks_dto(&weeks))?
        }
        Commands::Day { date, input } => {
            let date = parse_day_view_date(&date).context("Invalid day-view date")?;
            let events = read_events(input.as_deref())?;
            let view = DayView::build(date, &events, &config);
            serde_json::to_string_pretty(&view)?
        }
        Commands::Agenda {
            start,
            end,
            days,
            input,
        } => {
            let start = start
                .as_deref()
                .map(parse_day_view_date)
                .transpose()
                .context("Invalid --start")?;
            let end = end
                .as_deref()
                .map(parse_day_view_date)
                .transpose()
                .context("Invalid --end")?;
            let (start_date, end_date) =
                agenda_range(start, end, days, today).context("Invalid --days")?;

            let mut events = read_events(input.as_deref())?;
            grid_engine::event::sort_by_start(&mut events);
            let bucket = agenda(&events, Some(start_date), Some(end_date));

            serde_json::to_string_pretty(&AgendaDto {
                start_date,
                end_date,
                bucket: &bucket,
            })?
        }
    };

    write_output(cli.output.as_deref(), &json)
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(path: Option<&str>) -> Result<GridConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            toml::from_str(&raw).with_context(|| format!("Failed to parse config: {}", path))?
        }
        None => GridConfig::default(),
    };
    config.validate().context("Invalid grid configuration")?;
    Ok(config)
}

fn resolve_today(today: Option<&str>, config: &GridConfig) -> Result<NaiveDate> {
    match today {
        Some(raw) => parse_day_view_date(raw).context("Invalid --today"),
        None => config
            .today_at(Utc::now())
            .context("Failed to determine today's date"),
    }
}

fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let raw = match path {
        None => return Ok(Vec::new()),
        Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
    };
    serde_json::from_str(&raw).context("Failed to parse events JSON")
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
