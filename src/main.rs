use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use shopcal::{CalendarState, NoMarks, DAYS_IN_WEEK};
use std::io::{self, Write};
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date, Weekday};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Width of a single day cell in the printed grid
const CELL_WIDTH: usize = 4;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        week_start: Weekday,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut week_start = Weekday::Monday;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('w') | Arg::Long("week-start") => {
                    week_start = parser.value()?.parse_with(parse_weekday)?;
                }
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date, week_start })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, week_start } => {
                let today = time::OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let mut calendar = CalendarState::new(today, week_start)
                    .context("today's month cannot be displayed")?;
                if let Some(date) = date {
                    calendar
                        .jump_to(date)
                        .with_context(|| format!("the month of {date} cannot be displayed"))?;
                }
                tracing::debug!(month = %calendar.month(), %week_start, "Printing month grid");
                let mut out = io::stdout().lock();
                for line in grid_lines(&calendar) {
                    writeln!(out, "{line}")?;
                }
                out.flush()?;
                Ok(())
            }
            Command::Help => {
                println!("Usage: shopcal [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Print the six-week grid for the month containing the given date");
                println!("(default: today)");
                println!();
                println!("Options:");
                println!("  -w, --week-start <DAY>");
                println!("                    Weekday of the first column [default: monday]");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid weekday: {0:?}")]
struct InvalidWeekday(String);

fn parse_weekday(s: &str) -> Result<Weekday, InvalidWeekday> {
    match s.to_ascii_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Monday),
        "tue" | "tuesday" => Ok(Weekday::Tuesday),
        "wed" | "wednesday" => Ok(Weekday::Wednesday),
        "thu" | "thursday" => Ok(Weekday::Thursday),
        "fri" | "friday" => Ok(Weekday::Friday),
        "sat" | "saturday" => Ok(Weekday::Saturday),
        "sun" | "sunday" => Ok(Weekday::Sunday),
        _ => Err(InvalidWeekday(s.to_owned())),
    }
}

/// Lay out the displayed month as text.  Today is shown in brackets and
/// days from neighboring months in parentheses.
fn grid_lines(calendar: &CalendarState) -> Vec<String> {
    let days = calendar.days(NoMarks);
    let mut lines = Vec::with_capacity(days.len() / DAYS_IN_WEEK + 2);
    lines.push(format!(
        "{:^width$}",
        calendar.month().to_string(),
        width = CELL_WIDTH * DAYS_IN_WEEK
    ));
    lines.push(
        calendar
            .weekdays()
            .iter()
            .map(|wd| format!(" {} ", wd.to_string().chars().take(2).collect::<String>()))
            .collect(),
    );
    for week in days.chunks(DAYS_IN_WEEK) {
        let row = week
            .iter()
            .map(|day| {
                let n = day.date.day();
                if day.is_today {
                    format!("[{n:2}]")
                } else if day.in_month {
                    format!(" {n:2} ")
                } else {
                    format!("({n:2})")
                }
            })
            .collect::<String>();
        lines.push(row);
    }
    for line in &mut lines {
        line.truncate(line.trim_end().len());
    }
    lines
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
    Command::from_parser(Parser::from_env())?.run()
}
