//! Command-line front end: prints the summary view and writes chart SVGs for
//! a JSON file of transactions.

use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, NaiveTime};
use colored::Colorize;
use thiserror::Error;
use tracing::info;

use crate::{
    chart::{build_pie_slices, render},
    config::{Config, ConfigError, ConfigManager},
    core::{services::RangeSelector, Clock, FixedClock, SystemClock},
    currency::format_amount,
    domain::TransactionKind,
    errors::LedgerError,
    state::AppState,
    utils::export::import_file,
};

const USAGE: &str = "\
Usage:
  spendwise summary <transactions.json> [options]
  spendwise chart <transactions.json> <out_dir> [options]
  spendwise help

Options:
  --kind <expense|income>   report kind for the category breakdown
  --search <text>           filter the listed entries by title or category
  --range <all|7d|30d>      recency filter for the listed entries
  --today <YYYY-MM-DD>      reference date for the recency filter
  --config <path>           configuration file (defaults to the user config dir)";

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Usage(String),
}

fn usage(message: impl std::fmt::Display) -> CliError {
    CliError::Usage(format!("{message}\n\n{USAGE}"))
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Summary { input: PathBuf },
    Chart { input: PathBuf, out_dir: PathBuf },
    Help,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Options {
    kind: Option<TransactionKind>,
    search: Option<String>,
    range: Option<RangeSelector>,
    today: Option<NaiveDate>,
    config: Option<PathBuf>,
}

/// Entry point used by the `spendwise` binary.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &SystemClock, &mut out)
}

/// Runs one command against `args` (program name excluded).
pub fn run(args: &[String], clock: &dyn Clock, out: &mut dyn Write) -> Result<(), CliError> {
    let (command, options) = parse_args(args)?;
    match command {
        Command::Help => {
            writeln!(out, "{USAGE}")?;
            Ok(())
        }
        Command::Summary { input } => {
            let (state, config) = load_state(&input, &options)?;
            match options.today {
                Some(date) => {
                    let pinned = FixedClock(date.and_time(NaiveTime::MIN).and_utc());
                    print_summary(&state, &config, &pinned, out)
                }
                None => print_summary(&state, &config, clock, out),
            }
        }
        Command::Chart { input, out_dir } => {
            let (state, config) = load_state(&input, &options)?;
            write_charts(&state, &config, &out_dir, out)
        }
    }
}

fn parse_args(args: &[String]) -> Result<(Command, Options), CliError> {
    let mut positional = Vec::new();
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| usage(format!("missing value for {flag}")))
        };
        match arg.as_str() {
            "--kind" => {
                let raw = value("--kind")?;
                options.kind = Some(
                    TransactionKind::from_str(&raw)
                        .ok_or_else(|| usage(format!("unknown kind `{raw}`")))?,
                );
            }
            "--search" => options.search = Some(value("--search")?),
            "--range" => {
                let raw = value("--range")?;
                options.range = Some(
                    RangeSelector::from_str(&raw)
                        .ok_or_else(|| usage(format!("unknown range `{raw}`")))?,
                );
            }
            "--today" => {
                let raw = value("--today")?;
                options.today = Some(
                    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .map_err(|_| usage(format!("invalid date `{raw}`")))?,
                );
            }
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            flag if flag.starts_with("--") => {
                return Err(usage(format!("unknown option `{flag}`")));
            }
            _ => positional.push(arg.clone()),
        }
    }

    let command = match positional.as_slice() {
        [] => Command::Help,
        [cmd] if cmd == "help" => Command::Help,
        [cmd, input] if cmd == "summary" => Command::Summary {
            input: PathBuf::from(input),
        },
        [cmd, input, out_dir] if cmd == "chart" => Command::Chart {
            input: PathBuf::from(input),
            out_dir: PathBuf::from(out_dir),
        },
        [cmd, ..] => return Err(usage(format!("unexpected arguments for `{cmd}`"))),
    };
    Ok((command, options))
}

fn load_state(input: &Path, options: &Options) -> Result<(AppState, Config), CliError> {
    let config = match &options.config {
        Some(path) => ConfigManager::new(path.clone()).load()?,
        None => ConfigManager::default_location().load()?,
    };
    let ledger = import_file(input)?;
    info!(entries = ledger.len(), path = %input.display(), "transactions imported");

    let mut state = AppState::from_config(&config)?.with_ledger(ledger);
    if let Some(kind) = options.kind {
        state.report_kind = kind;
    }
    if let Some(range) = options.range {
        state.range = range;
    }
    if let Some(search) = &options.search {
        state.search = search.clone();
    }
    Ok((state, config))
}

fn print_summary(
    state: &AppState,
    config: &Config,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let view = state.aggregate_view(clock.now());
    let money = |amount: f64| format_amount(amount, &config.currency, &config.locale);

    let status = format!("{:?}", view.balance_status);
    let status = if view.net_balance < 0.0 {
        status.green()
    } else {
        status.red()
    };
    writeln!(out, "Net balance: {} ({})", money(view.net_balance.abs()), status)?;
    writeln!(out, "Income: {}", money(view.total_income))?;
    writeln!(out, "Expense: {}", money(view.total_expense))?;
    writeln!(
        out,
        "Goal {}: {} saved, {:.0}% of {}",
        state.goal.title,
        money(view.net_savings),
        view.goal_progress_percent,
        money(state.goal.target)
    )?;
    let budget_line = format!(
        "Budget used: {:.0}% ({} remaining)",
        view.budget_progress_percent,
        money(view.budget_remaining)
    );
    if view.budget_warning {
        writeln!(out, "{}", budget_line.red())?;
    } else {
        writeln!(out, "{budget_line}")?;
    }

    writeln!(out)?;
    writeln!(out, "Top {} categories:", view.report_kind)?;
    let kind_total = match view.report_kind {
        TransactionKind::Expense => view.total_expense,
        TransactionKind::Income => view.total_income,
    };
    for slice in build_pie_slices(&view.category_breakdown, kind_total) {
        writeln!(
            out,
            "  {:<14} {:>14} {:>5.1}%",
            slice.category.label(),
            money(slice.amount),
            slice.percent()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Entries ({}):", state.range)?;
    for group in &view.grouped {
        writeln!(out, "  {}", group.date.format("%Y-%m-%d").to_string().bold())?;
        for txn in &group.transactions {
            let sign = if txn.is_income() { '+' } else { '-' };
            writeln!(
                out,
                "    {:<24} {:<14} {}{}",
                txn.title,
                txn.category.label(),
                sign,
                money(txn.amount)
            )?;
        }
    }
    Ok(())
}

fn write_charts(
    state: &AppState,
    config: &Config,
    out_dir: &Path,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let viewport = config.chart.viewport();
    let geometry = state.chart_geometry(&viewport);
    fs::create_dir_all(out_dir)?;

    let trend_path = out_dir.join("trend.svg");
    // mark the latest running balance
    let latest = geometry.trend_path.anchors().last().copied();
    let trend = render::render_trend(&geometry.trend_path, &viewport, latest);
    fs::write(&trend_path, trend.to_string())?;

    let pie_path = out_dir.join("pie.svg");
    fs::write(&pie_path, render::render_pie(&geometry.pie_slices).to_string())?;

    info!(dir = %out_dir.display(), "charts written");
    writeln!(out, "Wrote {}", trend_path.display())?;
    writeln!(out, "Wrote {}", pie_path.display())?;
    Ok(())
}
