use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{CellCount, Coord};

use command::Command;
use session::{Flow, Session};
use settings::{Overrides, Settings};

mod command;
mod render;
mod session;
mod settings;

/// Play Minesweeper in the terminal.
///
/// Commands: `r <row> <col>` reveals, `f <row> <col>` toggles a flag, `n` starts a new game,
/// `q` quits. An empty line redraws the board.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of rows
    #[arg(long)]
    rows: Option<Coord>,
    /// Number of columns
    #[arg(long)]
    cols: Option<Coord>,
    /// Number of mines, must leave at least one safe cell
    #[arg(long)]
    mines: Option<CellCount>,
    /// Seed for mine placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with `rows`, `cols`, `mines` and `seed` keys
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn init_logging(level: log::LevelFilter) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    // also installs the bridge for `log` records
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_overrides(Overrides {
        rows: args.rows,
        cols: args.cols,
        mines: args.mines,
        seed: args.seed,
    });
    let mut session = settings
        .game_config()
        .and_then(|config| Session::new(config, settings.seed))
        .context("cannot start a game with these settings")?;
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render::render(session.board()))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        let applied = line
            .parse::<Command>()
            .map_err(anyhow::Error::from)
            .and_then(|command| Ok(session.apply(command)?));

        match applied {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => writeln!(stdout, "error: {err}")?,
        }
        write!(stdout, "{}", render::render(session.board()))?;
        stdout.flush()?;
    }

    Ok(())
}
