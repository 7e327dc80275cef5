//! Terminal Game of Life runner (default binary).
//!
//! Seeds a board, then shows one generation per tick on the alternate screen
//! (or as plain text with `--print`). Settings missing from the command line
//! are asked for interactively when stdin is a terminal.

mod pacer;

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_life::config::{load_layout, seed_spec};
use tui_life::core::SimpleRng;
use tui_life::engine::{Driver, DriverConfig, RunSummary, SleepPacer};
use tui_life::input::{prompt_iterations, prompt_selection};
use tui_life::term::{Glyphs, PlainDisplay, TerminalDisplay};
use tui_life::types::{SeedMode, DEFAULT_COLS, DEFAULT_ITERATIONS, DEFAULT_ROWS, TICK_MS};

use pacer::KeyboardPacer;

#[derive(Parser, Debug)]
#[command(name = "tui-life")]
#[command(version)]
#[command(about = "Conway's Game of Life on a wraparound grid, in the terminal", long_about = None)]
struct Cli {
    /// Initial board: random or curated (asked when omitted)
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<SeedMode>,

    /// Generations to show, 1-10000 (asked when omitted)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    iterations: Option<u32>,

    /// Grid height in cells
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Live-cell probability for random boards and random patches
    #[arg(short, long)]
    density: Option<f64>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u32>,

    /// Delay between generations in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    delay_ms: u64,

    /// TOML file describing pattern placements (overrides --mode)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Print frames to stdout instead of driving the terminal
    #[arg(short, long)]
    print: bool,

    /// Draw live cells with '#' instead of a unicode circle
    #[arg(long)]
    ascii: bool,

    /// Leave the terminal window size alone
    #[arg(long)]
    no_resize: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<SeedMode, String> {
    SeedMode::from_str(s).ok_or_else(|| format!("unknown mode '{s}' (expected random or curated)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), cli.print)?;

    let layout = cli.layout.as_deref().map(load_layout).transpose()?;
    let (mode, iterations) = resolve_choices(&cli, layout.is_some())?;
    if layout.is_some() && cli.mode.is_some() {
        warn!("--layout given; ignoring --mode {}", mode.as_str());
    }

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, mode = mode.as_str(), "seeding board");
    let spec = seed_spec(mode, cli.rows, cli.cols, cli.density, layout);
    let grid = spec
        .build(&mut SimpleRng::new(seed))
        .context("building the initial board")?;

    let config = DriverConfig {
        iterations,
        delay: Duration::from_millis(cli.delay_ms),
        glyphs: if cli.ascii { Glyphs::ascii() } else { Glyphs::default() },
        resize: !cli.no_resize && !cli.print,
    };
    let mut driver = Driver::new(grid, config);

    if cli.print {
        let mut display = PlainDisplay::new(io::stdout().lock());
        driver.run(&mut display, &mut SleepPacer)?;
        return Ok(());
    }

    let mut display = TerminalDisplay::new();
    display.enter()?;
    let result = driver.run(&mut display, &mut KeyboardPacer::new());

    // Always try to restore terminal state.
    let _ = display.exit();
    report(&result?, iterations, seed);
    Ok(())
}

/// Seed mode and iteration count, from flags or prompts.
fn resolve_choices(cli: &Cli, have_layout: bool) -> Result<(SeedMode, u32)> {
    let interactive = io::stdin().is_terminal();
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let mode = match cli.mode {
        Some(mode) => mode,
        None if have_layout || !interactive => SeedMode::Curated,
        None => prompt_selection(&mut input, &mut output)?,
    };
    let iterations = match cli.iterations {
        Some(n) => n,
        None if !interactive => DEFAULT_ITERATIONS,
        None => prompt_iterations(&mut input, &mut output)?,
    };
    Ok((mode, iterations))
}

fn report(summary: &RunSummary, iterations: u32, seed: u32) {
    if summary.stopped_early {
        println!(
            "Stopped after {} of {} iterations; {} cells alive in the last frame (seed {seed}).",
            summary.frames, iterations, summary.population
        );
    } else {
        println!(
            "Ran {} iterations; {} cells alive in the last frame (seed {seed}).",
            summary.frames, summary.population
        );
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Logs go to `log_file` when given. Without one they go to stderr in print
/// mode and are off on the alternate screen, unless `RUST_LOG` says otherwise.
fn init_tracing(log_file: Option<&Path>, print: bool) -> Result<()> {
    let default_directives = if log_file.is_some() || print {
        "tui_life=info,tui_life_engine=info"
    } else {
        "off"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_full_flag_set() {
        let cli = Cli::try_parse_from([
            "tui-life", "-m", "random", "-n", "50", "-r", "20", "-c", "30", "-d", "0.4", "-s",
            "7", "--delay-ms", "0", "--print", "--ascii",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(SeedMode::Random));
        assert_eq!(cli.iterations, Some(50));
        assert_eq!((cli.rows, cli.cols), (20, 30));
        assert_eq!(cli.density, Some(0.4));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.delay_ms, 0);
        assert!(cli.print && cli.ascii);
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["tui-life"]).unwrap();
        assert_eq!(cli.mode, None);
        assert_eq!(cli.iterations, None);
        assert_eq!((cli.rows, cli.cols), (DEFAULT_ROWS, DEFAULT_COLS));
        assert_eq!(cli.delay_ms, TICK_MS);
    }

    #[test]
    fn cli_rejects_out_of_range_iterations() {
        assert!(Cli::try_parse_from(["tui-life", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["tui-life", "-n", "10001"]).is_err());
    }

    #[test]
    fn cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tui-life", "--mode", "gliders"]).is_err());
    }
}
