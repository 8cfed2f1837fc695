//! Runner for the Strassen strategies: generate input, time each strategy,
//! check they all agree.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use strassen::generate::random_pair;
use strassen::io::{read_pair, write_pair};
use strassen::{
    DEFAULT_THRESHOLD, Matrix, Mismatch, Result, StrassenConfig, Strategy, direct_with,
    first_mismatch, multiply_with,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "strassen",
    about = "Time naive, cached and SIMD Strassen multiplication",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random matrix pair in the input format
    Gen {
        /// Matrix side length
        side: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Read a matrix pair and time every strategy on it
    Run {
        /// Input file (stdin when omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Generate a random pair in memory and time every strategy on it
    Bench {
        /// Matrix side length
        side: usize,
        /// Seed for reproducible input
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        opts: RunOpts,
    },
}

#[derive(Args)]
struct RunOpts {
    /// Sides at or below this go straight to the base-case kernel
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,
    /// Recursion levels whose products run on their own threads (0 = off,
    /// capped by the available cores)
    #[arg(long, default_value_t = 0)]
    parallel_depth: usize,
    /// Strategy to time; repeat for several (default: all)
    #[arg(long = "strategy", value_enum)]
    strategies: Vec<StrategyArg>,
    /// Skip the base-case-only runs
    #[arg(long)]
    no_direct: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Naive,
    Cached,
    Simd,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Naive => Strategy::Naive,
            StrategyArg::Cached => Strategy::Cached,
            StrategyArg::Simd => Strategy::Simd,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strassen=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match execute(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every strategy agreed.
fn execute(command: Commands) -> Result<bool> {
    match command {
        Commands::Gen { side, seed } => {
            let (left, right) = random_pair(side, seed);
            let mut out = BufWriter::new(io::stdout().lock());
            write_pair(&mut out, &left, &right)?;
            out.flush()?;
            Ok(true)
        }
        Commands::Run { input, opts } => {
            let start = Instant::now();
            let (left, right) = match &input {
                Some(path) => read_pair(BufReader::new(File::open(path)?))?,
                None => read_pair(io::stdin().lock())?,
            };
            println!("Read time: {:.2} ms", ms_since(start));
            report(&left, &right, &opts)
        }
        Commands::Bench { side, seed, opts } => {
            let start = Instant::now();
            let (left, right) = random_pair(side, seed);
            println!("Generate time: {:.2} ms", ms_since(start));
            report(&left, &right, &opts)
        }
    }
}

fn report(left: &Matrix, right: &Matrix, opts: &RunOpts) -> Result<bool> {
    let config = StrassenConfig {
        threshold: opts.threshold,
        parallel_depth: opts.parallel_depth,
    };
    config.validate()?;

    let strategies: Vec<Strategy> = if opts.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        opts.strategies.iter().copied().map(Strategy::from).collect()
    };
    info!(
        side = left.side(),
        threshold = config.threshold,
        parallel_depth = config.parallel_depth,
        "timing {} strategies",
        strategies.len()
    );

    println!("\n=== Matrix: {}×{} ===", left.side(), left.side());
    println!("{}", "-".repeat(50));

    let mut baseline: Option<(String, Matrix)> = None;
    let mut timings: Vec<(String, f64)> = Vec::new();
    let mut all_ok = true;

    for strategy in strategies {
        if !opts.no_direct {
            let label = format!("{strategy} direct");
            let (res, ms) = timed(|| direct_with(strategy, left, right))?;
            all_ok &= record(&label, res, ms, &mut baseline, &mut timings);
        }
        let label = format!("{strategy} strassen");
        let (res, ms) = timed(|| multiply_with(strategy, &config, left, right))?;
        all_ok &= record(&label, res, ms, &mut baseline, &mut timings);
    }

    print_summary(&timings);
    Ok(all_ok)
}

/// Print the timing line, compare against the first result seen.
fn record(
    label: &str,
    res: Matrix,
    ms: f64,
    baseline: &mut Option<(String, Matrix)>,
    timings: &mut Vec<(String, f64)>,
) -> bool {
    println!("{label} time: {ms:.2} ms");
    timings.push((label.to_string(), ms));

    let Some((base_label, expected)) = baseline.as_ref() else {
        debug!(label, "baseline result");
        *baseline = Some((label.to_string(), res));
        return true;
    };
    match first_mismatch(expected, &res) {
        None => {
            println!("{label} works!");
            true
        }
        Some(Mismatch::Side { left, right }) => {
            println!("{label} failed! side {right} vs {left} from {base_label}");
            false
        }
        Some(Mismatch::Cell {
            row,
            col,
            left,
            right,
        }) => {
            println!("{label} failed! [{row}][{col}] = {right}, {base_label} gave {left}");
            false
        }
    }
}

fn timed<F>(f: F) -> Result<(Matrix, f64)>
where
    F: FnOnce() -> Result<Matrix>,
{
    let start = Instant::now();
    let res = f()?;
    Ok((res, ms_since(start)))
}

fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn print_summary(timings: &[(String, f64)]) {
    let Some(&(_, baseline_ms)) = timings.first() else {
        return;
    };

    println!("\n{}", "=".repeat(50));
    println!("SUMMARY");
    println!("{}", "=".repeat(50));
    println!("{:<22} {:>12} {:>12}", "Method", "Time (ms)", "Speedup");
    println!("{}", "-".repeat(50));
    for (label, ms) in timings {
        println!("{:<22} {:>12.2} {:>11.1}×", label, ms, baseline_ms / ms.max(f64::EPSILON));
    }
    println!("{}", "=".repeat(50));
    println!("\nSpeedup relative to {}. Higher is better.\n", timings[0].0);
}
