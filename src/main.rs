//! pagesim command-line driver.
//!
//! Generates one reference string (or takes a literal one via `--pages`),
//! sweeps it through each replacement policy over a range of frame counts,
//! and prints the hit rates.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pagesim::common::config::{
    DEFAULT_INSTRUCTIONS_PER_PAGE, DEFAULT_INSTRUCTION_COUNT, DEFAULT_LOWER_JUMP_PROBABILITY,
    DEFAULT_MAX_FRAMES, DEFAULT_MIN_FRAMES, DEFAULT_SEQUENTIAL_PROBABILITY,
};
use pagesim::{
    Experiment, ExperimentConfig, Policy, ReferenceString, ReportFormat, Result,
    WalkProbabilities,
};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Compare FIFO, LRU, OPT and NRU page-replacement hit rates",
    long_about = "Generate a synthetic instruction trace, map it to pages, and report each \
                  policy's hit rate across a sweep of frame counts.\n\nExamples:\n  \
                  pagesim --seed 42\n  \
                  pagesim --pages 1,2,3,4,1,2,5,1,2,3,4,5 --min-frames 1 --max-frames 5\n  \
                  pagesim --policy lru --policy opt --format csv --output sweep.csv"
)]
struct Cli {
    /// Number of instruction addresses to generate.
    #[arg(long, default_value_t = DEFAULT_INSTRUCTION_COUNT)]
    instructions: u32,

    /// Instructions per page.
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_PAGE)]
    page_size: u32,

    /// Smallest frame count in the sweep.
    #[arg(long, default_value_t = DEFAULT_MIN_FRAMES)]
    min_frames: usize,

    /// Largest frame count in the sweep (inclusive).
    #[arg(long, default_value_t = DEFAULT_MAX_FRAMES)]
    max_frames: usize,

    /// Generator seed. A time-derived seed is used (and reported) if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of executing the next sequential instruction.
    #[arg(long, default_value_t = DEFAULT_SEQUENTIAL_PROBABILITY)]
    sequential: f64,

    /// Probability of jumping to an address at or below the current one.
    #[arg(long, default_value_t = DEFAULT_LOWER_JUMP_PROBABILITY)]
    lower_jump: f64,

    /// Literal reference string, e.g. "1,2,3,1". Replaces the generator.
    #[arg(long)]
    pages: Option<String>,

    /// Policy to include (repeatable). Defaults to all four.
    #[arg(long = "policy")]
    policies: Vec<Policy>,

    /// Output format: table or csv.
    #[arg(long, default_value = "table")]
    format: ReportFormat,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run policies one after another instead of in parallel.
    #[arg(long)]
    serial: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "sweep failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = ExperimentConfig {
        instruction_count: cli.instructions,
        instructions_per_page: cli.page_size,
        min_frames: cli.min_frames,
        max_frames: cli.max_frames,
        probabilities: WalkProbabilities::new(cli.sequential, cli.lower_jump)?,
        seed: cli.seed.unwrap_or_else(time_seed),
        policies: if cli.policies.is_empty() {
            Policy::ALL.to_vec()
        } else {
            cli.policies
        },
        parallel: !cli.serial,
    };

    let experiment = match cli.pages {
        Some(list) => Experiment::with_reference(config, ReferenceString::parse(&list)?)?,
        None => Experiment::new(config)?,
    };
    let report = experiment.run();

    match cli.output {
        Some(path) => {
            report.write_to(&path, cli.format)?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{}", report.render(cli.format)),
    }
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
