//! CLI frontend for the fusion cost estimator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fc",
    about = "Estimate what fusing an item up to a target tier will cost",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log simulation progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Monte Carlo estimate and print cost statistics
    Simulate {
        /// Item class (1 = cheapest)
        #[arg(short, long, default_value = "4")]
        class: u8,

        /// Target tier
        #[arg(short, long, default_value = "5")]
        tier: usize,

        /// Transfer step: none, plain, convergence
        #[arg(long, default_value = "convergence")]
        transfer: String,

        /// Number of trials
        #[arg(short = 'n', long, default_value = "100000")]
        trials: usize,

        /// RNG seed for a reproducible run
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Worker threads (default: one per CPU)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Abort if a single trial makes more fusion attempts than this
        #[arg(long)]
        max_attempts: Option<u64>,

        /// JSON cost model overriding the built-in economy
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Also draw a text histogram of trial costs
        #[arg(long)]
        histogram: bool,
    },

    /// Show the core-spend plan for every level of a class
    Policy {
        /// Item class (1 = cheapest)
        #[arg(short, long, default_value = "4")]
        class: u8,

        /// JSON cost model overriding the built-in economy
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the built-in cost model as JSON
    Defaults,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Simulate {
            class,
            tier,
            transfer,
            trials,
            seed,
            workers,
            max_attempts,
            config,
            json,
            histogram,
        } => commands::simulate::run(&commands::simulate::SimulateArgs {
            class,
            tier,
            transfer,
            trials,
            seed,
            workers,
            max_attempts,
            config,
            json,
            histogram,
        }),
        Commands::Policy { class, config } => commands::policy::run(class, config.as_deref()),
        Commands::Defaults => commands::defaults::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send tracing output to stderr, filtered by `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
