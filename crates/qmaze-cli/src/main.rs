//! qmaze Command-Line Interface
//!
//! Runs the maze-superposition and quantum-walk programs on the local
//! simulator and prints or plots the measured counts.
//!
//! ```text
//! qmaze maze --seed 7 --plot maze.svg
//! qmaze walk --steps 5 --shots 2000 --format json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use qmaze_demos::circuits::{DEFAULT_WALK_STEPS, WALK_SHOTS};
use qmaze_hal::DEFAULT_SHOTS;

mod commands;

use commands::common::{OutputFormat, RunOptions};
use commands::{backends, maze, version, walk};

/// qmaze - quantum maze and walk demos on a local simulator
#[derive(Parser)]
#[command(name = "qmaze")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore every path of a three-qubit maze in superposition
    Maze {
        /// Number of shots
        #[arg(short, long, env = "QMAZE_SHOTS", default_value_t = DEFAULT_SHOTS)]
        shots: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run the four-qubit quantum walk
    Walk {
        /// Number of walk steps
        #[arg(long, default_value_t = DEFAULT_WALK_STEPS)]
        steps: usize,

        /// Number of shots
        #[arg(short, long, env = "QMAZE_SHOTS", default_value_t = WALK_SHOTS)]
        shots: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List available backends
    Backends,

    /// Show version information
    Version,
}

#[derive(Args)]
struct OutputArgs {
    /// Seed for measurement sampling
    #[arg(long, env = "QMAZE_SEED")]
    seed: Option<u64>,

    /// Write a histogram of the counts to this SVG file
    #[arg(long, value_name = "FILE.svg")]
    plot: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl From<OutputArgs> for RunOptions {
    fn from(args: OutputArgs) -> Self {
        Self {
            seed: args.seed,
            plot: args.plot,
            format: args.format,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Maze { shots, output } => maze::execute(shots, &output.into()).await,

        Commands::Walk {
            steps,
            shots,
            output,
        } => walk::execute(steps, shots, &output.into()).await,

        Commands::Backends => backends::execute().await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
