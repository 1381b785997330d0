//! # perc
//!
//! Reads a network, runs Newman-Ziff node percolation and prints one line
//! per occupation step: `fraction mean stderr`.
//!
//! ## Usage
//!
//! ```text
//! perc 1234567890 < network.txt
//! perc 42 --trials 500 --format edge-list --input karate.edges -v
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_percolation::config::{SimulationConfig, DEFAULT_TRIALS};
use u_percolation::network::Network;
use u_percolation::output::write_table;
use u_percolation::percolation::simulate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `N M`, N degrees, then M edges with 0-based indices
    Native,
    /// One `label label` pair per line
    EdgeList,
}

#[derive(Debug, Parser)]
#[command(name = "perc", version)]
#[command(about = "Largest-cluster size under random node percolation (Newman-Ziff)")]
struct Cli {
    /// Initial state of the random generator
    seed: u64,

    /// Number of random activation orders to average over
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: u32,

    /// Network file; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value_t = Format::Native)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SimulationConfig::new(cli.seed).with_trials(cli.trials);
    config.validate()?;

    let network = load_network(&cli)?;
    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        "network loaded"
    );

    let started = Instant::now();
    let table = simulate(&network, &config)?;
    info!(elapsed = ?started.elapsed(), "percolation finished");

    write_table(io::stdout().lock(), &table).wrap_err("failed to write results")?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_network(cli: &Cli) -> Result<Network> {
    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let network = match cli.format {
        Format::Native => Network::read_native(reader),
        Format::EdgeList => Network::read_edge_list(reader),
    };
    network.wrap_err("failed to load network")
}
