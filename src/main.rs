//! Topopath - shortest-path and min-hop path cost analysis of an edge-list topology.

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use topopath::{
    error::{Error, ExitCode as TopoExitCode},
    input::{EdgeList, NodeId},
    logging,
    report::Report,
};

/// Compare the weighted shortest path between two nodes with every min-hop path.
#[derive(Parser, Debug)]
#[command(name = "topopath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge list describing the topology
    #[arg(long, short, env = "TOPOPATH_INPUT")]
    input: PathBuf,

    /// Node the paths start from
    #[arg(long, short, env = "TOPOPATH_SOURCE")]
    source: NodeId,

    /// Node the paths lead to
    #[arg(long, short, env = "TOPOPATH_DESTINATION")]
    destination: NodeId,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Log the progress of each phase
    #[arg(long, short)]
    verbose: bool,

    /// Log level or filter directive, overrides --verbose
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::from(TopoExitCode::Success as u8)
        }
        Err(err) => {
            eprintln!("error: {err:#}");

            let code = err
                .downcast_ref::<Error>()
                .map_or(TopoExitCode::Failure, Error::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let edges = EdgeList::read(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let report = Report::build(&edges, cli.source, cli.destination)?;

    let output = match cli.format {
        OutputFormat::Human => report.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };

    Ok(output)
}
