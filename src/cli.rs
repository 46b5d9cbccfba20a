use crate::config::{Config, load_config};
use crate::ir::{Dimension, Position, Rect};
use crate::placement::{PlacementOptions, StrategyName, calculate_child_position_with};
use crate::placement_dump::{PlacementReport, write_placement_report};
use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "placer",
    version,
    about = "Position a tooltip or popover next to its anchor inside a viewport"
)]
pub struct Args {
    /// Request file (JSON) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the resolved position. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config file (JSON5) with default strategy and gap
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Placement strategy, e.g. "top" or "bottom left"
    #[arg(short = 's', long = "strategy")]
    pub strategy: Option<StrategyName>,

    /// Spacing between anchor and child
    #[arg(short = 'g', long = "gap")]
    pub gap: Option<f32>,

    /// Write a report of every candidate considered to this file
    #[arg(long = "explain")]
    pub explain: Option<PathBuf>,

    /// Print the known strategy names and exit
    #[arg(long = "list")]
    pub list: bool,
}

/// One positioning request as produced by a UI layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub strategy: Option<String>,
    pub parent: Rect,
    pub child: Dimension,
    pub viewport: Dimension,
    pub gap: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Resolved {
    strategy: StrategyName,
    options: PlacementOptions,
}

pub fn run() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for name in StrategyName::ALL {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let request: Request = serde_json::from_str(&input)?;

    let resolved = resolve(&config, &request, &args)?;
    let position = place(&resolved, &request, args.explain.as_deref())?;

    write_output(&position, args.output.as_deref())
}

/// Merge strategy and gap: config file, then request, then command-line flags.
fn resolve(config: &Config, request: &Request, args: &Args) -> Result<Resolved> {
    let mut resolved = Resolved {
        strategy: config.placement.strategy,
        options: config.placement.options(),
    };
    if let Some(name) = request.strategy.as_deref() {
        resolved.strategy = name.parse()?;
    }
    if let Some(gap) = request.gap {
        resolved.options.gap = gap;
    }
    if let Some(strategy) = args.strategy {
        resolved.strategy = strategy;
    }
    if let Some(gap) = args.gap {
        resolved.options.gap = gap;
    }
    Ok(resolved)
}

fn place(resolved: &Resolved, request: &Request, explain: Option<&Path>) -> Result<Position> {
    let position = calculate_child_position_with(
        resolved.strategy,
        &request.parent,
        request.child,
        request.viewport,
        &resolved.options,
    );

    if let Some(path) = explain {
        let report = PlacementReport::explain(
            resolved.strategy,
            &request.parent,
            request.child,
            request.viewport,
            &resolved.options,
        );
        write_placement_report(path, &report)?;
    }
    Ok(position)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(position: &Position, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string(position)?;
    match output {
        Some(path) => std::fs::write(path, format!("{json}\n"))?,
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
