//! polybound Command Line Interface
//!
//! Usage:
//!   polybound [OPTIONS] <input-file>
//!   polybound --help
//!
//! Examples:
//!   polybound tile.json                       # Bound pairs on set dimension 0
//!   polybound --dim-type=param --pos=1 s.json # Bound pairs on parameter 1
//!   polybound --defining --pos=2 s.json       # Defining equality/inequalities
//!
//! The input is a JSON description of one basic set:
//!
//! ```text
//! { "n_param": 1, "n_dim": 1,
//!   "equalities": [],
//!   "inequalities": [[0, 0, 1], [0, 1, -1]] }
//! ```
//!
//! Each row holds the constant term followed by one coefficient per
//! parameter and then one per set dimension.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use polybound::prelude::*;
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::ops::ControlFlow;
use std::path::PathBuf;

/// polybound - Bound-pair enumeration on integer constraint systems
#[derive(Parser, Debug)]
#[command(name = "polybound")]
#[command(version)]
#[command(about = "Enumerate active bound pairs of a dimension of a basic set", long_about = None)]
struct Cli {
    /// Input file (JSON basic set)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Kind of the target dimension
    #[arg(long, default_value = "set")]
    dim_type: DimTypeArg,

    /// Position of the target dimension among those of its kind
    #[arg(short, long, default_value_t = 0)]
    pos: usize,

    /// Report defining equality/inequalities instead of bound pairs
    #[arg(long)]
    defining: bool,

    /// Row limit for the integer emptiness test
    #[arg(long, default_value_t = Options::default().fm_row_limit)]
    fm_row_limit: usize,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress warnings)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DimTypeArg {
    /// Parameter dimension
    Param,
    /// Set dimension
    Set,
}

impl From<DimTypeArg> for DimType {
    fn from(arg: DimTypeArg) -> Self {
        match arg {
            DimTypeArg::Param => DimType::Param,
            DimTypeArg::Set => DimType::SET,
        }
    }
}

/// A basic set as read from disk.
#[derive(Debug, Deserialize)]
struct SetDescription {
    n_param: usize,
    n_dim: usize,
    #[serde(default)]
    equalities: Vec<Vec<i64>>,
    #[serde(default)]
    inequalities: Vec<Vec<i64>>,
}

impl SetDescription {
    fn into_basic_set(self, options: Options) -> Result<BasicSet> {
        let space = Space::set(self.n_param, self.n_dim);
        let eqs = self.equalities.iter().map(|r| from_i64(r)).collect();
        let ineqs = self.inequalities.iter().map(|r| from_i64(r)).collect();
        let bset = BasicSet::from_rows(space, eqs, ineqs)
            .context("Malformed constraint rows")?
            .with_options(options);
        Ok(bset.finalize())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    info!("polybound v{}", polybound::VERSION);
    debug!("Input file: {:?}", cli.input);

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {:?}", cli.input))?;
    let description: SetDescription =
        serde_json::from_str(&source).with_context(|| "Failed to parse input")?;
    let options = Options::new().fm_row_limit(cli.fm_row_limit);
    let bset = description.into_basic_set(options)?;
    info!("Read {}", bset);

    let dim_type = DimType::from(cli.dim_type);
    let report = if cli.defining {
        defining_report(&bset, dim_type, cli.pos)?
    } else {
        bound_pair_report(&bset, dim_type, cli.pos)?
    };
    write_output(&cli.output, &report)
}

fn defining_report(bset: &BasicSet, dim_type: DimType, pos: usize) -> Result<String> {
    let mut out = String::new();
    match bset.has_defining_equality(dim_type, pos)? {
        Some(eq) => writeln!(out, "defining equality: {}", eq)?,
        None => writeln!(out, "defining equality: none")?,
    }
    match bset.has_defining_inequalities(dim_type, pos)? {
        Some((lower, upper)) => {
            writeln!(out, "defining inequalities: {} and {}", lower, upper)?
        }
        None => writeln!(out, "defining inequalities: none")?,
    }
    Ok(out)
}

fn bound_pair_report(bset: &BasicSet, dim_type: DimType, pos: usize) -> Result<String> {
    let mut out = String::new();
    let mut failure = None;
    let done = bset.foreach_bound_pair(dim_type, pos, |pair| {
        match writeln!(out, "{}", pair) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                failure = Some(e);
                ControlFlow::Break(())
            }
        }
    })?;
    if let Some(e) = failure {
        bail!("Failed to format bound pair: {}", e);
    }
    debug!("Enumeration finished: {:?}", done);
    if out.is_empty() {
        out.push_str("no active bound pairs\n");
    }
    Ok(out)
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content)
                .with_context(|| format!("Failed to write output file: {:?}", p))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
