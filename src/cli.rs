use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bridge_repair::solver::DEFAULT_MAX_OPERANDS;
use bridge_repair::{CalibrationSolver, OperatorSet, SolverConfig, parse_equations};
use clap::{Parser, ValueEnum};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Bridge Repair - total the calibration equations that can be satisfied
#[derive(Parser, Debug)]
#[command(name = "bridge-repair")]
#[command(
    about = "Sum the targets of calibration equations reachable with +, * and digit concatenation"
)]
#[command(version)]
pub struct CliArgs {
    /// Input file with one "<target>: <operands...>" equation per line ("-" for stdin)
    #[arg(default_value = "data/day7.txt")]
    pub input: PathBuf,

    /// Only report the total for this operator set
    #[arg(short, long, value_enum)]
    pub operators: Option<OperatorSet>,

    /// Refuse equations with more operands than this
    #[arg(short, long, default_value_t = DEFAULT_MAX_OPERANDS)]
    pub max_operands: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Part label and operator set for every total to report, in output order
pub fn parts(selected: Option<OperatorSet>) -> Vec<(u8, OperatorSet)> {
    [
        (1, OperatorSet::AddMultiply),
        (2, OperatorSet::AddMultiplyConcat),
    ]
    .into_iter()
    .filter(|(_, operators)| selected.is_none_or(|s| s == *operators))
    .collect()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    info!("Reading calibration equations from {}", args.input.display());
    let text = read_input(&args.input)?;
    let equations = parse_equations(&text).context("Invalid calibration input")?;

    let solver = CalibrationSolver::new(SolverConfig {
        max_operands: args.max_operands,
    });

    // Compute everything before printing so a failure leaves no partial output.
    let totals = parts(args.operators)
        .into_iter()
        .map(|(label, operators)| {
            solver
                .calibration_total(&equations, operators)
                .map(|total| (label, total))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (label, total) in totals {
        println!("{}: {}", label, total);
    }
    Ok(())
}
