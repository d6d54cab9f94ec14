//! Command-line front end for the dead-position evaluator.
//!
//! `check` judges positions given as arguments, `batch` judges one position
//! per line from a file or stdin, `random` generates positions and judges them.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

use dead_position::dead_position::evaluator::{DeadPositionResult, LiveReason};
use dead_position::utils::batch::{evaluate_batch, BatchConfig, BatchEntry};
use dead_position::utils::fen_generator::state_to_fen;
use dead_position::utils::fen_parser::{parse_position, ParseMode};
use dead_position::utils::position_generator::{random_state, PositionGeneratorConfig};
use dead_position::utils::render_game_state::render_dead_state;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Decide whether king, pawn and bishop positions are dead"
)]
struct Cli {
    /// log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: log::LevelFilter,

    /// also append log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// judge the given position strings
    Check {
        positions: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// judge one position per line from a file (stdin when omitted)
    Batch {
        input: Option<PathBuf>,

        /// worker threads
        #[arg(long, default_value_t = 1)]
        threads: usize,

        /// only print the summary line
        #[arg(long)]
        summary_only: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// generate random king/pawn/bishop positions and judge them
    Random {
        #[arg(long, default_value_t = 10)]
        count: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long, default_value_t = 8)]
        max_pawns: u32,

        #[arg(long, default_value_t = 2)]
        max_bishops: u32,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct OutputArgs {
    /// reject malformed positions instead of reading them leniently
    #[arg(long)]
    strict: bool,

    /// print why a live position is alive
    #[arg(long)]
    explain: bool,

    /// print a board diagram under each verdict
    #[arg(long)]
    render: bool,
}

impl OutputArgs {
    fn mode(self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

fn setup_logging(level: log::LevelFilter, log_file: Option<&PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());
    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;
    Ok(())
}

fn write_verdict(
    out: &mut impl Write,
    line: &str,
    verdict: (DeadPositionResult, Option<LiveReason>),
    output: OutputArgs,
) -> io::Result<()> {
    let (result, reason) = verdict;
    write!(
        out,
        "{line}\tdead={} pawns={} bishops={}",
        result.dead, result.has_pawns, result.has_bishops
    )?;
    if let (true, Some(reason)) = (output.explain, reason) {
        write!(out, " reason={reason}")?;
    }
    writeln!(out)?;
    if output.render {
        writeln!(out, "{}", render_dead_state(&parse_position(line).state))?;
    }
    Ok(())
}

fn write_entry(out: &mut impl Write, entry: &BatchEntry, output: OutputArgs) -> io::Result<()> {
    match &entry.outcome {
        Ok(verdict) => write_verdict(out, &entry.line, *verdict, output),
        Err(err) => writeln!(out, "{}\terror={err}", entry.line),
    }
}

fn read_lines(input: Option<&PathBuf>) -> io::Result<Vec<String>> {
    match input {
        Some(path) => BufReader::new(File::open(path)?).lines().collect(),
        None => io::stdin().lock().lines().collect(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.log_level, cli.log_file.as_ref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Check { positions, output } => {
            let config = BatchConfig {
                mode: output.mode(),
                ..BatchConfig::default()
            };
            let report = evaluate_batch(&positions, &config);
            for entry in &report.entries {
                write_entry(&mut out, entry, output)?;
            }
        }
        Command::Batch {
            input,
            threads,
            summary_only,
            output,
        } => {
            let lines = read_lines(input.as_ref())?;
            log::info!("read {} lines", lines.len());
            let config = BatchConfig {
                mode: output.mode(),
                requested_threads: threads,
            };
            let report = evaluate_batch(&lines, &config);
            if !summary_only {
                for entry in &report.entries {
                    write_entry(&mut out, entry, output)?;
                }
            }
            writeln!(out, "{}", report.summary)?;
        }
        Command::Random {
            count,
            seed,
            max_pawns,
            max_bishops,
            output,
        } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let generator = PositionGeneratorConfig {
                max_pawns_per_side: max_pawns,
                max_bishops_per_side: max_bishops,
            };
            let lines: Vec<String> = (0..count)
                .map(|_| state_to_fen(&random_state(&mut rng, &generator)))
                .collect();
            let config = BatchConfig {
                mode: output.mode(),
                ..BatchConfig::default()
            };
            let report = evaluate_batch(&lines, &config);
            for entry in &report.entries {
                write_entry(&mut out, entry, output)?;
            }
            writeln!(out, "{}", report.summary)?;
        }
    }

    out.flush()?;
    Ok(())
}
