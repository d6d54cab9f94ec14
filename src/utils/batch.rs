//! Batch evaluation of many position strings.
//!
//! Lines are split into contiguous chunks, one per worker, and judged
//! independently; results come back in input order. The evaluator holds no
//! shared state, so workers need no synchronisation beyond the final join.

use std::thread;

use crate::dead_position::evaluator::{evaluate_parsed, DeadPositionResult, LiveReason};
use crate::errors::PositionError;
use crate::utils::fen_parser::{parse_with_mode, ParseMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    pub mode: ParseMode,
    pub requested_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Lenient,
            requested_threads: 1,
        }
    }
}

impl BatchConfig {
    #[inline]
    pub fn normalized_threads(self) -> usize {
        self.requested_threads.max(1)
    }
}

/// Verdict for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub line: String,
    pub outcome: Result<(DeadPositionResult, Option<LiveReason>), PositionError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub dead: usize,
    pub live: usize,
    pub with_pawns: usize,
    pub with_bishops: usize,
    /// Lines the strict loader refused.
    pub rejected: usize,
}

impl BatchSummary {
    fn record(&mut self, entry: &BatchEntry) {
        self.total += 1;
        match &entry.outcome {
            Ok((result, _)) => {
                if result.dead {
                    self.dead += 1;
                } else {
                    self.live += 1;
                }
                self.with_pawns += usize::from(result.has_pawns);
                self.with_bishops += usize::from(result.has_bishops);
            }
            Err(_) => self.rejected += 1,
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total={} dead={} live={} pawns={} bishops={} rejected={}",
            self.total, self.dead, self.live, self.with_pawns, self.with_bishops, self.rejected
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub summary: BatchSummary,
}

pub fn evaluate_line(line: &str, mode: ParseMode) -> BatchEntry {
    let outcome = parse_with_mode(line, mode).map(|parsed| evaluate_parsed(&parsed));
    if let Err(err) = &outcome {
        log::warn!("rejected {line:?}: {err}");
    }
    BatchEntry {
        line: line.to_owned(),
        outcome,
    }
}

/// Judge every non-blank line. Surrounding whitespace is trimmed first.
pub fn evaluate_batch<S: AsRef<str> + Sync>(lines: &[S], config: &BatchConfig) -> BatchReport {
    let inputs: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect();

    let workers = config.normalized_threads().min(inputs.len().max(1));
    let mode = config.mode;
    let entries: Vec<BatchEntry> = if workers == 1 {
        inputs.iter().map(|line| evaluate_line(line, mode)).collect()
    } else {
        let chunk_size = inputs.len().div_ceil(workers);
        log::debug!("evaluating {} lines on {workers} workers", inputs.len());
        thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|line| evaluate_line(line, mode))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(chunk) => chunk,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    };

    let mut summary = BatchSummary::default();
    for entry in &entries {
        summary.record(entry);
    }

    BatchReport { entries, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_generator::state_to_fen;
    use crate::utils::position_generator::{random_state, PositionGeneratorConfig};
    use rand::{rngs::StdRng, SeedableRng};

    const LINES: [&str; 5] = [
        "4k3/8/8/8/8/8/8/4K3 w - -",
        "4k3/8/8/8/8/8/4P3/4K3 w - -",
        "",
        "8/8/8/4k3/8/4K3/8/6B1 w - -",
        "8/8/8/8/8/8/8/4K3 w - -",
    ];

    #[test]
    fn lenient_batch_counts_every_non_blank_line() {
        let report = evaluate_batch(&LINES, &BatchConfig::default());
        assert_eq!(report.entries.len(), 4);
        assert_eq!(
            report.summary,
            BatchSummary {
                total: 4,
                dead: 3,
                live: 1,
                with_pawns: 1,
                with_bishops: 1,
                rejected: 0,
            }
        );
    }

    #[test]
    fn strict_batch_rejects_a_missing_king() {
        let config = BatchConfig {
            mode: ParseMode::Strict,
            ..BatchConfig::default()
        };
        let report = evaluate_batch(&LINES, &config);
        assert_eq!(report.summary.rejected, 1);
        assert!(report.entries[3].outcome.is_err());
        assert_eq!(report.summary.to_string(), "total=4 dead=2 live=1 pawns=1 bishops=1 rejected=1");
    }

    #[test]
    fn threaded_batch_matches_sequential_order() {
        let mut rng = StdRng::seed_from_u64(21);
        let config = PositionGeneratorConfig::default();
        let lines: Vec<String> = (0..257)
            .map(|_| state_to_fen(&random_state(&mut rng, &config)))
            .collect();

        let sequential = evaluate_batch(&lines, &BatchConfig::default());
        let threaded = evaluate_batch(
            &lines,
            &BatchConfig {
                requested_threads: 4,
                ..BatchConfig::default()
            },
        );
        assert_eq!(sequential, threaded);
        assert_eq!(threaded.entries[100].line, lines[100]);
    }

    #[test]
    fn empty_batch_has_an_empty_summary() {
        let lines: [&str; 0] = [];
        let report = evaluate_batch(&lines, &BatchConfig::default());
        assert!(report.entries.is_empty());
        assert_eq!(report.summary, BatchSummary::default());
    }
}
