//! Per-graph orchestration and the graph-stream driver.
//!
//! Every decoded graph is checked for regularity, shortcut for degree at
//! most one, and otherwise handed to the signing search. The first graph for
//! which the search exhausts without a satisfying signing is a counterexample
//! and ends the whole run; everything fatal surfaces as an error for `main`
//! to act on.

use crate::graph::{Graph, Signing};
use crate::graph6::{self, Graph6Error};
use crate::search;
use crate::spectrum::SpectralError;
use std::fmt;
use std::io::{BufRead, Write};

/// A progress line is emitted after every this many graphs.
const PROGRESS_INTERVAL: usize = 100;

/// Header prefix some graph6 files carry on their first line.
const GRAPH6_HEADER: &str = ">>graph6<<";

// ============================================================================
// Per-graph verdict
// ============================================================================

/// Outcome of testing one graph against the conjecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Degree at most one; the conjecture holds vacuously, no search run.
    TriviallySatisfied,
    /// The search found a signing within the eigenvalue bound.
    Satisfiable,
    /// Every signing was tried and none satisfied the bound.
    Counterexample,
}

/// Fatal condition while testing one graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestError {
    /// The graph's vertices do not all share one degree.
    NotRegular,
    /// The eigensolver failed.
    Spectral(SpectralError),
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestError::NotRegular => write!(f, "graph is not regular"),
            TestError::Spectral(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TestError {}

/// Tests one graph: regularity check, trivial-degree shortcut, then the
/// exhaustive signing search.
///
/// # Errors
/// Returns [`TestError::NotRegular`] for an irregular graph and propagates
/// eigensolver failures; both are fatal to the run.
pub fn test_graph(graph: &Graph) -> Result<Verdict, TestError> {
    let d = graph.regularity_degree().ok_or(TestError::NotRegular)?;
    if d <= 1 {
        return Ok(Verdict::TriviallySatisfied);
    }

    let mut signing = Signing::empty(graph.order());
    let satisfied =
        search::admits_bounded_signing(graph, &mut signing, d).map_err(TestError::Spectral)?;

    if satisfied {
        Ok(Verdict::Satisfiable)
    } else {
        Ok(Verdict::Counterexample)
    }
}

// ============================================================================
// Stream driver
// ============================================================================

/// Why a whole run ended successfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The stream ran dry without a counterexample.
    Exhausted {
        /// Total graphs processed.
        graphs_processed: usize,
    },
    /// A counterexample was found; the rest of the stream was abandoned.
    CounterexampleFound {
        /// 1-based index of the counterexample record.
        record: usize,
    },
}

/// Fatal condition while driving a graph stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// Reading the stream or writing diagnostics failed.
    Io(String),
    /// A record failed to decode.
    Decode {
        /// 1-based record index.
        record: usize,
        /// The decoder error.
        source: Graph6Error,
    },
    /// A record decoded to an irregular graph.
    NotRegular {
        /// 1-based record index.
        record: usize,
    },
    /// The eigensolver failed while searching a record.
    Spectral {
        /// 1-based record index.
        record: usize,
        /// The solver error.
        source: SpectralError,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Io(msg) => write!(f, "I/O error: {msg}"),
            RunError::Decode { record, source } => {
                write!(f, "record {record}: {source}")
            }
            RunError::NotRegular { record } => {
                write!(f, "record {record}: input contained a graph which is not regular")
            }
            RunError::Spectral { record, source } => {
                write!(f, "record {record}: {source}")
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        RunError::Io(e.to_string())
    }
}

/// Runs the conjecture test over a stream of graph6 records, one per line.
///
/// Blank lines and the optional `>>graph6<<` header are skipped. Progress is
/// reported to `diag` every 100 graphs. On a counterexample
/// the graph's adjacency matrix is dumped to `diag`, a marker line follows,
/// and the run returns immediately without touching the remaining records.
/// Exhaustion writes the final summary line.
///
/// # Errors
/// Any decode failure, irregular graph, solver failure, or I/O failure ends
/// the run with the corresponding [`RunError`].
pub fn verify_stream<R: BufRead, W: Write>(input: R, diag: &mut W) -> Result<RunOutcome, RunError> {
    let mut processed = 0usize;

    for line in input.lines() {
        let line = line?;
        let mut record = line.trim();
        if let Some(rest) = record.strip_prefix(GRAPH6_HEADER) {
            record = rest.trim();
        }
        if record.is_empty() {
            continue;
        }

        let index = processed + 1;
        let graph = graph6::decode(record).map_err(|source| RunError::Decode {
            record: index,
            source,
        })?;

        match test_graph(&graph) {
            Ok(Verdict::TriviallySatisfied | Verdict::Satisfiable) => {}
            Ok(Verdict::Counterexample) => {
                graph.write_adjacency(diag)?;
                writeln!(diag, " ** COUNTEREXAMPLE **")?;
                return Ok(RunOutcome::CounterexampleFound { record: index });
            }
            Err(TestError::NotRegular) => {
                return Err(RunError::NotRegular { record: index });
            }
            Err(TestError::Spectral(source)) => {
                return Err(RunError::Spectral {
                    record: index,
                    source,
                });
            }
        }

        processed += 1;
        if processed % PROGRESS_INTERVAL == 0 {
            writeln!(diag, "Processed {processed} graphs now.")?;
        }
    }

    writeln!(diag, "{processed} graphs processed. No counterexamples found.")?;
    Ok(RunOutcome::Exhausted {
        graphs_processed: processed,
    })
}

// ============================================================================
// Tests
// ============================================================================
