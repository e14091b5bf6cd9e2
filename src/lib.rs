//! # Bilu-Linial Counterexample Search
//!
//! An exhaustive search for counterexamples to the Bilu-Linial conjecture:
//! every d-regular graph admits a ±1 edge signing whose signed adjacency
//! matrix has spectral radius at most \(2\sqrt{d-1}\).
//!
//! This crate provides:
//! - A compact `u64`-bitset graph representation with a graph6 decoder
//!   (graphs up to 64 vertices).
//! - A depth-first backtracking search over all \(2^{|E|}\) edge signings,
//!   short-circuiting on the first signing within the bound.
//! - A dense symmetric eigenvalue oracle for the per-signing bound check.
//! - A stream driver that tests one graph6 record per line and stops the
//!   whole run on the first counterexample.
//!
//! ## Quick Start
//!
//! ```
//! use bilu_linial::driver::{test_graph, Verdict};
//! use bilu_linial::graph6;
//!
//! // K4 is 3-regular; a signing within 2*sqrt(2) exists.
//! let g = graph6::decode("C~").unwrap();
//! assert_eq!(test_graph(&g).unwrap(), Verdict::Satisfiable);
//! ```
//!
//! ## Running over a stream
//!
//! ```
//! use bilu_linial::driver::{verify_stream, RunOutcome};
//!
//! let mut diag = Vec::new();
//! let outcome = verify_stream("@\nC~\n".as_bytes(), &mut diag).unwrap();
//! assert_eq!(outcome, RunOutcome::Exhausted { graphs_processed: 2 });
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Bitset graph and signing state, regularity, adjacency dumps.
//! - [`graph6`]: Decoder for the graph6 compact encoding.
//! - [`spectrum`]: Signed adjacency matrices and the eigenvalue bound oracle.
//! - [`search`]: Existential backtracking search over signings.
//! - [`driver`]: Per-graph orchestration and the stream driver.
//!
//! ## Performance Notes
//!
//! - The search is intrinsically exponential: \(2^{|E|}\) leaves in the
//!   worst case, each costing an \(O(n^3)\) eigen-decomposition. Runtime is
//!   only practical for small, sparse regular graphs.
//! - Execution is single-threaded and CPU-bound throughout; there is no
//!   cancellation, so an exhaustive search runs to completion.
//! - The bound comparison is exact double precision. A verdict right at the
//!   bound can be a rounding artifact; this is a documented limitation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::needless_range_loop)] // Often clearer for matrix indexing
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs

pub mod driver;
pub mod graph;
pub mod graph6;
pub mod search;
pub mod spectrum;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::driver::{test_graph, verify_stream, RunError, RunOutcome, Verdict};
    pub use crate::graph::{Graph, Signing, MAX_VERTICES};
    pub use crate::graph6::decode;
    pub use crate::search::admits_bounded_signing;
    pub use crate::spectrum::{spectral_bound, within_spectral_bound};
}
