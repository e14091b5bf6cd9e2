//! Existential backtracking search over edge signings.
//!
//! The signing space of a graph with edge set E is a binary decision tree of
//! depth |E|: every edge is either negative (in the signing) or positive
//! (out of it). The search walks this tree depth first, negative branch
//! first, and asks the spectral oracle at each complete leaf. It stops at the
//! first satisfying leaf; only full exhaustion of all \(2^{|E|}\) leaves
//! yields an unsatisfiable verdict.

use crate::graph::{Graph, Signing};
use crate::spectrum::{self, SpectralError};

/// Decides whether `graph` admits a signing whose signed adjacency matrix
/// stays within the \(2\sqrt{d-1}\) eigenvalue bound.
///
/// `signing` must be empty on entry. On `Ok(true)` it holds the satisfying
/// assignment that was found; on `Ok(false)` it is empty again.
///
/// Callers filter out `d <= 1` beforehand: such graphs satisfy the
/// conjecture vacuously and never reach the search.
///
/// # Errors
/// Propagates [`SpectralError`] from the oracle; the run aborts on it.
pub fn admits_bounded_signing(
    graph: &Graph,
    signing: &mut Signing,
    d: u32,
) -> Result<bool, SpectralError> {
    debug_assert!(d >= 2, "degree {d} should have been handled as trivial");
    debug_assert_eq!(signing.negative_edge_count(), 0, "signing must start empty");

    let edges = graph.edge_list();
    descend(&edges, signing, 0, &mut |s| {
        spectrum::within_spectral_bound(graph, s, d)
    })
}

/// Recursive core of the search, generic over the leaf oracle.
///
/// `depth` indexes the next undecided edge. Each frame adds its edge,
/// descends, removes it, descends again, and reports failure only after both
/// branches fail. Success short-circuits straight up the call chain without
/// touching the signing further, so the satisfying assignment survives in it.
fn descend<F>(
    edges: &[(usize, usize)],
    signing: &mut Signing,
    depth: usize,
    leaf: &mut F,
) -> Result<bool, SpectralError>
where
    F: FnMut(&Signing) -> Result<bool, SpectralError>,
{
    let Some(&(u, v)) = edges.get(depth) else {
        // Every edge is decided: evaluate this signing.
        return leaf(signing);
    };

    // Negative branch first.
    signing.add_edge(u, v);
    if descend(edges, signing, depth + 1, leaf)? {
        return Ok(true);
    }
    signing.remove_edge(u, v);

    // Then the positive branch.
    descend(edges, signing, depth + 1, leaf)
}

// ============================================================================
// Tests
// ============================================================================
