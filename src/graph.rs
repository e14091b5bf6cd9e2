//! Graph and signing state for small spectral searches (currently \(n \le 64\)).

use std::io::{self, Write};

/// Maximum supported graph order.
///
/// Adjacency rows are `u64` bitsets, so one machine word covers a whole row.
pub const MAX_VERTICES: usize = 64;

#[inline(always)]
const fn bit(v: usize) -> u64 {
    1u64 << v
}

// ============================================================================
// Graph
// ============================================================================

/// An undirected graph on at most [`MAX_VERTICES`] vertices.
///
/// Representation: `rows[v]` is the neighbor bitset of vertex `v`. The
/// adjacency is symmetric and irreflexive, and immutable once built; the
/// search mutates a separate [`Signing`] instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    rows: Vec<u64>,
}

impl Graph {
    /// Creates a graph from adjacency row bitsets.
    ///
    /// # Panics
    /// Panics in debug builds if the rows contain out-of-range bits,
    /// self-loops, or are not symmetric.
    pub fn from_rows(rows: Vec<u64>) -> Self {
        let n = rows.len();
        debug_assert!(n <= MAX_VERTICES, "graph order {n} exceeds {MAX_VERTICES}");
        let mask = if n >= 64 { u64::MAX } else { (1u64 << n) - 1 };

        for (i, &row) in rows.iter().enumerate() {
            debug_assert_eq!(row & !mask, 0, "row {i} contains bits outside n");
            debug_assert_eq!((row >> i) & 1, 0, "self-loop at vertex {i}");
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let aij = (rows[i] >> j) & 1;
                let aji = (rows[j] >> i) & 1;
                debug_assert_eq!(aij, aji, "adjacency is not symmetric at ({i},{j})");
            }
        }

        Self { n, rows }
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Returns whether the edge `(u, v)` exists.
    #[inline(always)]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        debug_assert!(u < self.n && v < self.n);
        (self.rows[u] & bit(v)) != 0
    }

    /// Returns the degree of vertex `v`.
    #[inline(always)]
    pub fn degree(&self, v: usize) -> u32 {
        debug_assert!(v < self.n);
        self.rows[v].count_ones()
    }

    /// Returns the total number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        let sum: u32 = self.rows.iter().map(|r| r.count_ones()).sum();
        (sum as usize) / 2
    }

    /// Returns all edges `(i, j)` with `i < j` in row-major order.
    ///
    /// This is the canonical decision order of the signing search: increasing
    /// row index first, column index second.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.has_edge(i, j) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    /// Returns `Some(d)` if every vertex has degree `d`, `None` otherwise.
    ///
    /// The empty graph on zero vertices is 0-regular.
    pub fn regularity_degree(&self) -> Option<u32> {
        if self.n == 0 {
            return Some(0);
        }
        let d = self.degree(0);
        for v in 1..self.n {
            if self.degree(v) != d {
                return None;
            }
        }
        Some(d)
    }

    /// Writes the adjacency matrix to `w`, one row per line, `'+'` for an
    /// edge and `'.'` for a non-edge.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_adjacency<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for i in 0..self.n {
            for j in 0..self.n {
                let glyph = if self.has_edge(i, j) { '+' } else { '.' };
                write!(w, "{glyph}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

// ============================================================================
// Signing
// ============================================================================

/// The set of edges currently signed negative, as row bitsets.
///
/// Invariant: every edge held here is an edge of the graph the signing was
/// created for. The search adds an edge before descending into its negative
/// branch and removes it again before the positive branch, so outside the
/// search a signing is either empty, or a complete satisfying assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signing {
    rows: Vec<u64>,
}

impl Signing {
    /// Creates an empty signing for a graph of order `n`.
    pub fn empty(n: usize) -> Self {
        debug_assert!(n <= MAX_VERTICES);
        Self { rows: vec![0u64; n] }
    }

    /// Marks the edge `(u, v)` negative.
    #[inline(always)]
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.rows.len() && v < self.rows.len() && u != v);
        debug_assert!(!self.is_negative(u, v), "edge ({u},{v}) already negative");
        self.rows[u] |= bit(v);
        self.rows[v] |= bit(u);
    }

    /// Clears the negative mark on the edge `(u, v)`.
    #[inline(always)]
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.rows.len() && v < self.rows.len() && u != v);
        debug_assert!(self.is_negative(u, v), "edge ({u},{v}) is not negative");
        self.rows[u] &= !bit(v);
        self.rows[v] &= !bit(u);
    }

    /// Returns whether the edge `(u, v)` is signed negative.
    #[inline(always)]
    pub fn is_negative(&self, u: usize, v: usize) -> bool {
        debug_assert!(u < self.rows.len() && v < self.rows.len());
        (self.rows[u] & bit(v)) != 0
    }

    /// Returns the number of negative edges.
    #[inline]
    pub fn negative_edge_count(&self) -> usize {
        let sum: u32 = self.rows.iter().map(|r| r.count_ones()).sum();
        (sum as usize) / 2
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn complete_graph(n: usize) -> Graph {
        let mask = (1u64 << n) - 1;
        let rows = (0..n).map(|i| mask & !bit(i)).collect();
        Graph::from_rows(rows)
    }

    fn cycle_graph(n: usize) -> Graph {
        let mut rows = vec![0u64; n];
        for v in 0..n {
            let w = (v + 1) % n;
            rows[v] |= bit(w);
            rows[w] |= bit(v);
        }
        Graph::from_rows(rows)
    }

    #[test]
    fn complete_graph_is_regular() {
        let g = complete_graph(4);
        assert_eq!(g.order(), 4);
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.regularity_degree(), Some(3));
    }

    #[test]
    fn cycle_is_two_regular() {
        let g = cycle_graph(5);
        assert_eq!(g.regularity_degree(), Some(2));
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn path_is_not_regular() {
        // Path 0-1-2: endpoint degrees differ from the middle.
        let rows = vec![0b010, 0b101, 0b010];
        let g = Graph::from_rows(rows);
        assert_eq!(g.regularity_degree(), None);
    }

    #[test]
    fn empty_graph_is_zero_regular() {
        let g = Graph::from_rows(Vec::new());
        assert_eq!(g.order(), 0);
        assert_eq!(g.regularity_degree(), Some(0));
    }

    #[test]
    fn edgeless_graph_is_zero_regular() {
        let g = Graph::from_rows(vec![0u64; 3]);
        assert_eq!(g.regularity_degree(), Some(0));
        assert!(g.edge_list().is_empty());
    }

    #[test]
    fn edge_list_is_row_major() {
        let g = complete_graph(4);
        let edges = g.edge_list();
        assert_eq!(edges, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn adjacency_dump_uses_plus_and_dot() {
        // Single edge 0-1.
        let g = Graph::from_rows(vec![0b10, 0b01]);
        let mut out = Vec::new();
        g.write_adjacency(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ".+\n+.\n");
    }

    #[test]
    fn signing_add_remove_is_reversible() {
        let mut s = Signing::empty(6);
        assert_eq!(s.negative_edge_count(), 0);

        s.add_edge(1, 4);
        assert!(s.is_negative(1, 4));
        assert!(s.is_negative(4, 1));
        assert_eq!(s.negative_edge_count(), 1);

        s.remove_edge(1, 4);
        assert!(!s.is_negative(1, 4));
        assert_eq!(s, Signing::empty(6));
    }

    #[test]
    fn random_graphs_have_consistent_degrees() {
        const N: usize = 16;
        let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);

        for _ in 0..50 {
            let mut rows = vec![0u64; N];
            for i in 0..N {
                for j in (i + 1)..N {
                    if rng.random_bool(0.4) {
                        rows[i] |= bit(j);
                        rows[j] |= bit(i);
                    }
                }
            }
            let g = Graph::from_rows(rows);
            let total: u32 = (0..N).map(|v| g.degree(v)).sum();
            assert_eq!(total as usize, 2 * g.edge_count());
            assert_eq!(g.edge_list().len(), g.edge_count());
        }
    }
}
