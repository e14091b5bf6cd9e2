//! Decoder for the graph6 compact graph encoding.
//!
//! One record encodes one undirected graph: an order field, then the upper
//! triangle of the adjacency matrix packed six bits per printable byte. Pair
//! bits run in column order (0,1),(0,2),(1,2),(0,3),... with the most
//! significant bit of each sextet first, zero-padded at the end.

use crate::graph::{Graph, MAX_VERTICES};
use std::fmt;

/// Smallest byte value used by the encoding.
const SEXTET_BASE: u8 = 63;
/// Largest byte value used by the encoding.
const SEXTET_MAX: u8 = 126;
/// Marker byte introducing a multi-byte order field.
const LONG_ORDER_MARKER: u8 = 126;

// ============================================================================
// Errors
// ============================================================================

/// Errors encountered while decoding a graph6 record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Graph6Error {
    /// The record is empty.
    Empty,
    /// A byte outside the printable sextet range `63..=126`.
    InvalidChar {
        /// Byte offset within the record.
        pos: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The record ends before the adjacency bits are complete.
    Truncated {
        /// Total record length required by the order field.
        expected: usize,
        /// Actual record length.
        got: usize,
    },
    /// The record continues past the adjacency bits.
    TrailingData {
        /// Number of unconsumed bytes.
        extra: usize,
    },
    /// The encoded order exceeds [`MAX_VERTICES`].
    TooManyVertices {
        /// The encoded order.
        n: usize,
    },
}

impl fmt::Display for Graph6Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Graph6Error::Empty => write!(f, "empty graph6 record"),
            Graph6Error::InvalidChar { pos, byte } => {
                write!(f, "invalid graph6 byte {byte:#04x} at offset {pos}")
            }
            Graph6Error::Truncated { expected, got } => {
                write!(f, "truncated graph6 record: need {expected} bytes, got {got}")
            }
            Graph6Error::TrailingData { extra } => {
                write!(f, "graph6 record has {extra} trailing bytes")
            }
            Graph6Error::TooManyVertices { n } => {
                write!(
                    f,
                    "graph has {n} vertices; this implementation supports n <= {MAX_VERTICES}"
                )
            }
        }
    }
}

impl std::error::Error for Graph6Error {}

// ============================================================================
// Decoding
// ============================================================================

/// Decodes one graph6 record into a [`Graph`].
///
/// The record must be a single line with any newline already stripped.
///
/// # Errors
/// Returns an error if the record is empty, malformed, or encodes more than
/// [`MAX_VERTICES`] vertices. An oversized order is rejected from the order
/// field alone, before any adjacency bytes are required.
pub fn decode(record: &str) -> Result<Graph, Graph6Error> {
    let bytes = record.as_bytes();
    let (n, header_len) = decode_order(bytes)?;
    if n > MAX_VERTICES {
        return Err(Graph6Error::TooManyVertices { n });
    }

    let pair_bits = n * n.saturating_sub(1) / 2;
    let body_len = pair_bits.div_ceil(6);
    let expected = header_len + body_len;
    if bytes.len() < expected {
        return Err(Graph6Error::Truncated {
            expected,
            got: bytes.len(),
        });
    }
    if bytes.len() > expected {
        return Err(Graph6Error::TrailingData {
            extra: bytes.len() - expected,
        });
    }

    let mut rows = vec![0u64; n];
    let mut pairs = (1..n).flat_map(|j| (0..j).map(move |i| (i, j)));
    for (offset, &byte) in bytes[header_len..].iter().enumerate() {
        let six = sextet(byte, header_len + offset)?;
        for shift in (0..6).rev() {
            let Some((i, j)) = pairs.next() else {
                break;
            };
            if (six >> shift) & 1 != 0 {
                rows[i] |= 1u64 << j;
                rows[j] |= 1u64 << i;
            }
        }
    }

    Ok(Graph::from_rows(rows))
}

/// Decodes the order field, returning `(n, bytes consumed)`.
fn decode_order(bytes: &[u8]) -> Result<(usize, usize), Graph6Error> {
    match *bytes {
        [] => Err(Graph6Error::Empty),
        [LONG_ORDER_MARKER, LONG_ORDER_MARKER, ..] => {
            let n = decode_order_sextets(bytes, 2, 6)?;
            Ok((n, 8))
        }
        [LONG_ORDER_MARKER, ..] => {
            let n = decode_order_sextets(bytes, 1, 3)?;
            Ok((n, 4))
        }
        [b, ..] => {
            let six = sextet(b, 0)?;
            Ok((six as usize, 1))
        }
    }
}

/// Reads `count` sextet bytes starting at `start` as one big-endian value.
fn decode_order_sextets(bytes: &[u8], start: usize, count: usize) -> Result<usize, Graph6Error> {
    if bytes.len() < start + count {
        return Err(Graph6Error::Truncated {
            expected: start + count,
            got: bytes.len(),
        });
    }
    let mut n = 0usize;
    for (offset, &b) in bytes[start..start + count].iter().enumerate() {
        n = (n << 6) | sextet(b, start + offset)? as usize;
    }
    Ok(n)
}

#[inline]
fn sextet(byte: u8, pos: usize) -> Result<u8, Graph6Error> {
    if (SEXTET_BASE..=SEXTET_MAX).contains(&byte) {
        Ok(byte - SEXTET_BASE)
    } else {
        Err(Graph6Error::InvalidChar { pos, byte })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_complete_graph_on_four_vertices() {
        let g = decode("C~").unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(g.edge_count(), 6);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(g.has_edge(i, j), i != j);
            }
        }
    }

    #[test]
    fn decodes_five_cycle() {
        let g = decode("Dhc").unwrap();
        assert_eq!(g.order(), 5);
        assert_eq!(g.edge_count(), 5);
        assert_eq!(g.regularity_degree(), Some(2));
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)] {
            assert!(g.has_edge(u, v), "missing cycle edge ({u},{v})");
        }
    }

    #[test]
    fn decodes_single_edge() {
        let g = decode("A_").unwrap();
        assert_eq!(g.order(), 2);
        assert!(g.has_edge(0, 1));
    }

    #[test]
    fn decodes_three_vertex_path() {
        let g = decode("Bg").unwrap();
        assert_eq!(g.order(), 3);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(0, 2));
    }

    #[test]
    fn decodes_trivial_orders() {
        let g0 = decode("?").unwrap();
        assert_eq!(g0.order(), 0);

        let g1 = decode("@").unwrap();
        assert_eq!(g1.order(), 1);
        assert_eq!(g1.edge_count(), 0);
    }

    #[test]
    fn long_order_form_is_recognized() {
        // Order 63 uses the '~' + three sextet form; the adjacency body
        // (63 * 62 / 2 = 1953 bits, 326 bytes) is absent here.
        let err = decode("~??~").unwrap_err();
        assert_eq!(
            err,
            Graph6Error::Truncated {
                expected: 4 + 326,
                got: 4
            }
        );
    }

    #[test]
    fn rejects_oversized_order_without_body() {
        // Order 100 = (0 << 12) | (1 << 6) | 36.
        let err = decode("~?@c").unwrap_err();
        assert_eq!(err, Graph6Error::TooManyVertices { n: 100 });
    }

    #[test]
    fn rejects_empty_record() {
        assert_eq!(decode("").unwrap_err(), Graph6Error::Empty);
    }

    #[test]
    fn rejects_invalid_bytes() {
        assert_eq!(
            decode("!").unwrap_err(),
            Graph6Error::InvalidChar { pos: 0, byte: b'!' }
        );
        assert_eq!(
            decode("C!").unwrap_err(),
            Graph6Error::InvalidChar { pos: 1, byte: b'!' }
        );
    }

    #[test]
    fn rejects_truncated_body() {
        let err = decode("D").unwrap_err();
        assert_eq!(err, Graph6Error::Truncated { expected: 3, got: 1 });
    }

    #[test]
    fn rejects_trailing_bytes() {
        let err = decode("C~~").unwrap_err();
        assert_eq!(err, Graph6Error::TrailingData { extra: 1 });
    }

    #[test]
    fn incomplete_long_order_is_truncated() {
        let err = decode("~?").unwrap_err();
        assert_eq!(err, Graph6Error::Truncated { expected: 4, got: 2 });
    }
}
