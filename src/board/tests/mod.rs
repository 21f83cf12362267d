//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Starting layout and raw-coordinate access
//! - `movegen.rs` - Per-piece destination generation
//! - `edge_cases.rs` - Board edges, blocked pieces and corner positions
//! - `proptest.rs` - Property-based tests over random boards

mod edge_cases;

use crate::board::Square;

/// Parse a list of algebraic squares for compact expectations.
pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    let mut out: Vec<Square> = names
        .iter()
        .map(|n| n.parse().expect("test square"))
        .collect();
    out.sort_unstable();
    out
}
