//! Structural comparison of two positions.
//!
//! This is the correctness check behind the memorization drill: the user
//! rebuilds a board from memory and every occupied cell is classified
//! against the target.

use std::collections::HashSet;

use crate::position::{Coord, Position};

/// Cell-wise classification of an actual board against a target board.
///
/// A cell holding the wrong color appears in both `missing` (the target's
/// stone is absent) and `extra` (an unwanted stone is present). That double
/// membership is deliberate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub correct: HashSet<Coord>,
    pub missing: HashSet<Coord>,
    pub extra: HashSet<Coord>,
}

impl DiffResult {
    /// True when the rebuild matches the target exactly.
    pub fn is_match(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Classify every occupied cell of `target` and `actual`.
pub fn diff(target: &Position, actual: &Position) -> DiffResult {
    let mut result = DiffResult::default();

    for (c, color) in target.stones() {
        if actual.get(c) == Some(color) {
            result.correct.insert(c);
        } else {
            result.missing.insert(c);
        }
    }
    for (c, color) in actual.stones() {
        if target.get(c) != Some(color) {
            result.extra.insert(c);
        }
    }
    result
}
