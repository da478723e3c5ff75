//! Deterministic replay of recorded move lists.
//!
//! Every historical board state is rebuilt by folding a move-list prefix
//! from the empty board; there is no incremental undo state anywhere.
//! Seeking during playback and undoing a move both reduce to "replay a
//! shorter prefix", trading a little work for correctness at the game
//! lengths the trainer sees (a few hundred moves at most).

use serde::{Deserialize, Serialize};

use crate::moves::{Move, place_and_capture};
use crate::position::{Color, Position};

/// Cumulative stones captured *by* each color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureTally {
    pub black: u32,
    pub white: u32,
}

impl CaptureTally {
    pub fn credit(&mut self, color: Color, stones: u32) {
        match color {
            Color::Black => self.black += stones,
            Color::White => self.white += stones,
        }
    }

    pub fn captured_by(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Rebuild the board and capture tally after the first `upto` moves.
///
/// `upto` is clamped to the list length; the empty prefix yields an empty
/// position and a zero tally. Capture mechanics are reapplied per move,
/// since capture is a function of the accumulated position rather than of
/// the stored `captured` field, which exists for display only. Legality is
/// not re-checked: the list is expected to contain moves that
/// [`crate::moves::apply_move`] already accepted.
pub fn replay(moves: &[Move], board_size: u8, upto: usize) -> (Position, CaptureTally) {
    let mut pos = Position::new(board_size);
    let mut tally = CaptureTally::default();

    for mv in &moves[..upto.min(moves.len())] {
        let removed = place_and_capture(&mut pos, mv.coord, mv.color);
        tally.credit(mv.color, removed.len() as u32);
    }
    (pos, tally)
}
