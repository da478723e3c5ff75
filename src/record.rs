//! Serializable host-boundary types: game records and named positions.
//!
//! The engine itself never touches storage; these types exist so that a
//! host can persist games and memorization targets and hand them back with
//! every coordinate, color and capture count intact. Stones are stored as
//! an entry list because JSON object keys cannot be coordinate structs.

use serde::{Deserialize, Serialize};

use crate::moves::{Move, MoveError, apply_move};
use crate::position::{Color, Coord, Position};
use crate::replay::{CaptureTally, replay};

/// One recorded game: a name, the board size it was played on, and the
/// ordered move list. Moves are appended while recording and may only be
/// removed from the end, because interior edits would invalidate every
/// later capture result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    pub board_size: u8,
    #[serde(default)]
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn new(name: impl Into<String>, board_size: u8) -> Self {
        GameRecord {
            name: name.into(),
            board_size,
            moves: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Board and tally after the first `ply` moves.
    pub fn position_at(&self, ply: usize) -> (Position, CaptureTally) {
        replay(&self.moves, self.board_size, ply)
    }

    pub fn final_position(&self) -> (Position, CaptureTally) {
        self.position_at(self.moves.len())
    }

    /// Validate and append the next move. The current board is rebuilt by
    /// replaying the whole prefix on each append.
    pub fn play(&mut self, coord: Coord, color: Color) -> Result<Move, MoveError> {
        let (mut pos, _) = self.final_position();
        let mv = apply_move(&mut pos, coord, color)?;
        self.moves.push(mv);
        Ok(mv)
    }

    /// Drop moves from the end until `len` remain. This is the only form of
    /// move-list edit; the state after an undo comes from replaying the
    /// shortened prefix.
    pub fn truncate(&mut self, len: usize) {
        self.moves.truncate(len);
    }
}

/// A memorization target: a name plus a bare position snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPosition {
    pub name: String,
    pub board_size: u8,
    pub stones: Vec<(Coord, Color)>,
}

impl NamedPosition {
    pub fn from_position(name: impl Into<String>, pos: &Position) -> Self {
        let mut stones: Vec<(Coord, Color)> = pos.stones().collect();
        // map iteration order is arbitrary; sort so files are stable
        stones.sort_by_key(|(c, _)| (c.y, c.x));
        NamedPosition {
            name: name.into(),
            board_size: pos.size(),
            stones,
        }
    }

    pub fn to_position(&self) -> Position {
        Position::with_stones(self.board_size, self.stones.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_play_appends_capture_counts() {
        let mut record = GameRecord::new("corner capture", 9);
        record.play(Coord::new(1, 0), Color::Black).unwrap();
        record.play(Coord::new(0, 0), Color::White).unwrap();
        let mv = record.play(Coord::new(0, 1), Color::Black).unwrap();

        assert_eq!(mv.captured, 1);
        assert_eq!(record.len(), 3);

        let (pos, tally) = record.final_position();
        assert_eq!(pos.get(Coord::new(0, 0)), None);
        assert_eq!(tally.black, 1);
    }

    #[test]
    fn test_record_rejects_illegal_append() {
        let mut record = GameRecord::new("occupied", 9);
        record.play(Coord::new(4, 4), Color::Black).unwrap();
        let err = record.play(Coord::new(4, 4), Color::White);
        assert_eq!(err, Err(MoveError::Occupied));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_truncate_then_replay_is_undo() {
        let mut record = GameRecord::new("undo", 9);
        record.play(Coord::new(1, 0), Color::Black).unwrap();
        record.play(Coord::new(0, 0), Color::White).unwrap();
        let (before_capture, _) = record.final_position();

        record.play(Coord::new(0, 1), Color::Black).unwrap();
        record.truncate(record.len() - 1);

        let (after_undo, tally) = record.final_position();
        assert_eq!(after_undo, before_capture);
        assert_eq!(tally, CaptureTally::default());
    }

    #[test]
    fn test_game_record_json_roundtrip() {
        let mut record = GameRecord::new("roundtrip", 9);
        record.play(Coord::new(1, 0), Color::Black).unwrap();
        record.play(Coord::new(0, 0), Color::White).unwrap();
        record.play(Coord::new(0, 1), Color::Black).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);

        // capture counts survive the trip
        assert_eq!(parsed.moves[2].captured, 1);
    }

    #[test]
    fn test_named_position_roundtrip() {
        let pos = Position::with_stones(
            13,
            [
                (Coord::new(0, 0), Color::Black),
                (Coord::new(12, 12), Color::White),
                (Coord::new(6, 3), Color::Black),
            ],
        );
        let named = NamedPosition::from_position("sanrensei fragment", &pos);
        assert_eq!(named.board_size, 13);

        let json = serde_json::to_string(&named).unwrap();
        let parsed: NamedPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_position(), pos);
    }
}
