//! Kioku: a Go position and capture engine for memorization drills.
//!
//! This crate provides the position engine behind a board-memorization
//! trainer: building positions stone by stone, validating moves with
//! automatic capture, replaying recorded games to any ply, and scoring a
//! rebuilt position against a memorized target.
//!
//! ## Modules
//!
//! - [`position`] - Sparse board representation and text coordinates
//! - [`group`] - Flood-fill connectivity and liberty counting
//! - [`moves`] - Move validation, capture resolution, suicide rejection
//! - [`replay`] - Deterministic replay of recorded move lists
//! - [`diff`] - Target-vs-actual position comparison
//! - [`record`] - Serializable game records and named positions
//!
//! ## Example
//!
//! ```
//! use kioku::moves::apply_move;
//! use kioku::position::{Color, Coord, Position};
//!
//! let mut pos = Position::new(9);
//!
//! // Black takes both liberties of the white corner stone.
//! apply_move(&mut pos, Coord::new(1, 0), Color::Black).unwrap();
//! apply_move(&mut pos, Coord::new(0, 0), Color::White).unwrap();
//! let mv = apply_move(&mut pos, Coord::new(0, 1), Color::Black).unwrap();
//!
//! assert_eq!(mv.captured, 1);
//! assert_eq!(pos.get(Coord::new(0, 0)), None);
//! ```

pub mod diff;
pub mod group;
pub mod moves;
pub mod position;
pub mod record;
pub mod replay;
