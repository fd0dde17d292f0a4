use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::backgammon::NUM_POINTS;

/// Source or destination of a checker. `Bar` and `Off` always refer to the
/// player making the move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Board(u8),
    Bar,
    Off,
}

impl Position {
    /// Creates a position on the board from an index (0-23).
    /// Returns `None` for indices outside the board.
    pub fn from_index(index: i8) -> Option<Self> {
        if (0..NUM_POINTS as i8).contains(&index) {
            Some(Position::Board(index as u8))
        } else {
            None
        }
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Board(index) => write!(f, "{}", index),
            Position::Bar => write!(f, "Bar"),
            Position::Off => write!(f, "Off"),
        }
    }
}
