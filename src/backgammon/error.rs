use thiserror::Error;

use crate::backgammon::{Phase, Player, Position};

/// Reasons a move request is rejected. The state is never modified when one
/// of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("moves can only be applied while moving, current phase is {0:?}")]
    WrongPhase(Phase),

    #[error("no remaining die covers a move of {0}")]
    DieUnavailable(u8),

    #[error("{from:?} -> {to:?} with die {die} is not a legal move")]
    IllegalMove { from: Position, to: Position, die: u8 },
}

/// Errors raised while building a board from explicit counts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{player} has {count} checkers, expected 15")]
    WrongCheckerCount { player: Player, count: u32 },

    #[error("{player} cannot hold {count} checkers in one place")]
    TooManyCheckers { player: Player, count: u8 },

    #[error("point {0} is outside the board")]
    PointOutOfRange(u8),

    #[error("point {0} is placed more than once")]
    DuplicatePoint(u8),
}
