use std::{fmt::Debug, ops::Deref};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::backgammon::HalfMove;

/// An ordered sequence of half moves played in one turn.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    half_moves: SmallVec<[HalfMove; 4]>,
}

impl Move {
    pub fn new() -> Self {
        Move { half_moves: SmallVec::new() }
    }

    pub fn add_half_move(&mut self, half_move: HalfMove) {
        self.half_moves.push(half_move);
    }
}

impl Deref for Move {
    type Target = [HalfMove];

    fn deref(&self) -> &Self::Target {
        &self.half_moves
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move: ")?;
        for (i, half_move) in self.half_moves.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", half_move)?;
        }
        Ok(())
    }
}
