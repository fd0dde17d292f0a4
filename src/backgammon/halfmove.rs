use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::backgammon::Position;

/// A single checker movement paid for by one die value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfMove {
    pub from: Position,
    pub to: Position,
    pub die: u8,
}

impl HalfMove {
    pub fn new(from: Position, to: Position, die: u8) -> Self {
        HalfMove { from, to, die }
    }
}

impl Debug for HalfMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {:?} ({})", self.from, self.to, self.die)
    }
}
