use std::fmt::{Debug, Display};

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The two faces of a roll.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    die1: u8,
    die2: u8,
}

impl Dice {
    #[rustfmt::skip]
    pub const ALL: [Dice; 21] = [
        Dice::new(1, 1), Dice::new(1, 2), Dice::new(1, 3),
        Dice::new(1, 4), Dice::new(1, 5), Dice::new(1, 6),
        Dice::new(2, 2), Dice::new(2, 3), Dice::new(2, 4),
        Dice::new(2, 5), Dice::new(2, 6),
        Dice::new(3, 3), Dice::new(3, 4), Dice::new(3, 5),
        Dice::new(3, 6),
        Dice::new(4, 4), Dice::new(4, 5), Dice::new(4, 6),
        Dice::new(5, 5), Dice::new(5, 6),
        Dice::new(6, 6),
    ];

    /// # Panics
    ///
    /// Panics if a face is outside 1..=6. Use [`Dice::try_new`] for faces
    /// that come from outside the engine.
    pub const fn new(die1: u8, die2: u8) -> Self {
        match Dice::try_new(die1, die2) {
            Some(dice) => dice,
            None => panic!("die faces must be in 1..=6"),
        }
    }

    /// `None` unless both faces are in 1..=6.
    pub const fn try_new(die1: u8, die2: u8) -> Option<Self> {
        if die1 >= 1 && die1 <= 6 && die2 >= 1 && die2 <= 6 {
            Some(Dice { die1, die2 })
        } else {
            None
        }
    }

    /// Draws both faces uniformly and independently.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let die1 = rng.random_range(1..=6);
        let die2 = rng.random_range(1..=6);
        Dice::new(die1, die2)
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    pub fn is_double(&self) -> bool {
        self.die1 == self.die2
    }

    /// Four moves of the face value for doubles, otherwise one per face.
    pub fn moves(&self) -> MovesRemaining {
        if self.is_double() {
            MovesRemaining(SmallVec::from_buf([self.die1; 4]))
        } else {
            MovesRemaining(SmallVec::from_slice(&[self.die1, self.die2]))
        }
    }
}

impl Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.die1, self.die2)
    }
}

impl Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_double() {
            write!(f, "Double({})", self.die1)
        } else {
            write!(f, "Dice({} | {})", self.die1, self.die2)
        }
    }
}

/// Multiset of die values not yet consumed this turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovesRemaining(SmallVec<[u8; 4]>);

impl MovesRemaining {
    pub fn empty() -> Self {
        MovesRemaining(SmallVec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn contains(&self, die: u8) -> bool {
        self.0.contains(&die)
    }

    /// Each value once, in first-seen order.
    pub fn distinct(&self) -> SmallVec<[u8; 4]> {
        let mut values: SmallVec<[u8; 4]> = SmallVec::new();
        for &die in self.0.iter() {
            if !values.contains(&die) {
                values.push(die);
            }
        }
        values
    }

    /// The value that pays for a move needing `die`: the exact value when
    /// present, otherwise the smallest remaining value above it.
    pub fn select(&self, die: u8) -> Option<u8> {
        if self.contains(die) {
            return Some(die);
        }
        self.0.iter().copied().filter(|&d| d >= die).min()
    }

    /// Removes one occurrence of `die`. Unchanged if absent.
    pub fn consume(&self, die: u8) -> Self {
        let mut moves = self.clone();
        if let Some(index) = moves.0.iter().position(|&d| d == die) {
            moves.0.remove(index);
        }
        moves
    }
}

impl From<&[u8]> for MovesRemaining {
    fn from(values: &[u8]) -> Self {
        MovesRemaining(SmallVec::from_slice(values))
    }
}
