//! Rules engine for two-player backgammon.
//!
//! [`backgammon::GameState`] is an immutable snapshot: rolling, moving and
//! passing all return a new state. Randomness is always passed in by the
//! caller so games can be replayed from a seed.

pub mod backgammon;
pub mod playout;
