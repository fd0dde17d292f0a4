/// Points on the board.
pub const NUM_POINTS: usize = 24;

/// Checkers each player owns.
pub const CHECKERS_PER_PLAYER: u8 = 15;

/// Points in a home quadrant.
pub const HOME_SIZE: u8 = 6;

mod board;
pub use board::Board;
pub use board::Point;

mod player;
pub use player::Player;

mod position;
pub use position::Position;

mod game;
pub use game::GameState;
pub use game::Phase;
pub use game::Signal;

mod halfmove;
pub use halfmove::HalfMove;

mod full_move;
pub use full_move::Move;

mod dice;
pub use dice::Dice;
pub use dice::MovesRemaining;

mod error;
pub use error::MoveError;
pub use error::SetupError;
