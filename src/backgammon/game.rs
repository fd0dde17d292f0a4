use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::backgammon::{
    Board, CHECKERS_PER_PLAYER, Dice, HalfMove, Move, MoveError, MovesRemaining, Player, Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Rolling,
    Moving,
    GameOver,
}

/// Non-error outcome of [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// The mover still has dice and at least one legal move.
    Continue,
    /// Dice remain but nothing can be played. Call [`GameState::pass_turn`]
    /// when the caller is ready to hand over.
    NoMovesAvailable,
    /// All dice were used; the returned state is the opponent's roll.
    TurnPassed,
    GameWon(Player),
}

/// Snapshot of a game. Every operation returns a new snapshot and leaves
/// `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
    dice: Option<Dice>,
    moves_remaining: MovesRemaining,
    used_moves: SmallVec<[u8; 4]>,
    winner: Option<Player>,
    message: String,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// A game that has not been started yet.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
            phase: Phase::Start,
            dice: None,
            moves_remaining: MovesRemaining::empty(),
            used_moves: SmallVec::new(),
            winner: None,
            message: "Welcome to Backgammon!".to_string(),
        }
    }

    /// Standard layout with a starting player drawn uniformly at random.
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let starting_player = if rng.random_bool(0.5) { Player::One } else { Player::Two };
        debug!("new game, {} starts", starting_player);
        GameState::from_position(Board::new(), starting_player)
    }

    /// A game in the rolling phase for `player` on an arbitrary board.
    pub fn from_position(board: Board, player: Player) -> Self {
        GameState {
            board,
            current_player: player,
            phase: Phase::Rolling,
            message: format!("{}'s turn to roll.", player),
            ..GameState::new()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dice(&self) -> Option<Dice> {
        self.dice
    }

    pub fn moves_remaining(&self) -> &MovesRemaining {
        &self.moves_remaining
    }

    /// Die values consumed this turn, in order. Display only.
    pub fn used_moves(&self) -> &[u8] {
        &self.used_moves
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn roll_dice<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        self.roll_dice_with(Dice::roll(rng))
    }

    /// Starts the moving phase with the given faces. A no-op outside the
    /// rolling phase.
    pub fn roll_dice_with(&self, dice: Dice) -> Self {
        if self.phase != Phase::Rolling {
            debug!("ignoring roll in phase {:?}", self.phase);
            return self.clone();
        }

        let mut next = self.clone();
        next.dice = Some(dice);
        next.moves_remaining = dice.moves();
        next.used_moves.clear();
        next.phase = Phase::Moving;
        next.message =
            format!("{} rolled {} and {}.", self.current_player, dice.die1(), dice.die2());
        debug!("{} rolled {:?}", self.current_player, dice);

        if next.no_moves_available() {
            next.announce_blocked();
        }
        next
    }

    /// Moves the current player may make from `from`. Empty outside the
    /// moving phase.
    pub fn legal_moves(&self, from: Position) -> Vec<HalfMove> {
        if self.phase != Phase::Moving {
            return Vec::new();
        }
        self.board.legal_moves(self.current_player, from, &self.moves_remaining)
    }

    /// Legal moves from every position the current player may move from.
    pub fn all_legal_moves(&self) -> Vec<HalfMove> {
        if self.phase != Phase::Moving {
            return Vec::new();
        }
        self.board
            .sources(self.current_player)
            .into_iter()
            .flat_map(|from| self.legal_moves(from))
            .collect()
    }

    /// True while moving with dice left but nothing playable.
    pub fn no_moves_available(&self) -> bool {
        self.phase == Phase::Moving
            && !self.moves_remaining.is_empty()
            && !self.board.has_any_legal_move(self.current_player, &self.moves_remaining)
    }

    /// Every maximal way to play the remaining dice this turn.
    pub fn turn_sequences(&self) -> Vec<Move> {
        if self.phase != Phase::Moving {
            return Vec::new();
        }
        self.board.turn_sequences(self.current_player, &self.moves_remaining)
    }

    /// Hands the dice to the opponent after a forced pass. A no-op unless
    /// [`Self::no_moves_available`] holds.
    pub fn pass_turn(&self) -> Self {
        if !self.no_moves_available() {
            debug!("ignoring pass for {}, moves are available", self.current_player);
            return self.clone();
        }
        debug!(
            "{} passes with {:?} unplayed",
            self.current_player,
            self.moves_remaining.as_slice()
        );
        self.next_turn()
    }

    /// Plays one checker. `die` is the value returned by [`Self::legal_moves`];
    /// if it is not among the remaining dice the smallest larger remaining
    /// value pays for the move instead.
    pub fn apply_move(
        &self,
        from: Position,
        to: Position,
        die: u8,
    ) -> Result<(Self, Signal), MoveError> {
        if self.phase != Phase::Moving {
            warn!("rejected move {:?} -> {:?}: phase is {:?}", from, to, self.phase);
            return Err(MoveError::WrongPhase(self.phase));
        }
        let Some(die_used) = self.moves_remaining.select(die) else {
            warn!("rejected move {:?} -> {:?}: no die covers {}", from, to, die);
            return Err(MoveError::DieUnavailable(die));
        };
        let half_move = HalfMove::new(from, to, die_used);
        if !self.legal_moves(from).contains(&half_move) {
            warn!("rejected illegal move {:?} for {}", half_move, self.current_player);
            return Err(MoveError::IllegalMove { from, to, die });
        }

        let player = self.current_player;
        let mut next = self.clone();
        if next.board.make_half_move_unchecked(player, &half_move) {
            debug!("{} hit a blot on {:?}", player, to);
        }
        next.moves_remaining = self.moves_remaining.consume(die_used);
        next.used_moves.push(die_used);

        if next.board.off(player) == CHECKERS_PER_PLAYER {
            next.phase = Phase::GameOver;
            next.winner = Some(player);
            next.message = format!("{} wins the game!", player);
            debug!("{} wins", player);
            return Ok((next, Signal::GameWon(player)));
        }

        if next.moves_remaining.is_empty() {
            return Ok((next.next_turn(), Signal::TurnPassed));
        }

        if next.no_moves_available() {
            next.announce_blocked();
            return Ok((next, Signal::NoMovesAvailable));
        }

        next.message = format!("{}'s turn.", player);
        Ok((next, Signal::Continue))
    }

    fn announce_blocked(&mut self) {
        debug!(
            "no legal moves for {} with {:?}",
            self.current_player,
            self.moves_remaining.as_slice()
        );
        self.message = format!("No possible moves for {}. Turn passed.", self.current_player);
    }

    fn next_turn(&self) -> Self {
        let next_player = self.current_player.opposite();
        GameState {
            board: self.board,
            current_player: next_player,
            phase: Phase::Rolling,
            dice: None,
            moves_remaining: MovesRemaining::empty(),
            used_moves: SmallVec::new(),
            winner: None,
            message: format!("{}'s turn to roll.", next_player),
        }
    }
}
