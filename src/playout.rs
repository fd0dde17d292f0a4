//! Whole games played with uniformly random legal moves.
//!
//! Playouts go through the public [`GameState`] API only, which makes them a
//! cheap way to drive the engine through a large number of reachable states.

use log::debug;
use rand::{Rng, seq::IndexedRandom};
use thiserror::Error;

use crate::backgammon::{GameState, MoveError, Phase, Player, Signal};

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub winner: Player,
    /// Number of rolls, including rolls that ended in a forced pass.
    pub turns: u32,
    /// Checkers moved.
    pub moves: u32,
    pub forced_passes: u32,
    pub hits: u32,
    pub final_state: GameState,
}

#[derive(Debug, Error)]
pub enum PlayoutError {
    #[error("game did not finish within {0} actions")]
    ActionLimit(u32),

    #[error("no legal move although the engine reported moves available")]
    Stalled,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Plays a fresh game to the end.
pub fn play_random_game<R: Rng + ?Sized>(
    rng: &mut R,
    max_actions: u32,
) -> Result<PlayoutReport, PlayoutError> {
    let state = GameState::new_game(rng);
    play_from(state, rng, max_actions, |_| {})
}

/// Plays `state` to the end, calling `observe` with every state reached.
pub fn play_from<R, F>(
    mut state: GameState,
    rng: &mut R,
    max_actions: u32,
    mut observe: F,
) -> Result<PlayoutReport, PlayoutError>
where
    R: Rng + ?Sized,
    F: FnMut(&GameState),
{
    let mut turns = 0;
    let mut moves = 0;
    let mut forced_passes = 0;
    let mut hits = 0;

    for _ in 0..max_actions {
        observe(&state);
        state = match state.phase() {
            Phase::Start => GameState::new_game(rng),
            Phase::Rolling => {
                turns += 1;
                state.roll_dice(rng)
            }
            Phase::Moving if state.no_moves_available() => {
                forced_passes += 1;
                state.pass_turn()
            }
            Phase::Moving => {
                let legal = state.all_legal_moves();
                let &half_move = legal.choose(rng).ok_or(PlayoutError::Stalled)?;
                let opponent = state.current_player().opposite();
                let opponent_bar = state.board().bar(opponent);

                let (next, signal) = state.apply_move(half_move.from, half_move.to, half_move.die)?;
                moves += 1;
                if next.board().bar(opponent) > opponent_bar {
                    hits += 1;
                }
                if let Signal::GameWon(player) = signal {
                    debug!("{} won after {} turns", player, turns);
                }
                next
            }
            Phase::GameOver => {
                let Some(winner) = state.winner() else {
                    return Err(PlayoutError::Stalled);
                };
                return Ok(PlayoutReport {
                    winner,
                    turns,
                    moves,
                    forced_passes,
                    hits,
                    final_state: state,
                });
            }
        };
    }
    Err(PlayoutError::ActionLimit(max_actions))
}
