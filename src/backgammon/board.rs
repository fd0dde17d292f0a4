use std::{fmt::Display, ops::RangeInclusive};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::backgammon::{
    CHECKERS_PER_PLAYER, HOME_SIZE, HalfMove, Move, MovesRemaining, NUM_POINTS, Player, Position,
    SetupError,
};

/// Occupancy of a single point as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub occupant: Option<Player>,
    pub count: u8,
}

/// Checker placement of both players in a fixed orientation.
/// Point counts are signed: positive values belong to [`Player::One`],
/// negative values to [`Player::Two`]. Player One moves towards index 0 and
/// bears off below it, Player Two moves towards index 23 and bears off above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    points: [i8; NUM_POINTS],
    bar: [u8; 2],
    off: [u8; 2],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates a new board with the default starting position.
    pub fn new() -> Self {
        Board {
            points: [-2, 0, 0, 0, 0, 5, 0, 3, 0, 0, 0, -5, 5, 0, 0, 0, -3, 0, -5, 0, 0, 0, 0, 2],
            bar: [0, 0],
            off: [0, 0],
        }
    }

    /// Creates an empty board with no checkers on it.
    /// Only useful as a starting point for [`Self::from_placements`].
    pub fn empty() -> Self {
        Board { points: [0; NUM_POINTS], bar: [0, 0], off: [0, 0] }
    }

    /// Builds a board from `(point, player, count)` triples plus bar and off
    /// counts indexed by [`Player::index`]. Each point may appear once and
    /// each player must account for exactly 15 checkers.
    pub fn from_placements(
        placements: &[(u8, Player, u8)],
        bar: [u8; 2],
        off: [u8; 2],
    ) -> Result<Self, SetupError> {
        for player in Player::BOTH {
            for count in [bar[player.index()], off[player.index()]] {
                if count > CHECKERS_PER_PLAYER {
                    return Err(SetupError::TooManyCheckers { player, count });
                }
            }
        }

        let mut board = Board { bar, off, ..Board::empty() };
        let mut placed = [false; NUM_POINTS];
        for &(index, player, count) in placements {
            if index as usize >= NUM_POINTS {
                return Err(SetupError::PointOutOfRange(index));
            }
            if placed[index as usize] {
                return Err(SetupError::DuplicatePoint(index));
            }
            // Keeps the signed cast below in range.
            if count > CHECKERS_PER_PLAYER {
                return Err(SetupError::TooManyCheckers { player, count });
            }
            placed[index as usize] = true;
            board.points[index as usize] = player.sign() * count as i8;
        }
        for player in Player::BOTH {
            let count = board.total_checkers(player);
            if count != CHECKERS_PER_PLAYER as u32 {
                return Err(SetupError::WrongCheckerCount { player, count });
            }
        }
        Ok(board)
    }

    /// Signed number of checkers on a point, positive for Player One.
    pub fn checkers_on_position(&self, index: u8) -> i8 {
        self.points[index as usize]
    }

    pub fn point(&self, index: u8) -> Point {
        let value = self.points[index as usize];
        let occupant = match value {
            0 => None,
            v if v > 0 => Some(Player::One),
            _ => Some(Player::Two),
        };
        Point { occupant, count: value.unsigned_abs() }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..NUM_POINTS as u8).map(|i| self.point(i))
    }

    /// Number of `player`'s checkers on a point, zero if the opponent holds it.
    pub fn count_for(&self, player: Player, index: u8) -> u8 {
        let value = self.points[index as usize] * player.sign();
        value.max(0) as u8
    }

    pub fn bar(&self, player: Player) -> u8 {
        self.bar[player.index()]
    }

    pub fn off(&self, player: Player) -> u8 {
        self.off[player.index()]
    }

    /// Checkers on the board, on the bar and borne off.
    pub fn total_checkers(&self, player: Player) -> u32 {
        let on_board: u32 = (0..NUM_POINTS as u8).map(|i| self.count_for(player, i) as u32).sum();
        on_board + self.bar(player) as u32 + self.off(player) as u32
    }

    pub fn home_range(player: Player) -> RangeInclusive<u8> {
        match player {
            Player::One => 0..=HOME_SIZE - 1,
            Player::Two => NUM_POINTS as u8 - HOME_SIZE..=NUM_POINTS as u8 - 1,
        }
    }

    /// Checkers in the home quadrant plus checkers already borne off.
    pub fn checkers_in_home(&self, player: Player) -> u8 {
        let in_home: u8 = Self::home_range(player).map(|i| self.count_for(player, i)).sum();
        in_home + self.off(player)
    }

    pub fn can_bear_off(&self, player: Player) -> bool {
        self.bar(player) == 0 && self.checkers_in_home(player) == CHECKERS_PER_PLAYER
    }

    /// The occupied home point furthest from the bear-off edge.
    pub fn furthest_home_checker(&self, player: Player) -> Option<u8> {
        let occupied = |i: &u8| self.count_for(player, *i) > 0;
        match player {
            Player::One => Self::home_range(player).rev().find(occupied),
            Player::Two => Self::home_range(player).find(occupied),
        }
    }

    /// Pips a checker on `index` needs to reach the off position exactly.
    pub fn distance_to_off(player: Player, index: u8) -> u8 {
        match player {
            Player::One => index + 1,
            Player::Two => NUM_POINTS as u8 - index,
        }
    }

    /// Point a checker re-enters on from the bar with the given die.
    pub fn entry_point(player: Player, die: u8) -> u8 {
        match player {
            Player::One => NUM_POINTS as u8 - die,
            Player::Two => die - 1,
        }
    }

    /// A point is open unless the opponent holds two or more checkers on it.
    pub fn is_open_for(&self, player: Player, index: u8) -> bool {
        self.points[index as usize] * player.sign() >= -1
    }

    /// Positions `player` may move from: the bar while it holds a checker,
    /// otherwise every point the player occupies.
    pub fn sources(&self, player: Player) -> Vec<Position> {
        if self.bar(player) > 0 {
            return vec![Position::Bar];
        }
        (0..NUM_POINTS as u8)
            .filter(|&i| self.count_for(player, i) > 0)
            .map(Position::Board)
            .collect()
    }

    /// Single-checker moves from `from`, one per distinct remaining die value.
    pub fn legal_moves(
        &self,
        player: Player,
        from: Position,
        moves: &MovesRemaining,
    ) -> Vec<HalfMove> {
        let mut half_moves = Vec::new();
        let on_bar = self.bar(player) > 0;

        match from {
            Position::Off => return half_moves,
            Position::Bar if !on_bar => return half_moves,
            Position::Board(_) if on_bar => return half_moves,
            Position::Board(index) if self.count_for(player, index) == 0 => return half_moves,
            _ => {}
        }

        let bearing_off = self.can_bear_off(player);

        for die in moves.distinct() {
            let index = match from {
                Position::Board(index) => index,
                _ => {
                    let entry = Self::entry_point(player, die);
                    if self.is_open_for(player, entry) {
                        half_moves.push(HalfMove::new(from, Position::Board(entry), die));
                    }
                    continue;
                }
            };

            let target = index as i8 + player.direction() * die as i8;
            match Position::from_index(target) {
                Some(Position::Board(to)) => {
                    if self.is_open_for(player, to) {
                        half_moves.push(HalfMove::new(from, Position::Board(to), die));
                    }
                }
                _ if bearing_off => {
                    let distance = Self::distance_to_off(player, index);
                    let exact = die == distance;
                    let overage =
                        die > distance && self.furthest_home_checker(player) == Some(index);
                    if exact || overage {
                        half_moves.push(HalfMove::new(from, Position::Off, die));
                    }
                }
                _ => {}
            }
        }
        half_moves
    }

    pub fn has_any_legal_move(&self, player: Player, moves: &MovesRemaining) -> bool {
        self.sources(player)
            .into_iter()
            .any(|from| !self.legal_moves(player, from, moves).is_empty())
    }

    /// Moves a checker and returns whether an opposing blot was hit.
    /// The move is not validated, callers must take it from [`Self::legal_moves`].
    pub fn make_half_move_unchecked(&mut self, player: Player, half_move: &HalfMove) -> bool {
        match half_move.from {
            Position::Bar => self.bar[player.index()] -= 1,
            Position::Board(from) => self.points[from as usize] -= player.sign(),
            Position::Off => unreachable!("cannot move from off"),
        }
        match half_move.to {
            Position::Off => {
                self.off[player.index()] += 1;
                false
            }
            Position::Board(to) => {
                let count = self.points[to as usize] * player.sign();
                let hit = count == -1;
                if hit {
                    self.bar[player.opposite().index()] += 1;
                    self.points[to as usize] = 0;
                }
                self.points[to as usize] += player.sign();
                hit
            }
            Position::Bar => unreachable!("cannot move to bar"),
        }
    }

    /// Every maximal sequence of half moves playable with `moves`.
    /// Sequences ending on the same board are reported once, whichever dice
    /// they used. Empty when no move is possible.
    pub fn turn_sequences(&self, player: Player, moves: &MovesRemaining) -> Vec<Move> {
        let mut stack: Vec<(MovesRemaining, Board, Move)> =
            vec![(moves.clone(), *self, Move::new())];
        let mut best_result_len = 0;
        let mut results = Vec::new();

        loop {
            let mut next_stack = Vec::new();
            let mut seen: HashSet<(Board, MovesRemaining)> = HashSet::new();

            while let Some((moves, board, previous_moves)) = stack.pop() {
                if previous_moves.len() > best_result_len {
                    results.clear();
                    best_result_len = previous_moves.len();
                    results.push((board, previous_moves.clone()));
                } else if previous_moves.len() == best_result_len {
                    results.push((board, previous_moves.clone()));
                }
                if moves.is_empty() {
                    continue;
                }

                for from in board.sources(player) {
                    for half_move in board.legal_moves(player, from, &moves) {
                        let mut next_board = board;
                        next_board.make_half_move_unchecked(player, &half_move);
                        let remaining = moves.consume(half_move.die);
                        if seen.insert((next_board, remaining.clone())) {
                            let mut mv = previous_moves.clone();
                            mv.add_half_move(half_move);
                            next_stack.push((remaining, next_board, mv));
                        }
                    }
                }
            }
            if next_stack.is_empty() {
                break;
            }
            stack = next_stack;
        }

        if best_result_len == 0 {
            return Vec::new();
        }
        let mut boards = HashSet::new();
        results
            .into_iter()
            .filter(|(board, _)| boards.insert(*board))
            .map(|(_, mv)| mv)
            .collect()
    }
}

impl Board {
    fn write_row(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        indices: [u8; 12],
        bar: u8,
    ) -> std::fmt::Result {
        for (i, &index) in indices.iter().enumerate() {
            if i == 6 {
                write!(f, "| {:2} |", bar)?;
            }
            write!(f, "{:4}", self.checkers_on_position(index))?;
        }
        writeln!(f)
    }

    fn write_labels(f: &mut std::fmt::Formatter<'_>, indices: [u8; 12]) -> std::fmt::Result {
        for (i, &index) in indices.iter().enumerate() {
            if i == 6 {
                write!(f, "|    |")?;
            }
            write!(f, "{:4}", index + 1)?;
        }
        writeln!(f)
    }
}

/// Signed counts in the fixed orientation, point numbers below and above,
/// bar counts in the middle column (Player Two on top).
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top = [12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23];
        let bottom = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];

        Self::write_labels(f, top)?;
        self.write_row(f, top, self.bar(Player::Two))?;
        writeln!(f, "{}", "=".repeat(54))?;
        self.write_row(f, bottom, self.bar(Player::One))?;
        Self::write_labels(f, bottom)?;
        write!(
            f,
            "Off: {} {}, {} {}",
            Player::One,
            self.off(Player::One),
            Player::Two,
            self.off(Player::Two)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(values: &[u8]) -> MovesRemaining {
        MovesRemaining::from(values)
    }

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.point(0), Point { occupant: Some(Player::Two), count: 2 });
        assert_eq!(board.point(5), Point { occupant: Some(Player::One), count: 5 });
        assert_eq!(board.point(7), Point { occupant: Some(Player::One), count: 3 });
        assert_eq!(board.point(11), Point { occupant: Some(Player::Two), count: 5 });
        assert_eq!(board.point(12), Point { occupant: Some(Player::One), count: 5 });
        assert_eq!(board.point(16), Point { occupant: Some(Player::Two), count: 3 });
        assert_eq!(board.point(18), Point { occupant: Some(Player::Two), count: 5 });
        assert_eq!(board.point(23), Point { occupant: Some(Player::One), count: 2 });
        assert_eq!(board.point(1), Point { occupant: None, count: 0 });
        for player in Player::BOTH {
            assert_eq!(board.total_checkers(player), 15);
            assert_eq!(board.bar(player), 0);
            assert_eq!(board.off(player), 0);
            assert!(!board.can_bear_off(player));
        }
        assert_eq!(board.checkers_in_home(Player::One), 5);
        assert_eq!(board.checkers_in_home(Player::Two), 5);
    }

    #[test]
    fn test_from_placements_rejects_wrong_totals() {
        let result = Board::from_placements(
            &[(0, Player::One, 15), (23, Player::Two, 14)],
            [0, 0],
            [0, 0],
        );
        assert_eq!(result, Err(SetupError::WrongCheckerCount { player: Player::Two, count: 14 }));

        let result = Board::from_placements(&[(24, Player::One, 15)], [0, 0], [0, 15]);
        assert_eq!(result, Err(SetupError::PointOutOfRange(24)));
    }

    #[test]
    fn test_from_placements_rejects_oversized_counts() {
        // 128 does not fit a signed point count.
        let result = Board::from_placements(&[(0, Player::Two, 128)], [0, 0], [15, 0]);
        assert_eq!(result, Err(SetupError::TooManyCheckers { player: Player::Two, count: 128 }));

        // 241 would wrap around to -15 and flip ownership of the point.
        let result =
            Board::from_placements(&[(3, Player::One, 241), (10, Player::Two, 15)], [0, 0], [0, 0]);
        assert_eq!(result, Err(SetupError::TooManyCheckers { player: Player::One, count: 241 }));

        let result = Board::from_placements(&[(0, Player::Two, 15)], [200, 0], [100, 0]);
        assert_eq!(result, Err(SetupError::TooManyCheckers { player: Player::One, count: 200 }));

        let result = Board::from_placements(&[(0, Player::Two, 15)], [0, 0], [0, 16]);
        assert_eq!(result, Err(SetupError::TooManyCheckers { player: Player::Two, count: 16 }));
    }

    #[test]
    fn test_from_placements_totals_do_not_overflow() {
        let placements: Vec<(u8, Player, u8)> = (0..20).map(|i| (i, Player::One, 15)).collect();
        let result = Board::from_placements(&placements, [15, 0], [15, 15]);
        assert_eq!(result, Err(SetupError::WrongCheckerCount { player: Player::One, count: 330 }));
    }

    #[test]
    fn test_from_placements_rejects_duplicate_points() {
        let result = Board::from_placements(
            &[(3, Player::One, 10), (3, Player::One, 5), (20, Player::Two, 15)],
            [0, 0],
            [0, 0],
        );
        assert_eq!(result, Err(SetupError::DuplicatePoint(3)));

        // A later placement must not silently replace the other player's checkers.
        let result = Board::from_placements(
            &[(3, Player::One, 15), (3, Player::Two, 1), (20, Player::Two, 14)],
            [0, 0],
            [0, 0],
        );
        assert_eq!(result, Err(SetupError::DuplicatePoint(3)));
    }

    #[test]
    fn test_bear_off_eligibility() {
        let board = Board::from_placements(
            &[(0, Player::One, 5), (5, Player::One, 5), (6, Player::One, 5), (20, Player::Two, 15)],
            [0, 0],
            [0, 0],
        )
        .unwrap();
        assert!(!board.can_bear_off(Player::One));
        assert!(board.can_bear_off(Player::Two));

        let board = Board::from_placements(
            &[(0, Player::One, 5), (5, Player::One, 5), (20, Player::Two, 15)],
            [0, 0],
            [5, 0],
        )
        .unwrap();
        assert!(board.can_bear_off(Player::One));

        let board = Board::from_placements(
            &[(0, Player::One, 5), (5, Player::One, 9), (20, Player::Two, 15)],
            [1, 0],
            [0, 0],
        )
        .unwrap();
        assert_eq!(board.checkers_in_home(Player::One), 14);
        assert!(!board.can_bear_off(Player::One));
    }

    #[test]
    fn test_furthest_home_checker() {
        let board = Board::from_placements(
            &[
                (1, Player::One, 5),
                (3, Player::One, 10),
                (19, Player::Two, 5),
                (22, Player::Two, 10),
            ],
            [0, 0],
            [0, 0],
        )
        .unwrap();
        assert_eq!(board.furthest_home_checker(Player::One), Some(3));
        assert_eq!(board.furthest_home_checker(Player::Two), Some(19));
    }

    #[test]
    fn test_standard_moves_respect_blocks() {
        let board = Board::new();
        let legal = board.legal_moves(Player::One, Position::Board(5), &moves(&[3, 5]));
        assert_eq!(legal, vec![HalfMove::new(Position::Board(5), Position::Board(2), 3)]);

        let legal = board.legal_moves(Player::Two, Position::Board(0), &moves(&[6, 5]));
        // 5 lands on Player One's 6-point stack.
        assert_eq!(legal, vec![HalfMove::new(Position::Board(0), Position::Board(6), 6)]);
    }

    #[test]
    fn test_no_moves_from_foreign_or_empty_points() {
        let board = Board::new();
        assert!(board.legal_moves(Player::One, Position::Board(0), &moves(&[1, 2])).is_empty());
        assert!(board.legal_moves(Player::One, Position::Board(1), &moves(&[1, 2])).is_empty());
        assert!(board.legal_moves(Player::One, Position::Off, &moves(&[1, 2])).is_empty());
        assert!(board.legal_moves(Player::One, Position::Bar, &moves(&[1, 2])).is_empty());
    }

    #[test]
    fn test_bar_entry() {
        let board = Board::from_placements(
            &[
                (0, Player::Two, 2),
                (2, Player::Two, 1),
                (3, Player::Two, 11),
                (12, Player::One, 14),
            ],
            [1, 1],
            [0, 0],
        )
        .unwrap();

        // Player Two enters on die - 1: 1 -> point 0 (own), 4 -> point 3 (own).
        let legal = board.legal_moves(Player::Two, Position::Bar, &moves(&[1, 4]));
        assert_eq!(legal, vec![
            HalfMove::new(Position::Bar, Position::Board(0), 1),
            HalfMove::new(Position::Bar, Position::Board(3), 4),
        ]);
        assert!(board.legal_moves(Player::Two, Position::Board(3), &moves(&[1, 4])).is_empty());

        // Player One enters on 24 - die, all open.
        let legal = board.legal_moves(Player::One, Position::Bar, &moves(&[6, 6, 6, 6]));
        assert_eq!(legal, vec![HalfMove::new(Position::Bar, Position::Board(18), 6)]);
        assert!(board.legal_moves(Player::One, Position::Board(12), &moves(&[6])).is_empty());
    }

    #[test]
    fn test_bar_entry_blocked() {
        let board = Board::from_placements(
            &[
                (18, Player::Two, 2),
                (19, Player::Two, 2),
                (22, Player::Two, 11),
                (12, Player::One, 14),
            ],
            [1, 0],
            [0, 0],
        )
        .unwrap();
        assert!(board.legal_moves(Player::One, Position::Bar, &moves(&[6, 5])).is_empty());
        assert!(!board.has_any_legal_move(Player::One, &moves(&[6, 5])));
        assert!(board.has_any_legal_move(Player::One, &moves(&[3])));
    }

    #[test]
    fn test_bear_off_exact_and_overage() {
        let board = Board::from_placements(
            &[(1, Player::One, 2), (3, Player::One, 3), (20, Player::Two, 15)],
            [0, 0],
            [10, 0],
        )
        .unwrap();

        let legal = board.legal_moves(Player::One, Position::Board(3), &moves(&[4, 6]));
        assert_eq!(legal, vec![
            HalfMove::new(Position::Board(3), Position::Off, 4),
            HalfMove::new(Position::Board(3), Position::Off, 6),
        ]);

        // A checker sits further back on point 3, so point 1 may only bear off exactly.
        let legal = board.legal_moves(Player::One, Position::Board(1), &moves(&[2, 6]));
        assert_eq!(legal, vec![HalfMove::new(Position::Board(1), Position::Off, 2)]);

        let legal = board.legal_moves(Player::One, Position::Board(3), &moves(&[2]));
        assert_eq!(legal, vec![HalfMove::new(Position::Board(3), Position::Board(1), 2)]);
    }

    #[test]
    fn test_bear_off_player_two() {
        let board = Board::from_placements(
            &[(20, Player::Two, 5), (22, Player::Two, 10), (5, Player::One, 15)],
            [0, 0],
            [0, 0],
        )
        .unwrap();
        let legal = board.legal_moves(Player::Two, Position::Board(20), &moves(&[4, 6]));
        assert_eq!(legal, vec![
            HalfMove::new(Position::Board(20), Position::Off, 4),
            HalfMove::new(Position::Board(20), Position::Off, 6),
        ]);
        let legal = board.legal_moves(Player::Two, Position::Board(22), &moves(&[6]));
        assert!(legal.is_empty());
    }

    #[test]
    fn test_no_bear_off_before_all_home() {
        let board = Board::from_placements(
            &[(2, Player::One, 14), (8, Player::One, 1), (20, Player::Two, 15)],
            [0, 0],
            [0, 0],
        )
        .unwrap();
        assert!(board.legal_moves(Player::One, Position::Board(2), &moves(&[3, 6])).is_empty());
    }

    #[test]
    fn test_hit_sends_blot_to_bar() {
        let mut board = Board::from_placements(
            &[(10, Player::One, 15), (7, Player::Two, 1), (20, Player::Two, 14)],
            [0, 0],
            [0, 0],
        )
        .unwrap();
        let hit = board.make_half_move_unchecked(
            Player::One,
            &HalfMove::new(Position::Board(10), Position::Board(7), 3),
        );
        assert!(hit);
        assert_eq!(board.point(7), Point { occupant: Some(Player::One), count: 1 });
        assert_eq!(board.bar(Player::Two), 1);
        assert_eq!(board.total_checkers(Player::Two), 15);
        assert_eq!(board.total_checkers(Player::One), 15);
    }

    #[test]
    fn test_turn_sequences_opening() {
        let board = Board::new();
        for dice in crate::backgammon::Dice::ALL {
            let sequences = board.turn_sequences(Player::One, &dice.moves());
            assert!(!sequences.is_empty(), "no sequence for {:?}", dice);
            let expected_len = if dice.is_double() { 4 } else { 2 };
            assert!(sequences.iter().all(|mv| mv.len() == expected_len));
        }
    }

    #[test]
    fn test_turn_sequences_merges_orderings() {
        let board = Board::from_placements(
            &[(12, Player::One, 15), (0, Player::Two, 15)],
            [0, 0],
            [0, 0],
        )
        .unwrap();
        // 12 -> 9 -> 8 and 12 -> 11 -> 8 end on the same board.
        let sequences = board.turn_sequences(Player::One, &moves(&[3, 1]));
        let both_on_eight = sequences
            .iter()
            .filter(|mv| mv.iter().any(|hm| hm.to == Position::Board(8)))
            .count();
        assert_eq!(both_on_eight, 1);
        // 9+11, and 8.
        assert_eq!(sequences.len(), 2);
    }

    #[test]
    fn test_turn_sequences_merges_boards_reached_with_different_dice() {
        // The last checker bears off with either die, the other die has no use.
        let board = Board::from_placements(
            &[(0, Player::One, 1), (20, Player::Two, 15)],
            [0, 0],
            [14, 0],
        )
        .unwrap();
        let sequences = board.turn_sequences(Player::One, &moves(&[1, 6]));
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].len(), 1);
        assert_eq!(sequences[0][0].to, Position::Off);
    }

    #[test]
    fn test_turn_sequences_blocked() {
        let board = Board::from_placements(
            &[
                (18, Player::Two, 2),
                (19, Player::Two, 2),
                (22, Player::Two, 11),
                (12, Player::One, 14),
            ],
            [1, 0],
            [0, 0],
        )
        .unwrap();
        assert!(board.turn_sequences(Player::One, &moves(&[6, 5])).is_empty());
    }

    #[test]
    fn test_display() {
        let text = Board::new().to_string();
        assert!(text.contains("Off: Player 1 0, Player 2 0"));
        assert_eq!(text.lines().count(), 6);
    }
}
