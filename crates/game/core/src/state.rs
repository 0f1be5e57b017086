//! Authoritative game state and the Playing/Won/Lost machine.
//!
//! [`Game`] is the single mutable unit of the whole system. The driving loop
//! owns it exclusively and passes it by `&mut` into the engine; nothing is
//! shared and nothing is global. Frontends read it through the query surface
//! (`board`, `status`, `score`, `moves`, `last_inserted`) and write to it
//! only via [`Game::set_pending`].

use crate::action::Action;
use crate::board::Board;
use crate::rng::Pcg32;
use crate::spawn::spawn_random_tile;

/// Lifecycle of a single game.
///
/// `Playing` is the initial state. `Won` and `Lost` are terminal: once
/// entered, the engine ignores all further directional input and the board
/// freezes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Complete state of one game: board, status, counters, pending input, and
/// the deterministic RNG stream that feeds the tile spawner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    pub(crate) pending: Option<Action>,
    pub(crate) score: u32,
    pub(crate) moves: u32,
    pub(crate) last_inserted: Option<usize>,
    pub(crate) rng: Pcg32,
}

impl Game {
    /// Starts a new game: empty board, two seeded tiles, zero moves.
    ///
    /// The seed fully determines the game's random stream; frontends pass
    /// entropy here (or a fixed value for replay).
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            board: Board::new(),
            status: GameStatus::Playing,
            pending: None,
            score: 0,
            moves: 0,
            last_inserted: None,
            rng: Pcg32::new(seed),
        };

        // Classic 2048 opening: two tiles on the board before the first move.
        // The board is empty, so neither spawn can fail.
        let _ = spawn_random_tile(&mut game.board, &mut game.rng);
        let _ = spawn_random_tile(&mut game.board, &mut game.rng);
        game.score = game.board.iter().map(|cell| 1u32 << cell).sum();

        game
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle state.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Derived score: `Σ 2^cell` over all 16 cells, recomputed by the engine
    /// on every advance.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of accepted moves so far. Monotonically non-decreasing.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Flat index of the most recently spawned tile, if any.
    pub fn last_inserted(&self) -> Option<usize> {
        self.last_inserted
    }

    /// Action waiting to be consumed by the next advance, if any.
    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    /// Stores the action for the next advance. Within one input batch the
    /// last write wins; the engine consumes at most one action per round.
    pub fn set_pending(&mut self, action: Action) {
        self.pending = Some(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_exactly_two_tiles() {
        let game = Game::new(3);
        let occupied = game.board().iter().filter(|&cell| cell != 0).count();
        assert_eq!(occupied, 2);
        assert!(
            game.board()
                .iter()
                .filter(|&cell| cell != 0)
                .all(|cell| cell == 1 || cell == 2)
        );
    }

    #[test]
    fn new_game_starts_playing_with_zero_moves() {
        let game = Game::new(17);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.pending(), None);
    }

    #[test]
    fn initial_score_matches_board_contents() {
        let game = Game::new(8);
        let expected: u32 = game.board().iter().map(|cell| 1u32 << cell).sum();
        assert_eq!(game.score(), expected);
    }

    #[test]
    fn same_seed_gives_identical_openings() {
        assert_eq!(Game::new(5).board(), Game::new(5).board());
    }

    #[test]
    fn pending_is_last_writer_wins() {
        let mut game = Game::new(0);
        game.set_pending(Action::MoveLeft);
        game.set_pending(Action::MoveUp);
        assert_eq!(game.pending(), Some(Action::MoveUp));
    }
}
