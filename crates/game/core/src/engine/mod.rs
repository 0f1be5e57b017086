//! Round resolution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`Game`]. One call to
//! [`GameEngine::advance`] consumes at most one pending action, spawns the
//! follow-up tile, evaluates the terminal conditions, and recomputes the
//! derived score. Frontends never mutate game state any other way.

pub mod merge;

use crate::board::{BOARD_SIDE, Board, WIN_EXPONENT};
use crate::spawn::spawn_random_tile;
use crate::state::{Game, GameStatus};

/// Game engine driving one game forward, one round at a time.
///
/// Borrows the game exclusively for the duration of a round; the driving
/// loop constructs one per iteration:
///
/// ```
/// use game_core::{Action, Game, GameEngine};
///
/// let mut game = Game::new(42);
/// game.set_pending(Action::MoveRight);
/// GameEngine::new(&mut game).advance();
/// ```
pub struct GameEngine<'a> {
    game: &'a mut Game,
}

impl<'a> GameEngine<'a> {
    /// Creates an engine over the given game.
    pub fn new(game: &'a mut Game) -> Self {
        Self { game }
    }

    /// Resolves one round.
    ///
    /// While the game is `Playing`:
    /// 1. apply the pending action (if any) through the merge engine;
    /// 2. on a consumed action: spawn a random tile, record it as
    ///    `last_inserted`, and increment the move counter;
    /// 3. check win (any cell at [`WIN_EXPONENT`]), then loss (full board
    ///    with no equal adjacent pair) — win takes precedence.
    ///
    /// The score is recomputed unconditionally, terminal or not. A pending
    /// action that moves nothing still consumes the round: a tile is
    /// spawned and the move counter advances.
    pub fn advance(&mut self) {
        let game = &mut *self.game;
        if game.status == GameStatus::Playing {
            if let Some(action) = game.pending {
                merge::apply_move(&mut game.board, action);
            }
            if game.pending.take().is_some() {
                game.last_inserted = spawn_random_tile(&mut game.board, &mut game.rng);
                game.moves += 1;
            }

            if has_won(&game.board) {
                game.status = GameStatus::Won;
            } else if has_lost(&game.board) {
                game.status = GameStatus::Lost;
            }
        }
        game.score = calculate_score(&game.board);
    }
}

/// True when any cell has reached the winning exponent.
fn has_won(board: &Board) -> bool {
    board.iter().any(|cell| cell == WIN_EXPONENT)
}

/// True when the board is full and no legal merge remains.
///
/// The adjacency scan checks each cell against its successor along both
/// axes only; predecessors are covered by the cell before them, and edge
/// cells simply have fewer pairs. Equal neighbours anywhere mean a move is
/// still possible.
fn has_lost(board: &Board) -> bool {
    if !board.is_full() {
        return false;
    }
    for a in 0..BOARD_SIDE - 1 {
        for b in 0..BOARD_SIDE {
            if board.get(a, b) == board.get(a + 1, b) || board.get(b, a) == board.get(b, a + 1) {
                return false;
            }
        }
    }
    true
}

/// Derived score: `Σ 2^cell` over all cells. Empty cells contribute
/// `2^0 = 1` apiece, so an empty board scores 16.
fn calculate_score(board: &Board) -> u32 {
    board.iter().map(|cell| 1u32 << cell).sum()
}
