//! Tile merge engine: compact-and-merge along one direction.
//!
//! Each of the four lines (rows for horizontal moves, columns for vertical
//! moves) is processed independently. A line is materialized as four flat
//! indices ordered from the edge the tiles move toward back to the far edge,
//! which lets a single traversal serve all four directions.

use crate::action::Action;
use crate::board::{BOARD_SIDE, Board, CELL_COUNT};

/// Applies one directional move to the board in place.
///
/// Semantics per line, scanning targets from the destination edge outward:
/// tiles slide into empty cells, equal neighbours merge exactly once per
/// move (the merged cell is locked), and a differing tile blocks everything
/// behind it. Merged results never cascade within the same move.
///
/// A line with nothing to move is left untouched; the engine does not
/// report whether the move changed anything.
pub fn apply_move(board: &mut Board, action: Action) {
    let cells = board.cells_mut();
    for line in 0..BOARD_SIDE {
        let indices = line_indices(action, line);
        for target in 0..BOARD_SIDE - 1 {
            for source in target + 1..BOARD_SIDE {
                if merge_step(cells, indices[target], indices[source]) {
                    break;
                }
            }
        }
    }
}

/// One merge step between a target cell and a source cell farther from the
/// destination edge. Returns `true` when the target can accept no further
/// sources in this pass (merged and locked, or blocked by a differing tile).
fn merge_step(cells: &mut [u8; CELL_COUNT], target: usize, source: usize) -> bool {
    if cells[target] == 0 {
        cells[target] = cells[source];
        cells[source] = 0;
    } else if cells[target] == cells[source] {
        cells[target] += 1;
        cells[source] = 0;
        return true;
    } else if cells[source] != 0 {
        return true;
    }
    false
}

/// Flat indices of one line, ordered from the destination edge outward.
///
/// `line` selects the row for horizontal moves and the column for vertical
/// moves. The scan axis and scan orientation both fall out of the action.
fn line_indices(action: Action, line: usize) -> [usize; BOARD_SIDE] {
    let mut indices = [0; BOARD_SIDE];
    for (position, slot) in indices.iter_mut().enumerate() {
        let along = match action {
            Action::MoveRight | Action::MoveDown => BOARD_SIDE - 1 - position,
            Action::MoveLeft | Action::MoveUp => position,
        };
        *slot = if action.is_horizontal() {
            Board::index_of(line, along)
        } else {
            Board::index_of(along, line)
        };
    }
    indices
}
