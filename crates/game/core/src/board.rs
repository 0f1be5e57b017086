//! Fixed 4×4 board of exponent-encoded tiles.
//!
//! A cell stores an exponent `e`; the displayed tile value is `2^e`, and `0`
//! marks an empty cell. The board is pure data: win/loss rules live in the
//! engine, not here.

/// Cells per side of the (square) board.
pub const BOARD_SIDE: usize = 4;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Exponent that wins the game: `2^11 = 2048`.
pub const WIN_EXPONENT: u8 = 11;

/// 4×4 grid of tile exponents, stored row-major.
///
/// # Invariants
///
/// - Every cell is either `0` (empty) or a positive exponent.
/// - While a game is in progress no cell exceeds [`WIN_EXPONENT`]; the
///   engine declares the game won before a larger exponent can be produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Creates a board from row-major exponents. Handy for tests and tools.
    pub const fn from_cells(cells: [u8; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns the exponent at `(row, col)`.
    ///
    /// Both coordinates must be in `[0, 4)`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[Self::index_of(row, col)]
    }

    /// Writes the exponent at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, exponent: u8) {
        self.cells[Self::index_of(row, col)] = exponent;
    }

    /// Returns the exponent at a flat row-major index.
    pub fn get_index(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Writes the exponent at a flat row-major index.
    pub fn set_index(&mut self, index: usize, exponent: u8) {
        self.cells[index] = exponent;
    }

    /// Flat row-major index for `(row, col)`.
    pub const fn index_of(row: usize, col: usize) -> usize {
        debug_assert!(row < BOARD_SIDE && col < BOARD_SIDE);
        row * BOARD_SIDE + col
    }

    /// Iterates all 16 exponents in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().copied()
    }

    /// Iterates the flat indices of all empty cells, in row-major order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 0)
            .map(|(index, _)| index)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Mutable access to the raw cells, for the merge engine.
    pub(crate) fn cells_mut(&mut self) -> &mut [u8; CELL_COUNT] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), CELL_COUNT);
        assert!(board.iter().all(|cell| cell == 0));
    }

    #[test]
    fn row_col_addressing_is_row_major() {
        let mut board = Board::new();
        board.set(2, 3, 5);
        assert_eq!(board.get(2, 3), 5);
        assert_eq!(board.get_index(2 * BOARD_SIDE + 3), 5);
    }

    #[test]
    fn empty_plus_occupied_is_sixteen() {
        let mut board = Board::new();
        board.set(0, 0, 1);
        board.set(1, 1, 2);
        board.set(3, 3, 3);

        let occupied = board.iter().filter(|&cell| cell != 0).count();
        assert_eq!(board.empty_count() + occupied, CELL_COUNT);
    }

    #[test]
    fn empty_indices_skip_occupied_cells() {
        let mut board = Board::new();
        board.set_index(0, 1);
        board.set_index(15, 4);

        let empties: Vec<usize> = board.empty_indices().collect();
        assert_eq!(empties.len(), 14);
        assert!(!empties.contains(&0));
        assert!(!empties.contains(&15));
    }
}
