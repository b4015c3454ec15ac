//! Connect-Four board state and win detection. No I/O happens here.

use std::sync::LazyLock;

use crate::error::IllegalMove;

/// Number of rows on the board.
pub const ROWS: usize = 6;
/// Number of columns on the board.
pub const COLS: usize = 7;

/// One of the two players. White owns the even plies and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The side that opens the game.
    White,
    /// The side that moves second.
    Black,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

// All 69 four-in-a-row lines on the 6x7 grid (24 horizontal, 21 vertical,
// 12 rising and 12 falling diagonals), as (row, column) quadruples.
// Computed once and shared by every board.
static WIN_LINES: LazyLock<Vec<[(usize, usize); 4]>> = LazyLock::new(|| {
    let mut lines = Vec::with_capacity(69);
    for r in 0..ROWS {
        for c in 0..COLS {
            if c + 3 < COLS {
                lines.push([(r, c), (r, c + 1), (r, c + 2), (r, c + 3)]);
            }
            if r + 3 < ROWS {
                lines.push([(r, c), (r + 1, c), (r + 2, c), (r + 3, c)]);
            }
            if r + 3 < ROWS && c + 3 < COLS {
                lines.push([(r, c), (r + 1, c + 1), (r + 2, c + 2), (r + 3, c + 3)]);
            }
            if r >= 3 && c + 3 < COLS {
                lines.push([(r, c), (r - 1, c + 1), (r - 2, c + 2), (r - 3, c + 3)]);
            }
        }
    }
    lines
});

/// Grid, column heights and move history for one game.
///
/// Row 0 is the bottom row; pieces stack upwards. The mark placed by
/// [`apply_move`](Self::apply_move) is determined by ply parity, so the
/// board itself tracks whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Side>; COLS]; ROWS],
    heights: [usize; COLS],
    history: Vec<usize>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board {
            cells: [[None; COLS]; ROWS],
            heights: [0; COLS],
            history: Vec::new(),
        }
    }

    /// Columns that can still take a piece.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&c| self.heights[c] < ROWS).collect()
    }

    /// Number of plies played so far.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// The side whose turn it is.
    pub fn to_move(&self) -> Side {
        if self.ply() % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    /// Current height of `column`.
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    /// Mark at (`row`, `column`), if any.
    pub fn cell(&self, row: usize, column: usize) -> Option<Side> {
        self.cells[row][column]
    }

    /// Columns played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Drops the current side's piece into `column`.
    ///
    /// # Errors
    ///
    /// [`IllegalMove`] when `column` is out of range or already full. The
    /// board is left untouched in that case.
    pub fn apply_move(&mut self, column: usize) -> Result<(), IllegalMove> {
        if column >= COLS || self.heights[column] >= ROWS {
            return Err(IllegalMove(column));
        }
        self.cells[self.heights[column]][column] = Some(self.to_move());
        self.heights[column] += 1;
        self.history.push(column);
        Ok(())
    }

    /// True once all 42 cells are taken.
    pub fn is_full(&self) -> bool {
        self.history.len() == ROWS * COLS
    }

    /// The side holding a completed line, if any.
    ///
    /// `None` does not by itself mean the game is over; it only becomes a
    /// draw once the board is full. See [`finished`](Self::finished).
    pub fn winner(&self) -> Option<Side> {
        WIN_LINES.iter().find_map(|line| {
            let mark = self.cells[line[0].0][line[0].1]?;
            line[1..]
                .iter()
                .all(|&(r, c)| self.cells[r][c] == Some(mark))
                .then_some(mark)
        })
    }

    /// True when the board is full or a line is completed.
    pub fn finished(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod board_tests {
    use super::*;

    fn play_all(board: &mut Board, columns: &[usize]) {
        for &column in columns {
            board.apply_move(column).unwrap();
        }
    }

    #[test]
    fn line_table_covers_every_orientation() {
        assert_eq!(WIN_LINES.len(), 69);
    }

    #[test]
    fn horizontal_line_wins() {
        let mut board = Board::new();
        // White fills row 0, columns 0-3; Black parks on column 6.
        play_all(&mut board, &[0, 6, 1, 6, 2, 6, 3]);
        assert_eq!(board.winner(), Some(Side::White));
        assert!(board.finished());
    }

    #[test]
    fn vertical_line_wins() {
        let mut board = Board::new();
        play_all(&mut board, &[2, 0, 2, 1, 2, 0, 2]);
        assert_eq!(board.winner(), Some(Side::White));
        assert!(board.finished());
    }

    #[test]
    fn rising_diagonal_wins() {
        let mut board = Board::new();
        // White ends up on (0,0), (1,1), (2,2), (3,3).
        play_all(&mut board, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
        assert_eq!(board.winner(), Some(Side::White));
    }

    #[test]
    fn falling_diagonal_wins() {
        let mut board = Board::new();
        // Mirror image of the rising case: (0,6), (1,5), (2,4), (3,3).
        play_all(&mut board, &[6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3]);
        assert_eq!(board.winner(), Some(Side::White));
    }

    #[test]
    fn marks_follow_ply_parity() {
        let mut board = Board::new();
        play_all(&mut board, &[3, 3, 4]);
        assert_eq!(board.cell(0, 3), Some(Side::White));
        assert_eq!(board.cell(1, 3), Some(Side::Black));
        assert_eq!(board.cell(0, 4), Some(Side::White));
        assert_eq!(board.to_move(), Side::Black);
        assert_eq!(board.history(), &[3, 3, 4]);
    }

    #[test]
    fn column_fills_to_six_then_rejects() {
        let mut board = Board::new();
        for stacked in 1..=ROWS {
            board.apply_move(3).unwrap();
            assert_eq!(board.height(3), stacked);
        }
        assert_eq!(board.apply_move(3), Err(IllegalMove(3)));
        assert!(!board.legal_columns().contains(&3));
        assert_eq!(board.ply(), ROWS);
    }

    #[test]
    fn out_of_range_column_rejected() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(COLS), Err(IllegalMove(COLS)));
        assert!(board.history().is_empty());
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // Fill the board level by level with a two-column weave that
        // never lines up four marks in any direction.
        let mut moves = Vec::new();
        for level in 0..3 {
            for pair in [[0, 1], [2, 3], [4, 5]] {
                let [a, b] = if level % 2 == 0 {
                    pair
                } else {
                    [pair[1], pair[0]]
                };
                moves.extend([a, b, b, a]);
            }
            moves.extend([6, 6]);
        }

        let mut board = Board::new();
        for &column in &moves {
            // Draw stays a live state the whole way down.
            assert_eq!(board.winner(), None);
            board.apply_move(column).unwrap();
        }
        assert!(board.is_full());
        assert!(board.finished());
        assert_eq!(board.winner(), None);
    }
}
