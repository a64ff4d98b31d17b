use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The number of cells on the board.
pub const CELLS: usize = 9;

/// The index of the center cell.
pub const CENTER: usize = 4;

/// The 8 index triplets that constitute a win when uniformly marked:
/// the three rows, the three columns, and the two diagonals, in that order.
///
/// The order is part of the evaluator's contract: on boards where several
/// lines are satisfied at once, the first triplet here decides.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two marks that can occupy a cell.
///
/// `X` always moves first; play alternates strictly between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the player who moves after this one.
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The cell index is not in `0..9`.
    #[error("cell index {0} is out of range (0..=8)")]
    OutOfRange(usize),
    /// The cell already holds a mark. Marks are never overwritten.
    #[error("cell {0} is already occupied")]
    Occupied(usize),
    /// The round has already reached a terminal state.
    #[error("the round is already over")]
    Finished,
}

/// A 3x3 board snapshot.
///
/// Cells are stored row-major: `index = row * 3 + col`, indices `0..9`.
/// The type is `Copy`, so the engine can take a snapshot and backtrack on
/// its own scratch copy without the caller's board ever changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Player>; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from an explicit cell array.
    pub const fn from_cells(cells: [Option<Player>; CELLS]) -> Self {
        Self { cells }
    }

    /// Returns the mark at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    /// Places `player`'s mark at `index`.
    ///
    /// Rejects out-of-range indices and occupied cells; a mark, once placed,
    /// stays until a new board replaces this one.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        if index >= CELLS {
            return Err(MoveError::OutOfRange(index));
        }
        if self.cells[index].is_some() {
            return Err(MoveError::Occupied(index));
        }
        self.cells[index] = Some(player);
        Ok(())
    }

    /// Unchecked write, used by the search to place and revert hypothetical
    /// marks while backtracking.
    pub(crate) fn set(&mut self, index: usize, cell: Option<Player>) {
        self.cells[index] = cell;
    }

    /// Returns the indices of all empty cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    /// Returns the number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let base = row * 3;
            let mark = |index: usize| match self.cells[index] {
                Some(Player::X) => 'X',
                Some(Player::O) => 'O',
                None => '.',
            };
            writeln!(f, " {} | {} | {} ", mark(base), mark(base + 1), mark(base + 2))?;
        }
        Ok(())
    }
}

/// A board literal that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    /// The literal does not contain exactly 9 cell characters.
    #[error("expected 9 cells, found {0}")]
    BadLength(usize),
    /// The literal contains a character that is not a cell.
    #[error("invalid cell character {0:?}")]
    BadChar(char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a 9-character board literal in row-major order: `X` and `O`
    /// for marks, `.` or `_` for an empty cell. Whitespace is ignored, so
    /// literals may be split across rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELLS];
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' | '_' => None,
                other => return Err(ParseBoardError::BadChar(other)),
            };
            if count == CELLS {
                return Err(ParseBoardError::BadLength(count + 1));
            }
            cells[count] = cell;
            count += 1;
        }
        if count != CELLS {
            return Err(ParseBoardError::BadLength(count));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, CELLS, MoveError, ParseBoardError, Player};

    #[test]
    fn opponent_swaps() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn place_fills_an_empty_cell() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.get(4), Some(Player::X));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn place_rejects_occupied_cells() {
        let mut board = Board::new();
        board.place(0, Player::X).unwrap();
        assert_eq!(board.place(0, Player::O), Err(MoveError::Occupied(0)));
        assert_eq!(board.get(0), Some(Player::X));
    }

    #[test]
    fn place_rejects_out_of_range_indices() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Player::X), Err(MoveError::OutOfRange(9)));
    }

    #[test]
    fn parses_a_board_literal() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(board.get(0), Some(Player::X));
        assert_eq!(board.get(3), Some(Player::O));
        assert_eq!(board.get(2), None);
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn parse_ignores_whitespace() {
        let board: Board = "X . .\nO X .\n. . O".parse().unwrap();
        assert_eq!(board.get(4), Some(Player::X));
        assert_eq!(board.get(8), Some(Player::O));
    }

    #[test]
    fn parse_rejects_bad_literals() {
        assert_eq!("XO.".parse::<Board>(), Err(ParseBoardError::BadLength(3)));
        assert_eq!(
            "XO.XO.XO.X".parse::<Board>(),
            Err(ParseBoardError::BadLength(10))
        );
        assert_eq!(
            "XO.XO.XO?".parse::<Board>(),
            Err(ParseBoardError::BadChar('?'))
        );
    }

    #[test]
    fn empty_cells_lists_unmarked_indices() {
        let board: Board = "X.O.X.O.X".parse().unwrap();
        let empty: Vec<usize> = board.empty_cells().collect();
        assert_eq!(empty, vec![1, 3, 5, 7]);
        assert!(!board.is_full());

        let full: Board = "XOXXOOOXX".parse().unwrap();
        assert!(full.is_full());
        assert_eq!(full.empty_cells().count(), 0);
        assert_eq!(full.occupied_count(), CELLS);
    }
}
