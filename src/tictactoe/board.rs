//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{
    Error, Result,
    ports::BoardAdapter,
    types::{CELL_COUNT, CellId, MoveKey},
};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player in the game. The agent always plays X and always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The automated player
    pub const AGENT: Player = Player::X;
    /// The human player
    pub const HUMAN: Player = Player::O;

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn is_agent(self) -> bool {
        self == Self::AGENT
    }
}

/// Board cells plus the append-only history of plies that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    plies: Vec<CellId>,
}

impl Board {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
            plies: Vec::with_capacity(CELL_COUNT),
        }
    }

    /// Rebuild a board by replaying every ply of a key, X first.
    ///
    /// # Errors
    ///
    /// Returns error if a ply is played after the game was already won.
    pub fn from_key(key: &MoveKey) -> Result<Self> {
        let mut board = Self::new();
        for cell in key.cells() {
            if board.winner().is_some() {
                return Err(Error::GameOver);
            }
            board.play(cell)?;
        }
        Ok(board)
    }

    /// Get the contents of a cell
    pub fn get(&self, cell: CellId) -> Cell {
        self.cells[cell.index()]
    }

    /// Check whether a cell is still free
    pub fn is_empty(&self, cell: CellId) -> bool {
        self.get(cell) == Cell::Empty
    }

    /// All free cells in ascending order
    pub fn empty_cells(&self) -> Vec<CellId> {
        CellId::all().filter(|&c| self.is_empty(c)).collect()
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        if self.plies.len().is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Occupy a cell for the player to move, returning who moved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOccupied`] if the cell is already taken.
    pub fn play(&mut self, cell: CellId) -> Result<Player> {
        if !self.is_empty(cell) {
            return Err(Error::CellOccupied { cell: cell.value() });
        }
        let player = self.to_move();
        self.cells[cell.index()] = player.to_cell();
        self.plies.push(cell);
        Ok(player)
    }

    /// Cells played so far, in chronological order
    pub fn plies(&self) -> &[CellId] {
        &self.plies
    }

    /// Check if the given player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        self.plies.len() == CELL_COUNT
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardAdapter for Board {
    fn plies(&self) -> &[CellId] {
        Board::plies(self)
    }

    fn is_cell_empty(&self, cell: CellId) -> bool {
        self.is_empty(cell)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "    -----------")?;
            }
            let marks: Vec<String> = (0..3)
                .map(|col| format!(" {} ", self.cells[row * 3 + col].to_char()))
                .collect();
            writeln!(f, "    {}", marks.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(n: usize) -> CellId {
        CellId::new(n).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.empty_cells().len(), 9);
        assert!(board.plies().is_empty());
    }

    #[test]
    fn test_play_alternates_players() {
        let mut board = Board::new();
        assert_eq!(board.play(cell(5)).unwrap(), Player::X);
        assert_eq!(board.play(cell(1)).unwrap(), Player::O);
        assert_eq!(board.get(cell(5)), Cell::X);
        assert_eq!(board.get(cell(1)), Cell::O);
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.plies(), &[cell(5), cell(1)]);
    }

    #[test]
    fn test_play_rejects_occupied_cell() {
        let mut board = Board::new();
        board.play(cell(5)).unwrap();
        let err = board.play(cell(5)).unwrap_err();
        assert!(matches!(err, Error::CellOccupied { cell: 5 }));
        assert_eq!(board.plies().len(), 1);
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board = Board::from_key(&MoveKey::parse("915").unwrap()).unwrap();
        let empty: Vec<usize> = board.empty_cells().into_iter().map(CellId::value).collect();
        assert_eq!(empty, vec![2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_win_detection() {
        // X: 1 2 3, O: 4 5
        let board = Board::from_key(&MoveKey::parse("14253").unwrap()).unwrap();
        assert_eq!(board.winner(), Some(Player::X));

        // O: 3 5 7 on the anti-diagonal
        let board = Board::from_key(&MoveKey::parse("13259").unwrap()).unwrap();
        assert!(!board.has_won(Player::O));
        let board = Board::from_key(&MoveKey::parse("132597").unwrap()).unwrap();
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_from_key_rejects_play_after_win() {
        let key = MoveKey::parse("142539").unwrap();
        assert!(matches!(Board::from_key(&key), Err(Error::GameOver)));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = Board::from_key(&MoveKey::parse("153286479").unwrap()).unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_key(&MoveKey::parse("15").unwrap()).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "     X |   |   ");
        assert_eq!(lines[1], "    -----------");
        assert_eq!(lines[2], "       | O |   ");
    }
}
