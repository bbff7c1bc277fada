//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{Coord, LineAnalyzer};

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The best utility this player can hope for (+1 for X, -1 for O)
    pub fn ideal_utility(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown player '{other}' (expected X or O)"),
            }),
        }
    }
}

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(player) => player.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Mark(Player::X)),
            'O' | 'o' | '0' => Some(Cell::Mark(Player::O)),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A move target as `(row, col)`
///
/// Coordinates are not range-checked on construction; [`Board::result`]
/// rejects anything outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    /// Parse `"row,col"`, e.g. `"1,2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidAction {
            input: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Action { row, col })
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    XWins,
    OWins,
    Tie,
}

impl Verdict {
    pub fn winner(self) -> Option<Player> {
        match self {
            Verdict::XWins => Some(Player::X),
            Verdict::OWins => Some(Player::O),
            Verdict::Tie => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "{player} wins"),
            None => write!(f, "Tie"),
        }
    }
}

/// A 3x3 tic-tac-toe board
///
/// The player to move is not stored: it is derived from the number of empty
/// cells, with X always moving first. Boards are `Copy` values and every move
/// produces a new board, so search can branch without undoing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; 3]; 3],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; 3]; 3],
        }
    }

    /// Build a board from raw rows without validating piece counts.
    pub fn from_rows(grid: [[Cell; 3]; 3]) -> Self {
        Board { grid }
    }

    /// Parse a board from nine cell characters in row-major order.
    ///
    /// Whitespace is ignored, so `"XX. OO. ..."` and multi-line input both
    /// work. `.` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Other than 9 non-whitespace characters are given
    /// - Any character is not a valid cell representation
    /// - The piece counts cannot arise with X moving first
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut grid = [[Cell::Empty; 3]; 3];
        for (i, &c) in chars.iter().enumerate() {
            grid[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let board = Board { grid };
        let x_count = board.count(Cell::Mark(Player::X));
        let o_count = board.count(Cell::Mark(Player::O));
        if x_count != o_count && x_count != o_count + 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(board)
    }

    /// Raw rows of the board
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.grid
    }

    /// Get the cell at `(row, col)`, or `None` off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    fn count(&self, target: Cell) -> usize {
        self.grid.iter().flatten().filter(|&&c| c == target).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// Player whose turn it is: X when the empty count is odd, else O.
    ///
    /// Also defined on terminal boards, where it has no meaning for play.
    pub fn player(&self) -> Player {
        if self.empty_count() % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells in row-major order
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.empty_count());
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    actions.push(Action { row, col });
                }
            }
        }
        actions
    }

    /// Every empty cell paired with the board that marking it produces,
    /// in row-major order.
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        let mark = Cell::Mark(self.player());
        self.actions().into_iter().map(move |action| {
            let mut next = *self;
            next.grid[action.row][action.col] = mark;
            (action, next)
        })
    }

    /// Place the current player's mark and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the coordinate is off the
    /// board or the cell is already marked.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, crate::Error> {
        if !action.in_bounds() || !self.grid[action.row][action.col].is_empty() {
            return Err(crate::Error::InvalidMove {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.grid[action.row][action.col] = Cell::Mark(self.player());
        Ok(next)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.grid, player)
    }

    /// Get the winner if there is one.
    ///
    /// A board showing lines for both players cannot come from legal play;
    /// X is reported in that case.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// The first completed line of the winner, if any
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        let winner = self.winner()?;
        LineAnalyzer::completed_lines(&self.grid, winner)
            .into_iter()
            .next()
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_count() == 0
    }

    /// 1 if X won, -1 if O won, 0 otherwise (including unfinished boards)
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Outcome of a finished game, `None` while play continues
    pub fn verdict(&self) -> Option<Verdict> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.winner() {
            Some(Player::X) => Verdict::XWins,
            Some(Player::O) => Verdict::OWins,
            None => Verdict::Tie,
        })
    }

    /// Compact row-major encoding, e.g. `"XX.OO...."`
    pub fn encode(&self) -> String {
        self.grid.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
