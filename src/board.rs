use crate::grid::{Bonus, Grid, N};
use crate::tiles::parse_letter;
use crate::Error;
use std::fmt;

/// Placement direction of a word.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Step per letter as `(d_row, d_col)`.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    /// The crossing direction.
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "H"),
            Direction::Vertical => write!(f, "V"),
        }
    }
}

pub(crate) type Cells = [[Option<u8>; N]; N];

/// A word on the board together with the cells it occupies.
///
/// Returned by [`Board::words_formed`] for the main word and every
/// cross word created by a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormedWord {
    /// The occupied cells in reading order, as `(row, col, letter)`.
    pub cells: Vec<(usize, usize, u8)>,
}

impl FormedWord {
    pub fn text(&self) -> String {
        self.cells.iter().map(|&(_, _, l)| char::from(l)).collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The state of the board: a 15x15 grid of optional letters over the
/// fixed bonus grid.
///
/// Cells are written only by [`place`](Board::place); once occupied a
/// cell changes only when a full snapshot is restored by an undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    grid: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Display the board as 15 lines of 15 squares, "." for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', char::from))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Board {
    /// Create an empty board with the standard bonus grid.
    #[must_use]
    pub fn new() -> Board {
        Board {
            cells: [[None; N]; N],
            grid: Grid::default(),
        }
    }

    /// Set the board state from 15 strings of 15 characters each,
    /// with `.` or space for an empty cell.
    ///
    /// ## Errors
    /// If the rows have wrong dimensions or hold an invalid character.
    pub fn with_state_from_strings(mut self, rows: &[&str]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut cells = [[None; N]; N];
        for (r, &row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), chars.len()));
            }
            for (c, &ch) in chars.iter().enumerate() {
                if ch != '.' && ch != ' ' {
                    cells[r][c] = Some(parse_letter(ch)?);
                }
            }
        }
        self.cells = cells;
        Ok(self)
    }

    /// The bonus grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Letter at `row`, `col`, or `None` for an empty cell or a
    /// position outside the board.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.at(row, col).map(char::from)
    }

    /// Bonus tag at `row`, `col`.
    pub fn bonus_at(&self, row: usize, col: usize) -> Bonus {
        self.grid.at(row, col)
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.at(row, col).is_some()
    }

    /// True if no tile has been played yet (first-move state).
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_none()))
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> Option<u8> {
        if row < N && col < N {
            self.cells[row][col]
        } else {
            None
        }
    }

    /// True if `word` fits at the given position: every covered cell is
    /// in bounds and either empty or already holds the identical letter.
    pub fn can_place(&self, word: &[u8], row: usize, col: usize, dir: Direction) -> bool {
        let (dr, dc) = dir.delta();
        for (i, &letter) in word.iter().enumerate() {
            let (r, c) = (row + i * dr, col + i * dc);
            if r >= N || c >= N {
                return false;
            }
            match self.cells[r][c] {
                Some(existing) if existing != letter => return false,
                _ => {}
            }
        }
        true
    }

    /// Write `word` onto the board; cells that already hold the matching
    /// letter are left alone. The caller must have validated the
    /// placement with [`can_place`](Board::can_place).
    pub(crate) fn place(&mut self, word: &[u8], row: usize, col: usize, dir: Direction) {
        let (dr, dc) = dir.delta();
        for (i, &letter) in word.iter().enumerate() {
            let (r, c) = (row + i * dr, col + i * dc);
            if self.cells[r][c].is_none() {
                self.cells[r][c] = Some(letter);
            }
        }
    }

    /// The covered cells that are currently empty, i.e. the cells this
    /// placement would fill with new tiles.
    pub fn new_cells(&self, word: &[u8], row: usize, col: usize, dir: Direction) -> Vec<(usize, usize, u8)> {
        let (dr, dc) = dir.delta();
        word.iter()
            .enumerate()
            .map(|(i, &letter)| (row + i * dr, col + i * dc, letter))
            .filter(|&(r, c, _)| self.at(r, c).is_none())
            .collect()
    }

    /// All words formed by placing `word` at the given position: the
    /// main word, extended through any pre-existing letters at either
    /// end, plus one cross word per newly placed cell when that cross
    /// word is longer than a single letter.
    ///
    /// This is a pure query: the board is not modified. The would-be
    /// placement is overlaid on the current state while collecting the
    /// words.
    pub fn words_formed(
        &self,
        word: &[u8],
        row: usize,
        col: usize,
        dir: Direction,
    ) -> Vec<FormedWord> {
        let placed = self.new_cells(word, row, col, dir);
        let overlay = |r: usize, c: usize| -> Option<u8> {
            self.at(r, c).or_else(|| {
                placed
                    .iter()
                    .find(|&&(pr, pc, _)| (pr, pc) == (r, c))
                    .map(|&(_, _, l)| l)
            })
        };

        let extend = |r0: usize, c0: usize, dr: usize, dc: usize| -> FormedWord {
            // walk back to the first letter of the run, then forward
            let (mut r, mut c) = (r0 as isize, c0 as isize);
            let (dr, dc) = (dr as isize, dc as isize);
            while r - dr >= 0 && c - dc >= 0 && overlay((r - dr) as usize, (c - dc) as usize).is_some()
            {
                r -= dr;
                c -= dc;
            }
            let mut cells = Vec::new();
            while r < N as isize && c < N as isize {
                match overlay(r as usize, c as usize) {
                    Some(letter) => cells.push((r as usize, c as usize, letter)),
                    None => break,
                }
                r += dr;
                c += dc;
            }
            FormedWord { cells }
        };

        let (dr, dc) = dir.delta();
        let (cr, cc) = dir.perpendicular().delta();
        let mut words = vec![extend(row, col, dr, dc)];
        for &(r, c, _) in &placed {
            let cross = extend(r, c, cr, cc);
            if cross.len() > 1 {
                words.push(cross);
            }
        }
        words
    }

    /// True if the placement touches the existing tiles: some covered
    /// cell is already occupied, or is orthogonally adjacent to an
    /// occupied cell. Only meaningful on a non-empty board; the first
    /// move is governed by the center rule instead.
    pub fn is_connected(&self, word: &[u8], row: usize, col: usize, dir: Direction) -> bool {
        let (dr, dc) = dir.delta();
        for i in 0..word.len() {
            let (r, c) = (row + i * dr, col + i * dc);
            if self.is_occupied(r, c) {
                return true;
            }
            let neighbours = [
                (r.wrapping_sub(1), c),
                (r + 1, c),
                (r, c.wrapping_sub(1)),
                (r, c + 1),
            ];
            if neighbours.iter().any(|&(nr, nc)| self.is_occupied(nr, nc)) {
                return true;
            }
        }
        false
    }

    pub(crate) fn state(&self) -> Cells {
        self.cells
    }

    pub(crate) fn restore(&mut self, cells: Cells) {
        self.cells = cells;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Horizontal, Vertical};

    fn board_with(word: &str, row: usize, col: usize, dir: Direction) -> Board {
        let mut board = Board::new();
        board.place(word.as_bytes(), row, col, dir);
        board
    }

    #[test]
    fn test_can_place() {
        let board = board_with("CAT", 7, 7, Horizontal);
        // overlapping identical letter is fine
        assert!(board.can_place(b"ACE", 7, 8, Vertical));
        // conflicting letter
        assert!(!board.can_place(b"DOG", 7, 7, Horizontal));
        // off the edge
        assert!(!board.can_place(b"CAT", 7, 13, Horizontal));
        assert!(!board.can_place(b"CAT", 13, 7, Vertical));
    }

    #[test]
    fn test_words_formed_is_pure() {
        let board = board_with("CAT", 7, 7, Horizontal);
        let before = board.to_string();
        let words = board.words_formed(b"ACE", 7, 8, Vertical);
        assert_eq!(board.to_string(), before);
        let texts: Vec<String> = words.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["ACE"]);
    }

    #[test]
    fn test_main_word_extends_through_existing() {
        // SUN on the board, placing BURN vertically through the U
        let board = board_with("SUN", 7, 7, Horizontal);
        let words = board.words_formed(b"BURN", 6, 8, Vertical);
        let texts: Vec<String> = words.iter().map(|w| w.text()).collect();
        // no cross words: the B, R and N have no perpendicular neighbours
        assert_eq!(texts, vec!["BURN"]);
    }

    #[test]
    fn test_cross_words() {
        // HE placed under and left of CAT forms cross words
        let board = board_with("CAT", 7, 7, Horizontal);
        let words = board.words_formed(b"HAT", 8, 7, Horizontal);
        let texts: Vec<String> = words.iter().map(|w| w.text()).collect();
        assert_eq!(texts[0], "HAT");
        assert!(texts.contains(&"CH".to_string()));
        assert!(texts.contains(&"AA".to_string()));
        assert!(texts.contains(&"TT".to_string()));
    }

    #[test]
    fn test_extends_existing_run() {
        let board = board_with("CAT", 7, 7, Horizontal);
        let words = board.words_formed(b"S", 7, 10, Horizontal);
        assert_eq!(words[0].text(), "CATS");
        assert_eq!(words[0].cells.len(), 4);
    }

    #[test]
    fn test_is_connected() {
        let empty = Board::new();
        assert!(!empty.is_connected(b"CAT", 7, 7, Horizontal));

        let board = board_with("CAT", 7, 7, Horizontal);
        // overlaps an existing tile
        assert!(board.is_connected(b"ACE", 7, 8, Vertical));
        // adjacent to an existing tile
        assert!(board.is_connected(b"HAT", 8, 7, Horizontal));
        // far away
        assert!(!board.is_connected(b"HAT", 0, 0, Horizontal));
    }

    #[test]
    fn test_state_from_strings() -> anyhow::Result<()> {
        let board = Board::new().with_state_from_strings(&[
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            ".......CAT.....",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
        ])?;
        assert_eq!(board.letter_at(7, 7), Some('C'));
        assert_eq!(board.letter_at(7, 10), None);
        assert!(!board.is_empty());
        Ok(())
    }
}
