use crate::Error;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// The dimension of the board: N x N squares.
pub const N: usize = 15;
const Q: usize = 1 + N / 2;

/// Quarter of the standard bonus layout; the full grid is its mirror
/// image in both directions.
const STANDARD_QUARTER_GRID: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- ss",
];

/// Bonus tag of a single board square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bonus {
    NoBonus,
    /// The center square: must be covered by the first word, and
    /// doubles the word score.
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

use Bonus::{LetterBonus, NoBonus, Start, WordBonus};

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Bonus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Bonus; N]; N];

/// The immutable 15x15 bonus grid.
///
/// Fixed at board construction and identical every game: triple-word
/// corners and edges, double-word diagonals, the letter-bonus interior
/// pattern, and the double-word center square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::expand_quarter_grid(&STANDARD_QUARTER_GRID)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Grid {
    fn empty() -> Grid {
        Grid([[NoBonus; N]; N])
    }

    /// Build the full grid by mirroring a quarter grid horizontally
    /// and vertically.
    fn expand_quarter_grid(qg: &[&str; Q]) -> Grid {
        let mut grid = Grid::empty();
        for (i, row) in qg.iter().enumerate() {
            let row = row.split(' ').collect::<Vec<&str>>();
            assert!(row.len() == Q);
            for (j, c) in row.iter().enumerate() {
                let val = c.parse().unwrap();
                grid.0[i][j] = val;
                grid.0[N - i - 1][j] = val;
                grid.0[i][N - j - 1] = val;
                grid.0[N - i - 1][N - j - 1] = val;
            }
        }
        grid
    }

    /// Bonus tag at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> Bonus {
        self.0[row][col]
    }

    /// Get the grid as a vec of 15 strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Bonus::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Parameter `grid` must have 15 rows, each row consisting of 15
    /// elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as
    /// a [`Bonus`].
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut result = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split(' ').collect();
            if cells.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    cells.len(),
                ));
            }
            for (j, &cell) in cells.iter().enumerate() {
                result.0[i][j] = cell.parse()?;
            }
        }
        Ok(result)
    }
}
