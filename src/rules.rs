//! The legality checker shared by human- and bot-entered moves.
use crate::board::{Board, Direction};
use crate::dictionary::Dictionary;
use crate::grid::N;
use crate::score::score_move;
use crate::tiles::Rack;
use crate::{Error, Rejection};
use std::fmt;

/// A candidate move as entered: a word at a start cell in a direction.
///
/// Constructed, validated, and then either committed or discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    word: String,
    pub row: usize,
    pub col: usize,
    pub dir: Direction,
}

impl Placement {
    /// Create a placement, normalizing the word to uppercase.
    ///
    /// ## Errors
    /// If the word is empty or holds a character outside `A..=Z`.
    /// Blanks are not written here: which tiles are played as blanks is
    /// decided by the rack matching in [`validate`].
    pub fn new(word: &str, row: usize, col: usize, dir: Direction) -> Result<Placement, Error> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }
        let word = word
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase())
                } else {
                    Err(Error::InvalidCharacter(c))
                }
            })
            .collect::<Result<String, Error>>()?;
        Ok(Placement {
            word,
            row,
            col,
            dir,
        })
    }

    pub(crate) fn from_letters(letters: &[u8], row: usize, col: usize, dir: Direction) -> Placement {
        Placement {
            word: letters.iter().map(|&l| char::from(l)).collect(),
            row,
            col,
            dir,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub(crate) fn letters(&self) -> &[u8] {
        self.word.as_bytes()
    }
}

/// A validated move, ready to be committed or discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// The word as entered (main word only, not its extensions).
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub dir: Direction,
    /// The newly placed cells, as `(row, col, letter)`.
    pub placed: Vec<(usize, usize, u8)>,
    /// The placed positions filled with a blank tile.
    pub blanks: Vec<(usize, usize)>,
    /// Total score, including cross words and any bingo bonus.
    pub score: u32,
}

impl Move {
    pub fn placement(&self) -> Placement {
        Placement {
            word: self.word.clone(),
            row: self.row,
            col: self.col,
            dir: self.dir,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at ({},{}) {} for {} points",
            self.word, self.row, self.col, self.dir, self.score
        )
    }
}

/// Decide which of the newly placed cells must be filled with a blank:
/// consume an exact-letter tile when available, otherwise a blank.
fn assign_blanks(
    rack: &Rack,
    placed: &[(usize, usize, u8)],
) -> Result<Vec<(usize, usize)>, Rejection> {
    let (mut counts, mut blanks_left) = rack.counts();
    let mut blanks = Vec::new();
    for &(r, c, letter) in placed {
        let idx = (letter - b'A') as usize;
        if counts[idx] > 0 {
            counts[idx] -= 1;
        } else if blanks_left > 0 {
            blanks_left -= 1;
            blanks.push((r, c));
        } else {
            return Err(Rejection::InsufficientTiles);
        }
    }
    Ok(blanks)
}

/// Check that the rack can supply the placed letters under a fixed
/// blank assignment (as recorded by the move search).
fn check_blanks(
    rack: &Rack,
    placed: &[(usize, usize, u8)],
    blanks: &[(usize, usize)],
) -> Result<(), Rejection> {
    let (mut counts, mut blanks_left) = rack.counts();
    for &(r, c, letter) in placed {
        if blanks.contains(&(r, c)) {
            if blanks_left == 0 {
                return Err(Rejection::InsufficientTiles);
            }
            blanks_left -= 1;
        } else {
            let idx = (letter - b'A') as usize;
            if counts[idx] == 0 {
                return Err(Rejection::InsufficientTiles);
            }
            counts[idx] -= 1;
        }
    }
    Ok(())
}

/// Validate a candidate placement against the full rule set, in order:
/// bounds, conflicting letters, rack supply, center rule (empty board)
/// or connectivity, and dictionary membership of every formed word.
///
/// When `forced_blanks` is `None` the blank assignment is derived
/// greedily (exact tile first, blank as fallback); the move search
/// passes its own assignment instead.
///
/// On success returns the scored [`Move`]; a failure has no side
/// effects.
pub fn validate(
    board: &Board,
    rack: &Rack,
    dict: &Dictionary,
    placement: &Placement,
    forced_blanks: Option<&[(usize, usize)]>,
) -> Result<Move, Rejection> {
    let word = placement.letters();
    let (row, col, dir) = (placement.row, placement.col, placement.dir);
    let (dr, dc) = dir.delta();
    let len = word.len();

    if row + (len - 1) * dr >= N || col + (len - 1) * dc >= N {
        return Err(Rejection::OutOfBounds { row, col, len });
    }
    for (i, &letter) in word.iter().enumerate() {
        let (r, c) = (row + i * dr, col + i * dc);
        if let Some(existing) = board.at(r, c) {
            if existing != letter {
                return Err(Rejection::ConflictingLetter { row: r, col: c });
            }
        }
    }

    let placed = board.new_cells(word, row, col, dir);
    let blanks = match forced_blanks {
        None => assign_blanks(rack, &placed)?,
        Some(forced) => {
            check_blanks(rack, &placed, forced)?;
            forced.to_vec()
        }
    };

    if board.is_empty() {
        let center = N / 2;
        let covers_center = (0..len).any(|i| (row + i * dr, col + i * dc) == (center, center));
        if !covers_center {
            return Err(Rejection::MustCoverCenter);
        }
    } else if !board.is_connected(word, row, col, dir) {
        return Err(Rejection::NotConnected);
    }

    let words = board.words_formed(word, row, col, dir);
    for formed in &words {
        let text = formed.text();
        if !dict.is_valid(&text) {
            return Err(Rejection::InvalidWord(text));
        }
    }

    let positions: Vec<(usize, usize)> = placed.iter().map(|&(r, c, _)| (r, c)).collect();
    let score = score_move(board.grid(), &words, &positions, &blanks);
    Ok(Move {
        word: String::from(placement.word()),
        row,
        col,
        dir,
        placed,
        blanks,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction::{Horizontal, Vertical};
    use std::convert::TryFrom;

    fn dict() -> Dictionary {
        Dictionary::from_words(&["aba", "abab", "cat", "hat", "ch", "aa", "tt", "at"])
    }

    fn place(word: &str, row: usize, col: usize, dir: Direction) -> Placement {
        Placement::new(word, row, col, dir).unwrap()
    }

    #[test]
    fn test_first_move_must_cover_center() {
        let board = Board::new();
        let rack = Rack::try_from("CATAAAA").unwrap();
        let err = validate(&board, &rack, &dict(), &place("CAT", 0, 0, Horizontal), None);
        assert_eq!(err.unwrap_err(), Rejection::MustCoverCenter);

        let mv = validate(&board, &rack, &dict(), &place("CAT", 7, 7, Horizontal), None).unwrap();
        assert_eq!(mv.score, 10);
        assert!(mv.blanks.is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new();
        let rack = Rack::try_from("CATAAAA").unwrap();
        let err = validate(&board, &rack, &dict(), &place("CAT", 7, 13, Horizontal), None);
        assert_eq!(
            err.unwrap_err(),
            Rejection::OutOfBounds {
                row: 7,
                col: 13,
                len: 3
            }
        );
    }

    #[test]
    fn test_conflicting_letter() {
        let mut board = Board::new();
        board.place(b"CAT", 7, 7, Horizontal);
        let rack = Rack::try_from("HATAAAA").unwrap();
        let err = validate(&board, &rack, &dict(), &place("HAT", 7, 7, Horizontal), None);
        assert_eq!(
            err.unwrap_err(),
            Rejection::ConflictingLetter { row: 7, col: 7 }
        );
    }

    #[test]
    fn test_not_connected() {
        let mut board = Board::new();
        board.place(b"CAT", 7, 7, Horizontal);
        let rack = Rack::try_from("HATAAAA").unwrap();
        let err = validate(&board, &rack, &dict(), &place("HAT", 0, 0, Horizontal), None);
        assert_eq!(err.unwrap_err(), Rejection::NotConnected);
    }

    #[test]
    fn test_cross_words_checked() {
        let mut board = Board::new();
        board.place(b"CAT", 7, 7, Horizontal);
        let rack = Rack::try_from("HATAAAA").unwrap();
        // HAT under CAT forms CH, AA and TT, all in the dictionary
        assert!(validate(&board, &rack, &dict(), &place("HAT", 8, 7, Horizontal), None).is_ok());
        // HAT over CAT would form HC, which is not
        let err = validate(&board, &rack, &dict(), &place("HAT", 6, 7, Horizontal), None);
        assert_eq!(err.unwrap_err(), Rejection::InvalidWord("HC".into()));
    }

    #[test]
    fn test_rack_supply_with_blank() {
        let board = Board::new();
        let rack = Rack::try_from("AAB*").unwrap();
        // all three letters come from exact tiles, the blank stays unused
        let mv = validate(&board, &rack, &dict(), &place("ABA", 7, 7, Horizontal), None).unwrap();
        assert!(mv.blanks.is_empty());
        // the blank stands in for the missing second B
        let mv = validate(&board, &rack, &dict(), &place("ABAB", 7, 7, Horizontal), None).unwrap();
        assert_eq!(mv.blanks, vec![(7, 10)]);
        // a third A is beyond the rack even with the blank spent
        let err = validate(&board, &rack, &dict(), &place("ABABA", 7, 7, Horizontal), None);
        assert_eq!(err.unwrap_err(), Rejection::InsufficientTiles);
    }

    #[test]
    fn test_greedy_blank_position_scores_zero() {
        let board = Board::new();
        let rack = Rack::try_from("CA*").unwrap();
        // the T is missing, so the blank lands on the last cell
        let mv = validate(&board, &rack, &dict(), &place("CAT", 7, 7, Horizontal), None).unwrap();
        assert_eq!(mv.blanks, vec![(7, 9)]);
        // (3 + 1 + 0) * 2
        assert_eq!(mv.score, 8);
    }

    #[test]
    fn test_forced_blanks() {
        let board = Board::new();
        let rack = Rack::try_from("CAT*").unwrap();
        // force the blank onto the C even though a real C is held
        let mv = validate(
            &board,
            &rack,
            &dict(),
            &place("CAT", 7, 7, Horizontal),
            Some(&[(7, 7)]),
        )
        .unwrap();
        assert_eq!(mv.score, 4);
        // two blanks forced, only one held
        let err = validate(
            &board,
            &rack,
            &dict(),
            &place("CAT", 7, 7, Horizontal),
            Some(&[(7, 7), (7, 8)]),
        );
        assert_eq!(err.unwrap_err(), Rejection::InsufficientTiles);
    }

    #[test]
    fn test_reused_board_letters_need_no_tiles() {
        let mut board = Board::new();
        board.place(b"CAT", 7, 7, Horizontal);
        let rack = Rack::try_from("HT").unwrap();
        // the A of AT is already on the board, only the T is placed
        let mv = validate(&board, &rack, &dict(), &place("AT", 7, 8, Vertical), None).unwrap();
        assert_eq!(mv.placed, vec![(8, 8, b'T')]);
    }
}
