//! Tiles, letter values and the player rack.
use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

/// The letter code for a blank (wildcard) tile.
pub const BLANK: u8 = b'*';

/// Maximum number of tiles on a rack.
pub const RACK_SIZE: usize = 7;

/// Point value per letter `A..=Z`. A blank is always worth 0.
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Standard English tile distribution: 98 letter tiles plus 2 blanks.
pub const TILE_DISTRIBUTION: [(u8, usize); 27] = [
    (b'A', 9),
    (b'B', 2),
    (b'C', 2),
    (b'D', 4),
    (b'E', 12),
    (b'F', 2),
    (b'G', 3),
    (b'H', 2),
    (b'I', 9),
    (b'J', 1),
    (b'K', 1),
    (b'L', 4),
    (b'M', 2),
    (b'N', 6),
    (b'O', 8),
    (b'P', 2),
    (b'Q', 1),
    (b'R', 6),
    (b'S', 4),
    (b'T', 6),
    (b'U', 4),
    (b'V', 2),
    (b'W', 2),
    (b'X', 1),
    (b'Y', 2),
    (b'Z', 1),
    (BLANK, 2),
];

/// Point value of `letter`, 0 for a blank.
pub fn letter_value(letter: u8) -> u32 {
    if letter == BLANK {
        0
    } else {
        LETTER_VALUES[(letter - b'A') as usize]
    }
}

/// Parse a single character as a tile letter code.
pub(crate) fn parse_letter(c: char) -> Result<u8, Error> {
    let up = c.to_ascii_uppercase();
    match up {
        'A'..='Z' => Ok(up as u8),
        '*' => Ok(BLANK),
        _ => Err(Error::InvalidCharacter(c)),
    }
}

/// A single tile: a letter `A..=Z` or a blank, with its point value.
///
/// The value of a blank is 0, also when it has been assigned a letter
/// on the board.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    letter: u8,
    value: u32,
}

impl Tile {
    /// Create a tile for `letter` with its fixed value.
    pub fn new(letter: u8) -> Tile {
        Tile {
            letter,
            value: letter_value(letter),
        }
    }

    pub fn letter(&self) -> u8 {
        self.letter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_blank(&self) -> bool {
        self.letter == BLANK
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(self.letter))
    }
}

/// A rack of at most 7 tiles owned by one player.
///
/// Mutated only when a move is committed, or by a tile exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rack(ArrayVec<[Tile; RACK_SIZE]>);

impl Rack {
    pub fn new() -> Rack {
        Rack(ArrayVec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a drawn tile. The refill path never draws past 7 tiles.
    pub(crate) fn push(&mut self, tile: Tile) {
        self.0.push(tile);
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    /// Remove and return a tile with exactly `letter`.
    pub fn take(&mut self, letter: u8) -> Option<Tile> {
        let i = self.0.iter().position(|t| t.letter() == letter)?;
        Some(self.0.remove(i))
    }

    /// Remove and return a blank tile.
    pub fn take_blank(&mut self) -> Option<Tile> {
        self.take(BLANK)
    }

    /// Remove all tiles, e.g. to return them to the bag on exchange.
    pub fn drain(&mut self) -> Vec<Tile> {
        let tiles = self.0.to_vec();
        self.0.clear();
        tiles
    }

    /// Per-letter counts and the number of blanks held.
    pub(crate) fn counts(&self) -> ([u8; 26], u8) {
        let mut counts = [0u8; 26];
        let mut blanks = 0;
        for tile in self.tiles() {
            if tile.is_blank() {
                blanks += 1;
            } else {
                counts[(tile.letter() - b'A') as usize] += 1;
            }
        }
        (counts, blanks)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tile in self.tiles() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Rack {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Error> {
        let count = s.chars().count();
        if count > RACK_SIZE {
            return Err(Error::RackOverflow(count));
        }
        let mut rack = Rack::new();
        for c in s.chars() {
            rack.push(Tile::new(parse_letter(c)?));
        }
        Ok(rack)
    }
}
