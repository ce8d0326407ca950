use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned during setup or parsing.
///
/// These are distinct from [`Rejection`]: an `Error` means the game
/// cannot be constructed or an input cannot be parsed at all, while a
/// `Rejection` is the normal answer to an illegal move.
pub enum Error {
    /// Error reading the word list file
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// A word or rack contains a character outside `A..=Z` / blank
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    /// A placement needs a non-empty word
    #[error("empty word")]
    EmptyWord,

    /// A rack holds at most 7 tiles
    #[error("a rack holds at most 7 tiles, got {0}")]
    RackOverflow(usize),

    /// Error parsing a bonus grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a grid row needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing a bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Typed rejection of a candidate move.
///
/// All variants are non-fatal and leave the game state untouched.
pub enum Rejection {
    /// The placement extends past the board edges
    #[error("placing {len} tiles at ({row},{col}) runs off the board")]
    OutOfBounds { row: usize, col: usize, len: usize },

    /// A covered cell already holds a different letter
    #[error("cell ({row},{col}) already holds a different letter")]
    ConflictingLetter { row: usize, col: usize },

    /// The rack (including blanks) cannot supply the needed letters
    #[error("the rack cannot supply the needed tiles")]
    InsufficientTiles,

    /// A non-first move does not touch any existing tile
    #[error("the word does not connect to any tile on the board")]
    NotConnected,

    /// The first move of the game must cover the center cell
    #[error("the first word must cover the center square")]
    MustCoverCenter,

    /// The main word or a cross word is not in the dictionary
    #[error("'{0}' is not in the dictionary")]
    InvalidWord(String),

    /// Exchanging tiles needs at least 7 tiles left in the bag
    #[error("only {0} tiles left in the bag, exchange needs 7")]
    BagDepleted(usize),
}
