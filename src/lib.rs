//! A Scrabble rules engine and move finder for Rust.
//! <br>
//! This crate implements the full legality and scoring rules of a
//! Scrabble game, and an anchor-based, trie-guided search that finds
//! the highest-scoring move for a rack. Human-entered and bot moves
//! funnel through the same legality checker and scoring function, so
//! they are judged identically. It can use the `rayon` crate to search
//! start cells in parallel.
//!
//! # How to use `scrabble_engine`
//! Load a [`Dictionary`] (one word per line, case-insensitive), start a
//! [`Game`] with the players, and drive turns with
//! [`Game::play`], [`Game::best_move`]/[`Game::play_move`],
//! [`Game::exchange`], [`Game::pass`] and [`Game::undo`]. The board can
//! also be used standalone with [`find_best_move`].
//!
//! # Basic usage
//! ```
//! # use scrabble_engine::{Board, Dictionary, Error, Rack, find_best_move};
//! # use std::convert::TryFrom;
//! let dict = Dictionary::from_words(&["cat"]);
//! let board = Board::new();
//! let rack = Rack::try_from("CATXYZ*")?;
//! let best = find_best_move(&rack, &board, &dict).unwrap();
//! // (3 + 1 + 1) x 2 for covering the center square
//! assert_eq!(best.score, 10);
//! println!("{}", best);
//! # Ok::<(), Error>(())
//! ```
mod bag;
mod board;
mod dictionary;
mod error;
mod game;
mod grid;
mod letterset;
mod rules;
mod score;
mod solver;
mod tiles;

pub use crate::bag::TileBag;
pub use crate::board::{Board, Direction, FormedWord};
pub use crate::dictionary::{Dictionary, Trie};
pub use crate::error::{Error, Rejection};
pub use crate::game::{Game, Player};
pub use crate::grid::{Bonus, Grid, N};
pub use crate::letterset::{Label, LetterSet};
pub use crate::rules::{validate, Move, Placement};
pub use crate::score::{score_move, BINGO_BONUS};
pub use crate::solver::find_best_move;
pub use crate::tiles::{letter_value, Rack, Tile, BLANK, RACK_SIZE, TILE_DISTRIBUTION};
