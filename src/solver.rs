//! Anchor-based, trie-guided search for the best move.
use crate::board::{Board, Direction};
use crate::dictionary::{Dictionary, ROOT};
use crate::grid::N;
use crate::letterset::LetterSet;
use crate::rules::{validate, Move, Placement};
use crate::tiles::{Rack, BLANK, RACK_SIZE};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::BTreeSet;
use tinyvec::ArrayVec;

type RackLetters = ArrayVec<[u8; RACK_SIZE]>;
type Prefix = ArrayVec<[u8; N]>;
type BlankCells = ArrayVec<[(usize, usize); RACK_SIZE]>;

/// Find the highest-scoring legal move for `rack` on `board`, or `None`
/// when no legal move exists (a normal outcome: the caller can offer a
/// pass or an exchange).
///
/// Anchors are the empty cells orthogonally adjacent to an occupied
/// cell, or just the center cell on an empty board. From every distinct
/// start cell reachable within 7 squares before an anchor, a
/// depth-first extension follows only existing trie edges, branching
/// over the distinct rack letters and over every child letter for a
/// held blank. Each candidate runs through the same legality checker
/// and scoring as human moves. Ties keep the first move found; any
/// maximal-scoring move is an acceptable result.
///
/// The search is read-only: board, rack and dictionary are never
/// modified. With the `rayon` feature the start cells are searched in
/// parallel.
pub fn find_best_move(rack: &Rack, board: &Board, dict: &Dictionary) -> Option<Move> {
    let search = Search { board, dict, rack };
    let starts = search.start_cells();

    #[cfg(feature = "rayon")]
    {
        starts
            .par_iter()
            .map(|&(row, col, dir)| search.best_from(row, col, dir))
            .reduce(|| None, better)
    }
    #[cfg(not(feature = "rayon"))]
    {
        starts
            .iter()
            .map(|&(row, col, dir)| search.best_from(row, col, dir))
            .fold(None, better)
    }
}

/// Keep the higher-scoring move; the left operand wins ties.
fn better(a: Option<Move>, b: Option<Move>) -> Option<Move> {
    match (&a, &b) {
        (_, None) => a,
        (None, _) => b,
        (Some(x), Some(y)) => {
            if y.score > x.score {
                b
            } else {
                a
            }
        }
    }
}

struct Search<'a> {
    board: &'a Board,
    dict: &'a Dictionary,
    rack: &'a Rack,
}

impl<'a> Search<'a> {
    /// All empty cells orthogonally adjacent to an occupied cell, or
    /// the center cell when the board is empty.
    fn anchors(&self) -> BTreeSet<(usize, usize)> {
        let mut anchors = BTreeSet::new();
        for r in 0..N {
            for c in 0..N {
                if !self.board.is_occupied(r, c) {
                    continue;
                }
                let neighbours = [
                    (r.wrapping_sub(1), c),
                    (r + 1, c),
                    (r, c.wrapping_sub(1)),
                    (r, c + 1),
                ];
                for &(nr, nc) in &neighbours {
                    if nr < N && nc < N && !self.board.is_occupied(nr, nc) {
                        anchors.insert((nr, nc));
                    }
                }
            }
        }
        if anchors.is_empty() {
            anchors.insert((N / 2, N / 2));
        }
        anchors
    }

    /// The distinct start cells: for each anchor and direction, the
    /// word may begin up to 7 cells before the anchor, bounded by the
    /// board edge. Offsets from different anchors often land on the
    /// same cell, so they are collected into a set first.
    fn start_cells(&self) -> Vec<(usize, usize, Direction)> {
        let mut starts = BTreeSet::new();
        for &(row, col) in &self.anchors() {
            for &dir in &[Direction::Horizontal, Direction::Vertical] {
                let (dr, dc) = dir.delta();
                for offset in 0..RACK_SIZE + 1 {
                    let (r, c) = (row.wrapping_sub(offset * dr), col.wrapping_sub(offset * dc));
                    if r < N && c < N {
                        starts.insert((r, c, dir));
                    }
                }
            }
        }
        starts.into_iter().collect()
    }

    fn best_from(&self, row: usize, col: usize, dir: Direction) -> Option<Move> {
        let mut letters: RackLetters = self.rack.tiles().iter().map(|t| t.letter()).collect();
        let mut prefix = Prefix::new();
        let mut blanks = BlankCells::new();
        let mut best = None;
        self.extend(
            row, col, dir, ROOT, false, &mut prefix, &mut letters, &mut blanks, &mut best,
        );
        best
    }

    /// Depth-first extension of `prefix` from the cell after it.
    ///
    /// On an occupied cell only the edge matching the existing letter
    /// is followed; on an empty cell the branch consumes a rack tile.
    /// Whenever the prefix is a complete word and at least one new tile
    /// has been placed, the candidate runs through the full legality
    /// checker, with the blank positions recorded along this branch.
    #[allow(clippy::too_many_arguments)]
    fn extend(
        &self,
        row: usize,
        col: usize,
        dir: Direction,
        node: usize,
        placed_any: bool,
        prefix: &mut Prefix,
        letters: &mut RackLetters,
        blanks: &mut BlankCells,
        best: &mut Option<Move>,
    ) {
        let trie = self.dict.trie();
        if trie.is_terminal(node) && placed_any {
            let placement = Placement::from_letters(prefix, row, col, dir);
            if let Ok(mv) = validate(self.board, self.rack, self.dict, &placement, Some(blanks)) {
                if mv.score > best.as_ref().map_or(0, |b| b.score) {
                    *best = Some(mv);
                }
            }
        }

        let (dr, dc) = dir.delta();
        let i = prefix.len();
        let (r, c) = (row + i * dr, col + i * dc);
        if r >= N || c >= N {
            return;
        }

        if let Some(letter) = self.board.at(r, c) {
            if let Some(child) = trie.child(node, letter - b'A') {
                prefix.push(letter);
                self.extend(row, col, dir, child, placed_any, prefix, letters, blanks, best);
                prefix.pop();
            }
            return;
        }

        // branch over the distinct rack letters with a matching edge
        let children = trie.child_labels(node);
        let mut tried = LetterSet::new();
        for i in 0..letters.len() {
            let letter = letters[i];
            if letter == BLANK {
                continue;
            }
            let label = letter - b'A';
            if tried.contains(label) || !children.contains(label) {
                continue;
            }
            tried.insert(label);
            // child exists since the label is in the children set
            let child = trie.child(node, label).unwrap();
            letters.remove(i);
            prefix.push(letter);
            self.extend(row, col, dir, child, true, prefix, letters, blanks, best);
            prefix.pop();
            letters.insert(i, letter);
        }

        // a blank can stand for any letter that continues a word
        if let Some(i) = letters.iter().position(|&l| l == BLANK) {
            letters.remove(i);
            for label in children.iter() {
                let child = trie.child(node, label).unwrap();
                prefix.push(b'A' + label);
                blanks.push((r, c));
                self.extend(row, col, dir, child, true, prefix, letters, blanks, best);
                blanks.pop();
                prefix.pop();
            }
            letters.insert(i, BLANK);
        }
    }
}
