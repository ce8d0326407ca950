//! The single scoring function used for both human and bot moves.
use crate::board::FormedWord;
use crate::grid::{Bonus, Grid};
use crate::tiles::letter_value;

/// Bonus for playing all 7 rack tiles in one move.
pub const BINGO_BONUS: u32 = 50;

/// Score a move from the words it forms.
///
/// * `words`: the main word and all cross words, with their cells.
/// * `placed`: the positions filled with new tiles by this move.
/// * `blanks`: the positions (among `placed`) filled with a blank.
///
/// A blank contributes 0 whatever letter it stands for. Letter and word
/// multipliers apply only to newly placed cells; letters already on the
/// board contribute their base value even when their cell carries a
/// bonus tag. Placing exactly 7 tiles adds the 50 point bingo bonus.
pub fn score_move(
    grid: &Grid,
    words: &[FormedWord],
    placed: &[(usize, usize)],
    blanks: &[(usize, usize)],
) -> u32 {
    let mut total = 0;
    for word in words {
        let mut word_points = 0;
        let mut word_multiplier = 1;
        for &(r, c, letter) in &word.cells {
            let mut letter_points = if blanks.contains(&(r, c)) {
                0
            } else {
                letter_value(letter)
            };
            if placed.contains(&(r, c)) {
                match grid.at(r, c) {
                    Bonus::LetterBonus(n) => letter_points *= n,
                    Bonus::WordBonus(n) => word_multiplier *= n,
                    Bonus::Start => word_multiplier *= 2,
                    Bonus::NoBonus => {}
                }
            }
            word_points += letter_points;
        }
        total += word_points * word_multiplier;
    }
    if placed.len() == 7 {
        total += BINGO_BONUS;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formed(cells: &[(usize, usize, u8)]) -> FormedWord {
        FormedWord {
            cells: cells.to_vec(),
        }
    }

    fn horizontal(word: &str, row: usize, col: usize) -> FormedWord {
        formed(
            &word
                .bytes()
                .enumerate()
                .map(|(i, l)| (row, col + i, l))
                .collect::<Vec<_>>(),
        )
    }

    fn positions(word: &FormedWord) -> Vec<(usize, usize)> {
        word.cells.iter().map(|&(r, c, _)| (r, c)).collect()
    }

    #[test]
    fn test_center_word_is_doubled() {
        let grid = Grid::default();
        let word = horizontal("CAT", 7, 7);
        let placed = positions(&word);
        // C=3, A=1, T=1, doubled by the center square
        assert_eq!(score_move(&grid, &[word], &placed, &[]), 10);
    }

    #[test]
    fn test_blank_scores_zero() {
        let grid = Grid::default();
        let word = horizontal("CAT", 7, 7);
        let placed = positions(&word);
        // the C is a blank: (1+1) * 2
        assert_eq!(score_move(&grid, &[word], &placed, &[(7, 7)]), 4);
    }

    #[test]
    fn test_bonus_only_on_new_cells() {
        let grid = Grid::default();
        let word = horizontal("CAT", 7, 6);
        // the A sits on the center square but was already on the board
        let placed = vec![(7, 6), (7, 8)];
        assert_eq!(score_move(&grid, &[word], &placed, &[]), 5);
    }

    #[test]
    fn test_bingo_applies_at_exactly_seven() {
        let grid = Grid::default();
        let word = horizontal("AAAAAAA", 7, 4);
        let placed = positions(&word);
        // center doubles the word: 7 * 2 = 14, plus the bingo bonus
        let score = score_move(&grid, &[word.clone()], &placed, &[]);
        assert_eq!(score, 14 + BINGO_BONUS);

        // six new tiles, one reused: no bingo
        let placed6: Vec<_> = placed[1..].to_vec();
        let score6 = score_move(&grid, &[word], &placed6, &[]);
        assert!(score6 < BINGO_BONUS);
    }

    #[test]
    fn test_cross_words_sum() {
        let grid = Grid::default();
        let main = horizontal("HAT", 8, 7);
        let cross = formed(&[(7, 7, b'C'), (8, 7, b'H')]);
        let placed = positions(&main);
        // HAT = 4 + 2*1 + 1 = 7 with the A on a 2l cell; CH = 3 + 4 = 7
        let score = score_move(&grid, &[main, cross], &placed, &[]);
        assert_eq!(score, 14);
    }
}
