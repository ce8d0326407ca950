use crate::tiles::{Tile, TILE_DISTRIBUTION};
use rand::seq::SliceRandom;
use rand::Rng;

/// The bag of tiles not yet drawn.
///
/// Created once per game from [`TILE_DISTRIBUTION`] and shuffled; tiles
/// are drawn from the end and never regenerated mid-game. The order is
/// part of the game state, so an undo can restore the bag exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileBag(Vec<Tile>);

impl TileBag {
    /// Create a full shuffled bag of 100 tiles.
    pub fn new<R: Rng>(rng: &mut R) -> TileBag {
        let mut tiles = Vec::with_capacity(100);
        for &(letter, count) in TILE_DISTRIBUTION.iter() {
            for _ in 0..count {
                tiles.push(Tile::new(letter));
            }
        }
        tiles.shuffle(rng);
        TileBag(tiles)
    }

    /// Number of tiles left in the bag.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Draw up to `count` tiles. Returns fewer when the bag is depleted.
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        let n = count.min(self.0.len());
        self.0.split_off(self.0.len() - n)
    }

    /// Return tiles to the bag and reshuffle, as part of an exchange.
    pub fn put_back<R: Rng>(&mut self, tiles: Vec<Tile>, rng: &mut R) {
        self.0.extend(tiles);
        self.0.shuffle(rng);
    }

    pub(crate) fn tiles(&self) -> &[Tile] {
        &self.0
    }

    pub(crate) fn restore(&mut self, tiles: Vec<Tile>) {
        self.0 = tiles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_bag() {
        let mut rng = StdRng::seed_from_u64(1);
        let bag = TileBag::new(&mut rng);
        assert_eq!(bag.len(), 100);
        let blanks = bag.tiles().iter().filter(|t| t.is_blank()).count();
        assert_eq!(blanks, 2);
    }

    #[test]
    fn test_draw_depleted() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bag = TileBag::new(&mut rng);
        let drawn = bag.draw(98);
        assert_eq!(drawn.len(), 98);
        // only 2 left, drawing 7 is not an error
        let drawn = bag.draw(7);
        assert_eq!(drawn.len(), 2);
        assert!(bag.is_empty());
        assert!(bag.draw(7).is_empty());
    }

    #[test]
    fn test_put_back() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bag = TileBag::new(&mut rng);
        let drawn = bag.draw(7);
        bag.put_back(drawn, &mut rng);
        assert_eq!(bag.len(), 100);
    }
}
