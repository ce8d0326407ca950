//! Game state: players, turn execution, exchange, pass and undo.
use crate::bag::TileBag;
use crate::board::{Board, Cells};
use crate::dictionary::Dictionary;
use crate::rules::{validate, Move, Placement};
use crate::solver::find_best_move;
use crate::tiles::{Rack, Tile, RACK_SIZE};
use crate::Rejection;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A player: name, rack and cumulative score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    rack: Rack,
    score: u32,
}

impl Player {
    fn new(name: &str) -> Player {
        Player {
            name: String::from(name),
            rack: Rack::new(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Everything needed to roll one move back.
#[derive(Debug, Clone)]
struct Snapshot {
    cells: Cells,
    rack: Rack,
    score: u32,
    bag: Vec<Tile>,
    player: usize,
    highlight: Vec<(usize, usize)>,
}

/// The full state of a game: board, bag, players and turn order.
///
/// All state lives in this aggregate; operations take it by reference,
/// there is no process-wide state. Only the committing operations
/// ([`play`](Game::play), [`play_move`](Game::play_move),
/// [`exchange`](Game::exchange)) mutate it; a rejected move leaves it
/// untouched.
#[derive(Debug)]
pub struct Game {
    board: Board,
    bag: TileBag,
    players: Vec<Player>,
    current: usize,
    history: Vec<Snapshot>,
    last_move: Vec<(usize, usize)>,
    rng: StdRng,
}

impl Game {
    /// Start a game: full shuffled bag, 7 tiles dealt to each player.
    pub fn new(names: &[&str]) -> Game {
        Game::with_rng(names, StdRng::from_entropy())
    }

    /// Start a game with a seeded rng, for reproducible draws.
    pub fn with_seed(names: &[&str], seed: u64) -> Game {
        Game::with_rng(names, StdRng::seed_from_u64(seed))
    }

    fn with_rng(names: &[&str], mut rng: StdRng) -> Game {
        let mut bag = TileBag::new(&mut rng);
        let mut players: Vec<Player> = names.iter().map(|name| Player::new(name)).collect();
        for player in &mut players {
            for tile in bag.draw(RACK_SIZE) {
                player.rack.push(tile);
            }
        }
        Game {
            board: Board::new(),
            bag,
            players,
            current: 0,
            history: Vec::new(),
            last_move: Vec::new(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index of the player whose turn it is.
    pub fn turn(&self) -> usize {
        self.current
    }

    /// Number of tiles left in the bag.
    pub fn tiles_left(&self) -> usize {
        self.bag.len()
    }

    /// The cells filled by the most recent move, for highlighting.
    pub fn last_move(&self) -> &[(usize, usize)] {
        &self.last_move
    }

    /// The game ends when the bag is empty and a player has used up
    /// their rack.
    pub fn is_over(&self) -> bool {
        self.bag.is_empty() && self.players.iter().any(|p| p.rack.is_empty())
    }

    /// Play a word for the current player.
    ///
    /// Runs the full legality check; on success the letters are
    /// committed to the board, the used tiles leave the rack (exact
    /// letter first, blank as fallback), the rack is refilled to 7
    /// from the bag (fewer when the bag is depleted), the score is
    /// added, and the turn passes on. On rejection nothing changes.
    pub fn play(&mut self, placement: &Placement, dict: &Dictionary) -> Result<Move, Rejection> {
        let rack = &self.players[self.current].rack;
        let mv = validate(&self.board, rack, dict, placement, None)?;
        Ok(self.commit(mv))
    }

    /// Commit a move found by [`find_best_move`].
    ///
    /// The move is re-validated against the current state (with its
    /// recorded blank assignment) rather than trusted, so a move
    /// computed against stale state is rejected instead of corrupting
    /// the game.
    pub fn play_move(&mut self, mv: &Move, dict: &Dictionary) -> Result<Move, Rejection> {
        let rack = &self.players[self.current].rack;
        let checked = validate(&self.board, rack, dict, &mv.placement(), Some(&mv.blanks))?;
        Ok(self.commit(checked))
    }

    /// Find the best move for the current player. Read-only.
    pub fn best_move(&self, dict: &Dictionary) -> Option<Move> {
        find_best_move(&self.players[self.current].rack, &self.board, dict)
    }

    fn commit(&mut self, mv: Move) -> Move {
        self.history.push(Snapshot {
            cells: self.board.state(),
            rack: self.players[self.current].rack.clone(),
            score: self.players[self.current].score,
            bag: self.bag.tiles().to_vec(),
            player: self.current,
            highlight: self.last_move.clone(),
        });

        self.board
            .place(mv.word.as_bytes(), mv.row, mv.col, mv.dir);
        let player = &mut self.players[self.current];
        for &(r, c, letter) in &mv.placed {
            let tile = if mv.blanks.contains(&(r, c)) {
                player.rack.take_blank()
            } else {
                player.rack.take(letter)
            };
            debug_assert!(tile.is_some(), "validated move consumes held tiles");
        }
        let needed = RACK_SIZE - player.rack.len();
        for tile in self.bag.draw(needed) {
            player.rack.push(tile);
        }
        player.score += mv.score;

        self.last_move = mv.placed.iter().map(|&(r, c, _)| (r, c)).collect();
        self.next_turn();
        mv
    }

    /// Exchange the current player's whole rack for fresh tiles.
    ///
    /// Refused without mutation when fewer than 7 tiles remain in the
    /// bag. Not recorded in the undo history.
    pub fn exchange(&mut self) -> Result<(), Rejection> {
        if self.bag.len() < RACK_SIZE {
            return Err(Rejection::BagDepleted(self.bag.len()));
        }
        let player = &mut self.players[self.current];
        let old_tiles = player.rack.drain();
        self.bag.put_back(old_tiles, &mut self.rng);
        for tile in self.bag.draw(RACK_SIZE) {
            player.rack.push(tile);
        }
        self.last_move.clear();
        self.next_turn();
        Ok(())
    }

    /// Pass the turn.
    pub fn pass(&mut self) {
        self.last_move.clear();
        self.next_turn();
    }

    /// Undo the most recent committed move, restoring board, rack,
    /// score, bag and turn to the exact pre-move snapshot. Returns
    /// false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let snapshot = match self.history.pop() {
            Some(s) => s,
            None => return false,
        };
        self.board.restore(snapshot.cells);
        let player = &mut self.players[snapshot.player];
        player.rack = snapshot.rack;
        player.score = snapshot.score;
        self.bag.restore(snapshot.bag);
        self.current = snapshot.player;
        self.last_move = snapshot.highlight;
        true
    }

    fn next_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Total tiles in bag, racks and board; constant for a game.
    #[cfg(test)]
    fn total_tiles(&self) -> usize {
        let on_board = (0..crate::grid::N)
            .flat_map(|r| (0..crate::grid::N).map(move |c| (r, c)))
            .filter(|&(r, c)| self.board.is_occupied(r, c))
            .count();
        self.bag.len() + self.players.iter().map(|p| p.rack.len()).sum::<usize>() + on_board
    }
}
