//! Flip state machine
//!
//! `MemoryGame` owns the board and the try counter. Every mutation returns
//! an outcome describing what changed so the caller can render it and
//! schedule the delayed resolution of a pair.

use super::board::Board;
use super::tile::{Tile, TileState};
use crate::{MemoraError, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Why a flip request was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No board has been dealt yet
    NoBoard,
    /// Index does not address a tile
    OutOfRange,
    /// Tile is already face-up
    AlreadyFlipped,
    /// Tile was already resolved as part of a pair
    AlreadyMatched,
    /// Two tiles are face-up and waiting for resolution
    PairPending,
}

/// Pending settlement of a flipped pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// First and second flipped tile indices
    pub pair: [usize; 2],
    /// `Matched` on a match, `Start` to turn both tiles back over
    pub outcome: TileState,
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        self.outcome == TileState::Matched
    }
}

/// Result of a flip request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing changed
    Ignored(IgnoreReason),
    /// First tile of a pair turned face-up
    Revealed,
    /// Second tile turned face-up and the pair was evaluated
    Evaluated(Resolution),
}

/// Result of applying a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Every tile on the board is matched
    pub solved: bool,
}

/// Board, try counter and random source for one round
#[derive(Debug)]
pub struct MemoryGame<R = SmallRng> {
    board: Option<Board>,
    tries: u32,
    rng: R,
}

impl MemoryGame<SmallRng> {
    /// Create a game with an entropy-seeded random source
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    /// Create a game with a fixed seed for reproducible boards
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Create a game around a prepared board
    pub fn with_board(board: Board) -> Self {
        Self {
            board: Some(board),
            tries: 0,
            rng: SmallRng::seed_from_u64(0),
        }
    }
}

impl<R: Rng> MemoryGame<R> {
    /// Create a game that deals from the given random source
    pub fn new(rng: R) -> Self {
        Self {
            board: None,
            tries: 0,
            rng,
        }
    }

    /// Return the board, dealing it on first use.
    ///
    /// Once dealt the board never changes size or order, whatever count
    /// later calls pass. Odd counts are rejected before anything else.
    pub fn tiles(&mut self, tile_count: usize) -> Result<&[Tile]> {
        if tile_count % 2 != 0 {
            return Err(MemoraError::OddTileCount(tile_count));
        }

        if self.board.is_none() {
            let board = Board::generate(tile_count, &mut self.rng)?;
            tracing::debug!(tile_count, "dealt new board");
            self.board = Some(board);
        }

        Ok(self.board.as_ref().map(Board::tiles).unwrap_or_default())
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Completed pair evaluations so far
    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn flipped_count(&self) -> usize {
        self.board
            .as_ref()
            .map(|board| board.flipped_indices().len())
            .unwrap_or(0)
    }

    pub fn is_solved(&self) -> bool {
        self.board.as_ref().is_some_and(Board::is_solved)
    }

    /// Turn the tile at `index` face-up.
    ///
    /// The second flip of a pair bumps the try counter and returns the
    /// resolution to apply once the reveal delay has passed; both tiles stay
    /// `Flipped` until then, which blocks any further flip.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        let Some(board) = self.board.as_mut() else {
            return FlipOutcome::Ignored(IgnoreReason::NoBoard);
        };
        let Some(tile) = board.tile(index).copied() else {
            return FlipOutcome::Ignored(IgnoreReason::OutOfRange);
        };

        match tile.state {
            TileState::Flipped => return FlipOutcome::Ignored(IgnoreReason::AlreadyFlipped),
            TileState::Matched => return FlipOutcome::Ignored(IgnoreReason::AlreadyMatched),
            TileState::Start => {}
        }

        let flipped = board.flipped_indices();
        let outcome = match flipped.as_slice() {
            [] => FlipOutcome::Revealed,
            [first] => {
                self.tries += 1;
                let first = *first;
                let same = board.tile(first).map(|t| t.content) == Some(tile.content);
                FlipOutcome::Evaluated(Resolution {
                    pair: [first, index],
                    outcome: if same {
                        TileState::Matched
                    } else {
                        TileState::Start
                    },
                })
            }
            _ => return FlipOutcome::Ignored(IgnoreReason::PairPending),
        };

        board.set_state(index, TileState::Flipped);
        outcome
    }

    /// Settle a previously evaluated pair. Tiles in the pair that are no
    /// longer `Flipped` are left alone, so applying twice is harmless.
    pub fn resolve(&mut self, resolution: &Resolution) -> ResolveOutcome {
        let Some(board) = self.board.as_mut() else {
            return ResolveOutcome { solved: false };
        };

        for index in resolution.pair {
            if board.tile(index).is_some_and(Tile::is_flipped) {
                board.set_state(index, resolution.outcome);
            }
        }

        ResolveOutcome {
            solved: board.is_solved(),
        }
    }
}
