//! Board generation
//!
//! Deals a shuffled board of paired tiles from the symbol catalog.

use super::symbol::Symbol;
use super::tile::{Tile, TileState};
use crate::{MemoraError, Result};
use rand::{seq::SliceRandom, Rng};
use std::collections::HashMap;

/// An ordered, fixed-size set of paired tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Deal a board of `tile_count` tiles using the first `tile_count / 2`
    /// catalog symbols, each twice, in a uniformly shuffled order.
    pub fn generate<R: Rng + ?Sized>(tile_count: usize, rng: &mut R) -> Result<Self> {
        if tile_count % 2 != 0 {
            return Err(MemoraError::OddTileCount(tile_count));
        }

        let pair_count = tile_count / 2;
        if pair_count > Symbol::CATALOG.len() {
            return Err(MemoraError::CatalogExhausted {
                requested: pair_count,
                available: Symbol::CATALOG.len(),
            });
        }

        let used = &Symbol::CATALOG[..pair_count];
        let mut contents: Vec<Symbol> = used.iter().chain(used.iter()).copied().collect();
        contents.shuffle(rng);

        Ok(Self {
            tiles: contents.into_iter().map(Tile::new).collect(),
        })
    }

    /// Build a board from an explicit layout. Every symbol must appear
    /// exactly twice.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.len() % 2 != 0 {
            return Err(MemoraError::OddTileCount(symbols.len()));
        }

        let mut counts: HashMap<Symbol, usize> = HashMap::new();
        for symbol in &symbols {
            *counts.entry(*symbol).or_default() += 1;
        }
        if let Some((symbol, count)) = counts.iter().find(|(_, count)| **count != 2) {
            return Err(MemoraError::InvalidLayout(format!(
                "{} appears {} times, expected 2",
                symbol.name(),
                count
            )));
        }

        Ok(Self {
            tiles: symbols.into_iter().map(Tile::new).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Number of pairs dealt on this board
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Indices of tiles currently face-up and awaiting evaluation
    pub fn flipped_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_flipped())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of pairs already resolved as matched
    pub fn matched_pairs(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_matched()).count() / 2
    }

    /// Whether every tile has been matched
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_matched)
    }

    pub(crate) fn set_state(&mut self, index: usize, state: TileState) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.state = state;
        }
    }
}
