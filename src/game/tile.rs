//! Tile model

use super::symbol::Symbol;

/// Visibility state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    /// Face-down, not yet tried
    #[default]
    Start,
    /// Face-up, waiting for its pair to be evaluated
    Flipped,
    /// Face-up, permanently resolved
    Matched,
}

impl TileState {
    /// Whether the tile's symbol is visible
    pub fn is_face_up(&self) -> bool {
        !matches!(self, TileState::Start)
    }
}

/// One cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub content: Symbol,
    pub state: TileState,
}

impl Tile {
    /// Create a face-down tile
    pub fn new(content: Symbol) -> Self {
        Self {
            content,
            state: TileState::Start,
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.state == TileState::Flipped
    }

    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }
}
