//! Game model module
//!
//! Contains the symbol catalog, tiles, board generation and the
//! flip state machine that drives a round of memory.

pub mod board;
pub mod state;
pub mod symbol;
pub mod tile;

// Re-export commonly used types
pub use board::Board;
pub use state::{FlipOutcome, IgnoreReason, MemoryGame, Resolution, ResolveOutcome};
pub use symbol::Symbol;
pub use tile::{Tile, TileState};
