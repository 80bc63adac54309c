//! Reusable widgets

pub mod tile;

pub use tile::TileView;
