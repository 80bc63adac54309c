//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod play;
pub mod start;

pub use play::PlayScreen;
pub use start::StartScreen;
