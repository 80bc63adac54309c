//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

use ratatui::layout::Rect;

pub mod app;
pub mod screens;
pub mod state;
pub mod timer;
pub mod tui;
pub mod widgets;

pub use app::{App, AppEvent, Shell};
pub use screens::{PlayScreen, StartScreen};
pub use state::{AppState, NavigationAction, StateManager};
pub use timer::{PlayEvent, ResolutionTimer};
pub use tui::{InputEvent, Tui};

/// Zero-argument notification handed from the shell to a screen
pub type Callback = Box<dyn FnMut() + Send>;

/// Whether terminal cell (column, row) lies inside `area`
pub(crate) fn hit_test(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
