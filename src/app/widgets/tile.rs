//! Tile widget
//!
//! Draws one tile from a read-only snapshot. Flip requests never go
//! through the view; the play screen owns all state changes.

use crate::game::{Tile, TileState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Face-down tile pattern
const TILE_BACK: &str = "░░░";

/// Renders a single tile
#[derive(Debug, Clone, Copy)]
pub struct TileView {
    tile: Tile,
    focused: bool,
}

impl TileView {
    pub fn new(tile: Tile) -> Self {
        Self {
            tile,
            focused: false,
        }
    }

    /// Highlight the tile under the keyboard cursor
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn face(&self) -> Span<'static> {
        match self.tile.state {
            TileState::Start => Span::styled(TILE_BACK, Style::default().fg(Color::DarkGray)),
            TileState::Flipped => Span::styled(
                self.tile.content.glyph(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            TileState::Matched => Span::styled(
                self.tile.content.glyph(),
                Style::default().fg(Color::Green),
            ),
        }
    }

    fn border_style(&self) -> Style {
        let color = match self.tile.state {
            TileState::Start => Color::Gray,
            TileState::Flipped => Color::Cyan,
            TileState::Matched => Color::Green,
        };
        let style = Style::default().fg(color);
        if self.focused {
            style.fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Widget for TileView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(self.border_style());

        // Vertically center the face inside the border
        let inner_height = area.height.saturating_sub(2);
        let mut lines = vec![Line::from(""); (inner_height / 2) as usize];
        lines.push(Line::from(self.face()));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
