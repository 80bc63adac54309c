//! Start screen implementation
//!
//! Title, tagline and a single "play" button. Activating the button
//! (Enter/Space or a left click) fires the start callback once.

use crate::app::{hit_test, Callback};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Width of the play button in cells
const BUTTON_WIDTH: u16 = 24;

/// Start screen component
pub struct StartScreen {
    on_start: Callback,
    /// Where the play button was last drawn, for mouse hit-testing
    button_area: Rect,
}

impl StartScreen {
    /// Create a start screen that calls `on_start` whenever the player
    /// activates the play button
    pub fn new(on_start: Callback) -> Self {
        Self {
            on_start,
            button_area: Rect::default(),
        }
    }

    /// Fire the start callback
    pub fn activate(&mut self) {
        (self.on_start)();
    }

    /// Handle a left click; returns true if it landed on the play button
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        if hit_test(self.button_area, column, row) {
            self.activate();
            true
        } else {
            false
        }
    }

    pub fn button_area(&self) -> Rect {
        self.button_area
    }

    /// Render the start screen, with the try count of the last solved
    /// board if there is one
    pub fn render(&mut self, f: &mut Frame, last_tries: Option<u32>) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Top padding
                Constraint::Length(3), // Title
                Constraint::Length(2), // Tagline
                Constraint::Length(3), // Play button
                Constraint::Length(2), // Last result
                Constraint::Min(1),    // Bottom padding
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[1], chunks[2]);
        self.render_button(f, chunks[3]);
        self.render_last_result(f, chunks[4], last_tries);
        self.render_help(f, chunks[6]);
    }

    fn render_title(&self, f: &mut Frame, title_area: Rect, tagline_area: Rect) {
        let title = Paragraph::new("M E M O R Y")
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::Gray)),
            );
        f.render_widget(title, title_area);

        let tagline = Paragraph::new("find every pair in as few tries as you can")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(tagline, tagline_area);
    }

    fn render_button(&mut self, f: &mut Frame, area: Rect) {
        let width = BUTTON_WIDTH.min(area.width);
        let button_area = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };
        self.button_area = button_area;

        let button = Paragraph::new("play")
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White)),
            );
        f.render_widget(button, button_area);
    }

    fn render_last_result(&self, f: &mut Frame, area: Rect, last_tries: Option<u32>) {
        let Some(tries) = last_tries else {
            return;
        };

        let result = Paragraph::new(Line::from(vec![
            Span::raw("Last board solved in "),
            Span::styled(
                tries.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(if tries == 1 { " try" } else { " tries" }),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(result, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Play  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn counting_screen() -> (StartScreen, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let hook = Arc::clone(&count);
        let screen = StartScreen::new(Box::new(move || {
            hook.fetch_add(1, Ordering::SeqCst);
        }));
        (screen, count)
    }

    #[test]
    fn test_activate_fires_once_per_call() {
        let (mut screen, count) = counting_screen();
        screen.activate();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        screen.activate();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_click_before_render_misses() {
        let (mut screen, count) = counting_screen();
        assert!(!screen.click(0, 0));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_click_on_button() {
        let (mut screen, count) = counting_screen();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| screen.render(f, Some(4))).unwrap();

        let button = screen.button_area();
        assert!(button.width > 0);
        assert!(screen.click(button.x + 1, button.y + 1));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(!screen.click(0, 0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
