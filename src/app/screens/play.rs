//! Play screen implementation
//!
//! Owns the game for one board: deals it once, turns clicks and key
//! presses into flips, settles pairs after the reveal delay and reports
//! completion to the shell.

use crate::app::{
    hit_test,
    state::NavigationAction,
    timer::{PlayEvent, ResolutionTimer},
    widgets::TileView,
    Callback,
};
use crate::config::GameConfig;
use crate::game::{FlipOutcome, MemoryGame, Resolution, Tile};
use crate::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// How long the match banner stays up
const CELEBRATION_TIME: Duration = Duration::from_millis(1200);

/// Play screen component
pub struct PlayScreen {
    config: GameConfig,
    game: MemoryGame,
    timer: ResolutionTimer,
    events_tx: mpsc::UnboundedSender<PlayEvent>,
    events_rx: mpsc::UnboundedReceiver<PlayEvent>,
    /// Taken on first use so completion is reported at most once
    on_end: Option<Callback>,
    cursor: usize,
    /// Where each tile was last drawn, for mouse hit-testing
    tile_areas: Vec<Rect>,
    celebration_started: Option<Instant>,
    celebrations: u32,
}

impl PlayScreen {
    /// Deal a new board from `config` and call `on_end` once it is solved
    pub fn new(config: GameConfig, on_end: Callback) -> Result<Self> {
        let game = match config.seed {
            Some(seed) => MemoryGame::seeded(seed),
            None => MemoryGame::from_entropy(),
        };
        Self::with_game(config, game, on_end)
    }

    /// Build the screen around an existing game
    pub fn with_game(config: GameConfig, mut game: MemoryGame, on_end: Callback) -> Result<Self> {
        game.tiles(config.tile_count)?;
        tracing::info!(
            tile_count = config.tile_count,
            seed = ?config.seed,
            "started new board"
        );

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Ok(Self {
            config,
            game,
            timer: ResolutionTimer::new(),
            events_tx,
            events_rx,
            on_end: Some(on_end),
            cursor: 0,
            tile_areas: Vec::new(),
            celebration_started: None,
            celebrations: 0,
        })
    }

    /// Current board snapshot
    pub fn tiles(&mut self) -> Result<&[Tile]> {
        self.game.tiles(self.config.tile_count)
    }

    pub fn tries(&self) -> u32 {
        self.game.tries()
    }

    pub fn is_solved(&self) -> bool {
        self.game.is_solved()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of matches celebrated so far
    pub fn celebrations(&self) -> u32 {
        self.celebrations
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration_started
            .is_some_and(|started| started.elapsed() < CELEBRATION_TIME)
    }

    pub fn has_pending_resolution(&self) -> bool {
        self.timer.is_pending()
    }

    /// Flip the tile at `index`. Must run inside a tokio runtime because
    /// the second flip of a pair schedules its resolution.
    pub fn request_flip(&mut self, index: usize) -> FlipOutcome {
        let outcome = self.game.flip(index);
        match outcome {
            FlipOutcome::Ignored(reason) => {
                tracing::debug!(index, ?reason, "flip ignored");
            }
            FlipOutcome::Revealed => {
                tracing::debug!(index, "tile revealed");
            }
            FlipOutcome::Evaluated(resolution) => {
                tracing::debug!(
                    pair = ?resolution.pair,
                    matched = resolution.is_match(),
                    tries = self.game.tries(),
                    "pair evaluated"
                );
                if resolution.is_match() {
                    self.celebrate(&resolution);
                }
                self.timer.schedule(
                    self.config.resolution_delay,
                    resolution,
                    self.events_tx.clone(),
                );
            }
        }
        outcome
    }

    fn celebrate(&mut self, resolution: &Resolution) {
        self.celebrations += 1;
        self.celebration_started = Some(Instant::now());
        tracing::info!(pair = ?resolution.pair, "found a pair");
    }

    /// Apply every event already queued, without waiting. Events queued
    /// while handling them are left for the next call.
    pub fn poll(&mut self) {
        let pending: Vec<PlayEvent> =
            std::iter::from_fn(|| self.events_rx.try_recv().ok()).collect();
        for event in pending {
            self.handle_event(event);
        }
    }

    /// Wait for the next event and apply it
    pub async fn next_event(&mut self) -> Option<PlayEvent> {
        let event = self.events_rx.recv().await?;
        self.handle_event(event);
        Some(event)
    }

    fn handle_event(&mut self, event: PlayEvent) {
        match event {
            PlayEvent::Resolve(resolution) => {
                let outcome = self.game.resolve(&resolution);
                tracing::debug!(pair = ?resolution.pair, outcome = ?resolution.outcome, "pair resolved");
                if outcome.solved {
                    tracing::info!(tries = self.game.tries(), "board solved");
                    // Report on a later tick, not inside the resolution
                    let _ = self.events_tx.send(PlayEvent::Completed);
                }
            }
            PlayEvent::Completed => {
                if let Some(mut on_end) = self.on_end.take() {
                    on_end();
                }
            }
        }
    }

    /// Handle a keyboard navigation action
    pub fn handle_action(&mut self, action: NavigationAction) {
        let len = self.config.tile_count;
        let columns = self.config.columns.max(1);
        match action {
            NavigationAction::Left if self.cursor % columns > 0 => self.cursor -= 1,
            NavigationAction::Right if self.cursor % columns + 1 < columns && self.cursor + 1 < len => {
                self.cursor += 1
            }
            NavigationAction::Up if self.cursor >= columns => self.cursor -= columns,
            NavigationAction::Down if self.cursor + columns < len => self.cursor += columns,
            NavigationAction::Select => {
                self.request_flip(self.cursor);
            }
            _ => {}
        }
    }

    /// Handle a left click; flips the tile under it, if any
    pub fn click(&mut self, column: u16, row: u16) -> Option<FlipOutcome> {
        let index = self
            .tile_areas
            .iter()
            .position(|area| hit_test(*area, column, row))?;
        self.cursor = index;
        Some(self.request_flip(index))
    }

    /// Render the play screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header with try counter
                Constraint::Min(6),    // Tile grid
                Constraint::Length(1), // Celebration banner
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_header(f, chunks[0]);
        self.render_grid(f, chunks[1]);
        self.render_banner(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let pairs = self.game.board().map(|b| b.pair_count()).unwrap_or(0);
        let matched = self.game.board().map(|b| b.matched_pairs()).unwrap_or(0);

        let header = Paragraph::new(Line::from(vec![
            Span::raw("Tries: "),
            Span::styled(
                self.game.tries().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("    Pairs: {}/{}", matched, pairs)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Memory")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(header, area);
    }

    fn render_grid(&mut self, f: &mut Frame, area: Rect) {
        let tiles = match self.tiles() {
            Ok(tiles) => tiles.to_vec(),
            Err(_) => return,
        };
        let columns = self.config.columns.max(1);
        let rows = tiles.len().div_ceil(columns);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(area);

        self.tile_areas.clear();
        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);

            for (column, cell) in cells.iter().enumerate() {
                let index = row * columns + column;
                let Some(tile) = tiles.get(index) else {
                    break;
                };
                self.tile_areas.push(*cell);
                f.render_widget(
                    TileView::new(*tile).focused(index == self.cursor),
                    *cell,
                );
            }
        }
    }

    fn render_banner(&self, f: &mut Frame, area: Rect) {
        if !self.is_celebrating() {
            return;
        }
        let banner = Paragraph::new("✦ ✧ ✦  Match!  ✦ ✧ ✦")
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(banner, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = |label: &'static str| {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let help_text = vec![Line::from(vec![
            key("↑↓←→"),
            Span::raw(" Move  "),
            key("Enter"),
            Span::raw(" Flip  "),
            key("Esc"),
            Span::raw(" Give up  "),
            key("Q"),
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
    use crate::game::{Board, Symbol, TileState};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn screen(symbols: Vec<Symbol>, columns: usize) -> (PlayScreen, Arc<AtomicUsize>) {
        let config = GameConfig::new()
            .with_tile_count(symbols.len())
            .with_columns(columns);
        let game = MemoryGame::with_board(Board::from_symbols(symbols).unwrap());
        let ended = Arc::new(AtomicUsize::new(0));
        let hook = Arc::clone(&ended);
        let screen = PlayScreen::with_game(
            config,
            game,
            Box::new(move || {
                hook.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();
        (screen, ended)
    }

    fn four_tiles() -> Vec<Symbol> {
        vec![Symbol::Heart, Symbol::Cube, Symbol::Heart, Symbol::Cube]
    }

    #[test]
    fn test_new_deals_configured_board() {
        let config = GameConfig::new().with_tile_count(8).with_seed(3);
        let mut screen = PlayScreen::new(config, Box::new(|| {})).unwrap();
        let first = screen.tiles().unwrap().to_vec();
        assert_eq!(first.len(), 8);
        assert_eq!(screen.tiles().unwrap(), first.as_slice());
    }

    #[test]
    fn test_cursor_navigation() {
        let (mut screen, _) = screen(four_tiles(), 2);
        screen.handle_action(NavigationAction::Right);
        assert_eq!(screen.cursor(), 1);
        screen.handle_action(NavigationAction::Right);
        assert_eq!(screen.cursor(), 1);
        screen.handle_action(NavigationAction::Down);
        assert_eq!(screen.cursor(), 3);
        screen.handle_action(NavigationAction::Down);
        assert_eq!(screen.cursor(), 3);
        screen.handle_action(NavigationAction::Left);
        assert_eq!(screen.cursor(), 2);
        screen.handle_action(NavigationAction::Up);
        assert_eq!(screen.cursor(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mismatch_flips_back_after_delay() {
        let (mut screen, _) = screen(four_tiles(), 2);
        let started = tokio::time::Instant::now();

        screen.request_flip(0);
        screen.request_flip(1);
        assert_eq!(screen.tries(), 1);
        assert_eq!(screen.celebrations(), 0);
        assert!(screen.has_pending_resolution());
        assert_eq!(screen.tiles().unwrap()[1].state, TileState::Flipped);

        let event = screen.next_event().await;
        assert!(matches!(event, Some(PlayEvent::Resolve(_))));
        assert!(started.elapsed() >= Duration::from_secs(1));
        assert!(screen
            .tiles()
            .unwrap()
            .iter()
            .all(|t| t.state == TileState::Start));
    }

    #[tokio::test(start_paused = true)]
    async fn test_match_celebrates_before_delay() {
        let (mut screen, ended) = screen(four_tiles(), 2);

        screen.request_flip(0);
        screen.request_flip(2);
        assert_eq!(screen.tries(), 1);
        assert_eq!(screen.celebrations(), 1);
        assert!(screen.is_celebrating());
        assert_eq!(screen.tiles().unwrap()[0].state, TileState::Flipped);

        screen.next_event().await;
        assert_eq!(screen.tiles().unwrap()[0].state, TileState::Matched);
        assert_eq!(screen.tiles().unwrap()[2].state, TileState::Matched);
        assert_eq!(ended.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_pair_blocks_third_flip() {
        let (mut screen, _) = screen(four_tiles(), 2);
        screen.request_flip(0);
        screen.request_flip(1);
        assert!(matches!(screen.request_flip(2), FlipOutcome::Ignored(_)));
        assert_eq!(screen.tiles().unwrap()[2].state, TileState::Start);
        assert_eq!(screen.tries(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_fires_once_on_later_tick() {
        let (mut screen, ended) = screen(vec![Symbol::Book, Symbol::Book], 2);

        screen.request_flip(0);
        screen.request_flip(1);

        // Resolution settles the board but does not report completion itself
        assert!(matches!(screen.next_event().await, Some(PlayEvent::Resolve(_))));
        assert!(screen.is_solved());
        assert_eq!(ended.load(Ordering::SeqCst), 0);

        assert_eq!(screen.next_event().await, Some(PlayEvent::Completed));
        assert_eq!(ended.load(Ordering::SeqCst), 1);

        screen.poll();
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_defers_completion() {
        let (mut screen, ended) = screen(vec![Symbol::Book, Symbol::Book], 2);
        screen.request_flip(0);
        screen.request_flip(1);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        screen.poll();
        assert!(screen.is_solved());
        assert_eq!(ended.load(Ordering::SeqCst), 0);

        screen.poll();
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_flips_rendered_tile() {
        let (mut screen, _) = screen(four_tiles(), 2);
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();

        let area = screen.tile_areas[3];
        let outcome = screen.click(area.x + 1, area.y + 1);
        assert_eq!(outcome, Some(FlipOutcome::Revealed));
        assert_eq!(screen.cursor(), 3);
        assert_eq!(screen.tiles().unwrap()[3].state, TileState::Flipped);

        assert_eq!(screen.click(0, 0), None);
    }
}
