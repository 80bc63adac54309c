//! Main application controller
//!
//! Manages the TUI, screen switching, and the render loop.

use crate::{
    app::{
        screens::{PlayScreen, StartScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::{InputEvent, Tui},
    },
    config::GameConfig,
    MemoraError, Result,
};
use tokio::sync::mpsc;

/// Signals raised by screens for the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The player pressed play
    StartRequested,
    /// The current board is fully matched
    BoardSolved,
}

/// Screen switching and input routing, independent of the terminal
pub struct Shell {
    state_manager: StateManager,
    config: GameConfig,
    start_screen: StartScreen,
    /// Present only while a board is being played
    play_screen: Option<PlayScreen>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    last_tries: Option<u32>,
}

impl Shell {
    pub fn new(config: GameConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let start_tx = events_tx.clone();
        let start_screen = StartScreen::new(Box::new(move || {
            let _ = start_tx.send(AppEvent::StartRequested);
        }));

        Self {
            state_manager: StateManager::new(),
            config,
            start_screen,
            play_screen: None,
            events_tx,
            events_rx,
            last_tries: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn play_screen(&mut self) -> Option<&mut PlayScreen> {
        self.play_screen.as_mut()
    }

    /// Tries taken on the most recently solved board
    pub fn last_tries(&self) -> Option<u32> {
        self.last_tries
    }

    /// Route one input event to the active screen
    pub fn handle_input(&mut self, input: InputEvent) {
        match input {
            InputEvent::Key(key) => {
                let action = StateManager::key_to_navigation(key);
                if action == NavigationAction::Quit {
                    self.state_manager.quit();
                    return;
                }
                self.handle_action(action);
            }
            InputEvent::Click { column, row } => match self.state_manager.current_state().clone() {
                AppState::Start => {
                    self.start_screen.click(column, row);
                }
                AppState::Play => {
                    if let Some(play) = self.play_screen.as_mut() {
                        play.click(column, row);
                    }
                }
                AppState::Exit => {}
            },
        }
    }

    fn handle_action(&mut self, action: NavigationAction) {
        match self.state_manager.current_state().clone() {
            AppState::Start => match action {
                NavigationAction::Select => self.start_screen.activate(),
                NavigationAction::Back => self.state_manager.quit(),
                _ => {}
            },
            AppState::Play => match action {
                NavigationAction::Back => self.abandon_game(),
                _ => {
                    if let Some(play) = self.play_screen.as_mut() {
                        play.handle_action(action);
                    }
                }
            },
            AppState::Exit => {}
        }
    }

    /// Apply timer results and screen signals that arrived since the last call
    pub fn process_events(&mut self) -> Result<()> {
        if let Some(play) = self.play_screen.as_mut() {
            play.poll();
        }

        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::StartRequested => self.start_game()?,
                AppEvent::BoardSolved => self.finish_game(),
            }
        }
        Ok(())
    }

    fn start_game(&mut self) -> Result<()> {
        if self.play_screen.is_some() {
            return Ok(());
        }

        let solved_tx = self.events_tx.clone();
        let play = PlayScreen::new(
            self.config.clone(),
            Box::new(move || {
                let _ = solved_tx.send(AppEvent::BoardSolved);
            }),
        )?;
        self.play_screen = Some(play);
        self.state_manager.transition_to(AppState::Play);
        Ok(())
    }

    fn finish_game(&mut self) {
        if let Some(play) = self.play_screen.take() {
            self.last_tries = Some(play.tries());
        }
        self.state_manager.transition_to(AppState::Start);
    }

    fn abandon_game(&mut self) {
        // Dropping the screen cancels any pending resolution
        if let Some(play) = self.play_screen.take() {
            tracing::info!(tries = play.tries(), "board abandoned");
        }
        self.state_manager.transition_to(AppState::Start);
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut ratatui::Frame) {
        match self.state_manager.current_state().clone() {
            AppState::Start => self.start_screen.render(f, self.last_tries),
            AppState::Play => {
                if let Some(play) = self.play_screen.as_mut() {
                    play.render(f);
                }
            }
            AppState::Exit => {}
        }
    }
}

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Screens and state
    shell: Shell,
}

impl App {
    /// Create a new application instance
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let tui = Tui::new(config.tick_rate)
            .map_err(|e| MemoraError::TuiError(format!("Failed to open terminal: {}", e)))?;
        Ok(Self {
            tui,
            shell: Shell::new(config),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| MemoraError::TuiError(format!("Failed to initialize terminal: {}", e)))
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.shell.should_quit() {
            self.shell.process_events()?;
            let shell = &mut self.shell;
            self.tui.draw(|f| shell.render(f))?;
            if let Some(input) = self.tui.handle_events()? {
                self.shell.handle_input(input);
            }
            // Give spawned resolution timers a chance on single-threaded runtimes
            tokio::task::yield_now().await;
        }
        self.tui.restore()?;
        Ok(())
    }
}
