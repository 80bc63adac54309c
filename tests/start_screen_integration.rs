//! Integration tests for the start screen and screen switching

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use memora::app::{AppState, InputEvent, Shell, StartScreen, StateManager};
use memora::config::GameConfig;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

#[test]
fn test_start_screen_activation() {
    let count = Arc::new(AtomicUsize::new(0));
    let hook = Arc::clone(&count);
    let mut start_screen = StartScreen::new(Box::new(move || {
        hook.fetch_add(1, Ordering::SeqCst);
    }));

    for expected in 1..=3 {
        start_screen.activate();
        assert_eq!(count.load(Ordering::SeqCst), expected);
    }
}

#[test]
fn test_state_manager_integration() {
    let mut state_manager = StateManager::new();
    assert_eq!(*state_manager.current_state(), AppState::Start);

    state_manager.transition_to(AppState::Play);
    assert_eq!(*state_manager.current_state(), AppState::Play);

    state_manager.go_back();
    assert_eq!(*state_manager.current_state(), AppState::Start);
}

#[test]
fn test_click_play_button_starts_board() {
    let mut shell = Shell::new(GameConfig::default().with_seed(11));
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| shell.render(f)).unwrap();

    // Find the rendered "play" label and click it
    let buffer = terminal.backend().buffer().clone();
    let (column, row) = (0..buffer.area.height)
        .flat_map(|y| (0..buffer.area.width.saturating_sub(3)).map(move |x| (x, y)))
        .find(|&(x, y)| {
            buffer.get(x, y).symbol() == "p"
                && buffer.get(x + 1, y).symbol() == "l"
                && buffer.get(x + 2, y).symbol() == "a"
                && buffer.get(x + 3, y).symbol() == "y"
        })
        .expect("play button rendered");

    shell.handle_input(InputEvent::Click { column, row });
    shell.process_events().unwrap();
    assert_eq!(*shell.state(), AppState::Play);

    terminal.draw(|f| shell.render(f)).unwrap();
}

#[test]
fn test_space_also_starts() {
    let mut shell = Shell::new(GameConfig::default());
    shell.handle_input(InputEvent::Key(KeyEvent::new(
        KeyCode::Char(' '),
        KeyModifiers::NONE,
    )));
    shell.process_events().unwrap();
    assert_eq!(*shell.state(), AppState::Play);
}
