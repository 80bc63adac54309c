//! End-to-end game flow through the shell, with the tokio clock paused so
//! reveal delays elapse instantly

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use memora::app::{AppState, InputEvent, Shell};
use memora::config::GameConfig;
use memora::game::{FlipOutcome, Symbol, TileState};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::sleep;

const DELAY: Duration = Duration::from_millis(1000);

fn started_shell(tile_count: usize, seed: u64) -> Shell {
    let config = GameConfig::new()
        .with_tile_count(tile_count)
        .with_columns(2)
        .with_seed(seed)
        .with_resolution_delay(DELAY);
    let mut shell = Shell::new(config);
    shell.handle_input(InputEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    shell.process_events().unwrap();
    assert_eq!(*shell.state(), AppState::Play);
    shell
}

/// Index pairs sharing a symbol on the dealt board
fn pairs(shell: &mut Shell) -> Vec<[usize; 2]> {
    let tiles = shell.play_screen().unwrap().tiles().unwrap().to_vec();
    let mut seen: HashMap<Symbol, usize> = HashMap::new();
    let mut pairs = Vec::new();
    for (index, tile) in tiles.iter().enumerate() {
        match seen.remove(&tile.content) {
            Some(first) => pairs.push([first, index]),
            None => {
                seen.insert(tile.content, index);
            }
        }
    }
    pairs
}

#[tokio::test(start_paused = true)]
async fn test_solving_board_returns_to_start() {
    let mut shell = started_shell(6, 21);
    let pairs = pairs(&mut shell);
    assert_eq!(pairs.len(), 3);

    for [a, b] in &pairs {
        let play = shell.play_screen().unwrap();
        assert_eq!(play.request_flip(*a), FlipOutcome::Revealed);
        assert!(matches!(play.request_flip(*b), FlipOutcome::Evaluated(r) if r.is_match()));

        sleep(DELAY + Duration::from_millis(10)).await;
        shell.process_events().unwrap();
    }

    // Completion is reported on the tick after the last resolution
    assert_eq!(*shell.state(), AppState::Play);
    shell.process_events().unwrap();
    assert_eq!(*shell.state(), AppState::Start);
    assert_eq!(shell.last_tries(), Some(3));
}

#[tokio::test(start_paused = true)]
async fn test_mismatch_counts_a_try_and_flips_back() {
    let mut shell = started_shell(4, 8);
    let pairs = pairs(&mut shell);
    let (a, b) = (pairs[0][0], pairs[1][0]);

    let play = shell.play_screen().unwrap();
    play.request_flip(a);
    assert!(matches!(play.request_flip(b), FlipOutcome::Evaluated(r) if !r.is_match()));
    assert_eq!(play.tries(), 1);
    assert_eq!(play.celebrations(), 0);

    sleep(DELAY / 2).await;
    shell.process_events().unwrap();
    let play = shell.play_screen().unwrap();
    assert_eq!(play.tiles().unwrap()[a].state, TileState::Flipped);

    sleep(DELAY).await;
    shell.process_events().unwrap();
    let play = shell.play_screen().unwrap();
    assert_eq!(play.tiles().unwrap()[a].state, TileState::Start);
    assert_eq!(play.tiles().unwrap()[b].state, TileState::Start);
    assert_eq!(play.tries(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_abandon_mid_delay_cancels_resolution() {
    let mut shell = started_shell(4, 3);
    let pairs = pairs(&mut shell);

    let play = shell.play_screen().unwrap();
    play.request_flip(pairs[0][0]);
    play.request_flip(pairs[0][1]);
    assert!(play.has_pending_resolution());

    shell.handle_input(InputEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    assert_eq!(*shell.state(), AppState::Start);

    sleep(DELAY * 2).await;
    shell.process_events().unwrap();
    assert_eq!(*shell.state(), AppState::Start);
    assert_eq!(shell.last_tries(), None);
}

#[tokio::test(start_paused = true)]
async fn test_keyboard_flip_via_cursor() {
    let mut shell = started_shell(4, 5);
    let enter = InputEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let right = InputEvent::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));

    shell.handle_input(enter);
    shell.handle_input(right);
    shell.handle_input(enter);

    let play = shell.play_screen().unwrap();
    assert_eq!(play.tries(), 1);
    assert_eq!(play.tiles().unwrap()[0].state, TileState::Flipped);
    assert_eq!(play.tiles().unwrap()[1].state, TileState::Flipped);
}
