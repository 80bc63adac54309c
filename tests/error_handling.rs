use memora::error;
use memora::game::{Board, MemoryGame};
use memora::MemoraError;

#[test]
fn test_odd_tile_count_is_a_contract_violation() {
    let mut game = MemoryGame::seeded(0);
    let err = game.tiles(5).unwrap_err();
    assert!(matches!(err, MemoraError::OddTileCount(5)));
    assert!(error::is_contract_violation(&err));
    assert!(game.board().is_none());
}

#[test]
fn test_user_friendly_messages() {
    let msg = error::user_friendly_message(&MemoraError::OddTileCount(7));
    assert!(msg.contains("even"));

    let msg = error::user_friendly_message(&MemoraError::CatalogExhausted {
        requested: 12,
        available: 10,
    });
    assert!(msg.contains("20"));

    let io = MemoraError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert!(!error::is_contract_violation(&io));
    assert!(error::user_friendly_message(&io).contains("boom"));
}

#[test]
fn test_invalid_layout_reports_symbol() {
    use memora::game::Symbol;
    let err = Board::from_symbols(vec![Symbol::Cube, Symbol::Heart]).unwrap_err();
    assert!(err.to_string().contains("Invalid board layout"));
}
