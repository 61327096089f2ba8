use planit_core::{Board, BoardBuilder, ManualClock};
use tempfile::TempDir;

pub const START_MS: i64 = 1_700_000_000_000;

/// Helper function to create an initialized board backed by a database file
pub fn create_test_board() -> (TempDir, ManualClock, Board) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clock = ManualClock::new(START_MS);
    let board = open_board(&temp_dir, &clock);
    (temp_dir, clock, board)
}

/// Opens another board on the database inside `temp_dir`, as a restart would
pub fn open_board(temp_dir: &TempDir, clock: &ManualClock) -> Board {
    let db_path = temp_dir.path().join("data").join("planit.db");
    let mut board = BoardBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(clock.clone())
        .build()
        .expect("Failed to create board");
    board.init();
    board
}
