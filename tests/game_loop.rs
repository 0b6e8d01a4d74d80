use damista::board::{Board, Cell, Color, Rank};
use damista::game::{self, State};
use damista::search::SearchParams;

fn lone_pieces() -> Board {
    Board::from_rows([
        "........",
        "........",
        "........",
        "........",
        "...b....",
        "....r...",
        "........",
        "........",
    ])
}

#[test]
fn play_runs_to_the_terminal_position() {
    let initial = lone_pieces();
    let final_state = game::play(
        State::new(initial, Color::Black),
        SearchParams::new().max_depth(2),
    );
    assert!(final_state.board.is_terminal());
    assert_eq!(final_state.board.count(Color::Red), 0);
    assert_eq!(
        final_state.board.cell(5, 6),
        Cell::Occupied(Color::Black, Rank::Basic)
    );

    let line = final_state.line();
    assert_eq!(line.len(), 2, "one ply was played");
    assert_eq!(*line[0], initial, "the line starts at the oldest state");
    assert_eq!(*line[1], final_state.board);
}

#[test]
fn play_stops_on_stalemate_without_looping() {
    let board = Board::from_rows([
        "........",
        "........",
        "........",
        "........",
        "........",
        "..b.....",
        ".b......",
        "r.......",
    ]);
    let final_state = game::play(
        State::new(board, Color::Red),
        SearchParams::new().max_depth(4),
    );
    assert_eq!(final_state.board, board);
    assert_eq!(final_state.line().len(), 1, "no ply may be produced");
}

#[test]
fn render_line_emits_snapshots_oldest_first_with_blank_separators() {
    let initial = lone_pieces();
    let final_state = game::play(
        State::new(initial, Color::Black),
        SearchParams::new().max_depth(2),
    );
    let out = game::render_line(&final_state);

    let expected_first = initial.render();
    assert!(
        out.starts_with(&expected_first),
        "output must begin with the initial snapshot"
    );
    assert!(out.ends_with("\n\n"), "every snapshot is followed by a blank line");

    let snapshots: Vec<&str> = out.split("\n\n").filter(|s| !s.is_empty()).collect();
    assert_eq!(snapshots.len(), 2);
    let reparsed = Board::from_rows(snapshots[1].lines());
    assert_eq!(reparsed, final_state.board, "snapshots round-trip");
}

#[test]
fn a_won_position_is_returned_as_is() {
    let board = Board::from_rows(["...b...."]);
    assert!(board.is_terminal());
    let final_state = game::play(State::new(board, Color::Red), SearchParams::new());
    assert_eq!(final_state.board, board);
    assert_eq!(final_state.line().len(), 1);
}

#[test]
fn red_to_move_wins_the_mirrored_scenario_too() {
    // Same two lone basics, but Red moves first and must capture upward.
    let final_state = game::play(
        State::new(lone_pieces(), Color::Red),
        SearchParams::new().max_depth(2),
    );
    assert!(final_state.board.is_terminal());
    assert_eq!(final_state.board.count(Color::Black), 0);
    assert_eq!(
        final_state.board.cell(2, 3),
        Cell::Occupied(Color::Red, Rank::Basic)
    );
}
