use damista::board::{Board, Cell, Color, Rank};
use damista::movegen::legal_positions;

#[test]
fn basics_step_to_their_two_forward_diagonals() {
    let board = Board::from_rows(["........", "........", "........", "...r...."]);
    let set = legal_positions(&board, Color::Red);
    assert!(!set.jumped);
    assert_eq!(set.boards.len(), 2, "a free basic has exactly two steps");
    for next in &set.boards {
        // Red moves up the board.
        assert_eq!(next.cell(3, 3), Cell::Empty);
        assert!(
            next.cell(2, 2) != Cell::Empty || next.cell(4, 2) != Cell::Empty,
            "mover must land on a forward diagonal"
        );
    }
}

#[test]
fn kings_step_in_all_four_directions() {
    let board = Board::from_rows(["........", "........", "........", "...R...."]);
    let set = legal_positions(&board, Color::Red);
    assert!(!set.jumped);
    assert_eq!(set.boards.len(), 4);
}

#[test]
fn a_capture_anywhere_displaces_every_step() {
    // Black at (0, 0) has free steps, but the black piece at (3, 4) can
    // capture; the step set must be discarded entirely.
    let board = Board::from_rows([
        "b.......",
        "........",
        "........",
        "........",
        "...b....",
        "....r...",
        "........",
        "........",
    ]);
    let set = legal_positions(&board, Color::Black);
    assert!(set.jumped, "jump set must win over steps");
    assert_eq!(set.boards.len(), 1);
    let next = &set.boards[0];
    assert_eq!(next.count(Color::Red), 0);
    assert_eq!(next.cell(5, 6), Cell::Occupied(Color::Black, Rank::Basic));
}

#[test]
fn basics_never_capture_backwards() {
    // The only capture geometry for this red basic points down the board,
    // which is backwards for Red; only steps may come out.
    let board = Board::from_rows([
        "........",
        "........",
        "..r.....",
        "...b....",
        "........",
    ]);
    let set = legal_positions(&board, Color::Red);
    assert!(!set.jumped);
    let king_board = Board::from_rows([
        "........",
        "........",
        "..R.....",
        "...b....",
        "........",
    ]);
    let set = legal_positions(&king_board, Color::Red);
    assert!(set.jumped, "a king captures in all four directions");
    assert_eq!(set.boards.len(), 1);
    assert_eq!(set.boards[0].count(Color::Black), 0);
    assert_eq!(
        set.boards[0].cell(4, 4),
        Cell::Occupied(Color::Red, Rank::King)
    );
}

#[test]
fn jump_chains_continue_while_captures_exist() {
    // Black jumps (1,0) -> (3,2) over the first red, then is forced on to
    // (1,4) over the second; only the end of the chain is a legal result.
    let board = Board::from_rows([
        ".b......",
        "..r.....",
        "........",
        "..r.....",
        "........",
    ]);
    let set = legal_positions(&board, Color::Black);
    assert!(set.jumped);
    assert_eq!(set.boards.len(), 1, "mid-chain boards must not leak out");
    let next = &set.boards[0];
    assert_eq!(next.count(Color::Red), 0, "both reds captured in one turn");
    assert_eq!(next.cell(1, 4), Cell::Occupied(Color::Black, Rank::Basic));
}

#[test]
fn every_maximal_branch_is_returned() {
    // Two capture directions from the same piece, one leaf each.
    let board = Board::from_rows([
        "...b....",
        "..r.r...",
        "........",
    ]);
    let set = legal_positions(&board, Color::Black);
    assert!(set.jumped);
    assert_eq!(set.boards.len(), 2);
    assert_ne!(set.boards[0], set.boards[1]);
    for next in &set.boards {
        assert_eq!(next.count(Color::Red), 1, "each branch takes one red");
    }
}

#[test]
fn promotion_terminates_the_chain_immediately() {
    // Jumping (2,5) -> (4,7) promotes the black basic; the second red must
    // survive even though a king could capture on from there.
    let board = Board::from_rows([
        "........",
        "........",
        "........",
        "........",
        "........",
        "..b.....",
        "...r.r..",
        "........",
    ]);
    let set = legal_positions(&board, Color::Black);
    assert!(set.jumped);
    assert_eq!(set.boards.len(), 1);
    let next = &set.boards[0];
    assert_eq!(next.cell(4, 7), Cell::Occupied(Color::Black, Rank::King));
    assert_eq!(next.count(Color::Red), 1, "promotion ends the turn");
}

#[test]
fn blocked_side_has_no_moves() {
    // Red basic in the corner with both forward squares unusable.
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
    let set = legal_positions(&board, Color::Red);
    assert!(set.boards.is_empty());
    assert!(!set.jumped);
}
