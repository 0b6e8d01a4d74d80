//! Legal move enumeration with mandatory-capture semantics.
//!
//! For a board and a side to move this produces every reachable next
//! position: single diagonal steps, or complete jump chains when any
//! capture exists anywhere on the board (captures are mandatory, so the
//! jump set displaces the step set entirely).

use crate::board::{Board, Cell, Color, BOARD_SIZE};

/// All next positions for one ply. `jumped` tells which rule produced the
/// set; it is never a mix of the two.
#[derive(Debug, Clone)]
pub struct MoveSet {
    pub boards: Vec<Board>,
    pub jumped: bool,
}

// Diagonal deltas; the first two point up the board (Red's forward), the
// last two point down (Black's forward).
const KING_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];

fn directions(side: Color, is_king: bool) -> &'static [(i8, i8)] {
    if is_king {
        &KING_DIRECTIONS
    } else {
        match side {
            Color::Red => &KING_DIRECTIONS[..2],
            Color::Black => &KING_DIRECTIONS[2..],
        }
    }
}

fn offset(x: u8, y: u8, dx: i8, dy: i8, stride: i8) -> Option<(u8, u8)> {
    let nx = x as i8 + stride * dx;
    let ny = y as i8 + stride * dy;
    let bound = BOARD_SIZE as i8;
    if (0..bound).contains(&nx) && (0..bound).contains(&ny) {
        Some((nx as u8, ny as u8))
    } else {
        None
    }
}

/// A step is legal iff the adjacent diagonal cell is on the board and empty
fn can_step(board: &Board, x: u8, y: u8, dx: i8, dy: i8) -> bool {
    match offset(x, y, dx, dy, 1) {
        Some((nx, ny)) => board.cell(nx, ny) == Cell::Empty,
        None => false,
    }
}

/// A jump is legal iff the adjacent cell holds an opposing piece and the
/// cell two steps away is on the board and empty
fn can_jump(board: &Board, x: u8, y: u8, dx: i8, dy: i8, side: Color) -> bool {
    let Some((lx, ly)) = offset(x, y, dx, dy, 2) else {
        return false;
    };
    // The mid cell is on the board whenever the landing cell is.
    let (mx, my) = ((x as i8 + dx) as u8, (y as i8 + dy) as u8);
    board.cell(mx, my).color() == Some(side.opponent()) && board.cell(lx, ly) == Cell::Empty
}

/// Outcome of one capture within a chain
enum ChainStep {
    /// The capture promoted the mover; the turn ends here regardless of
    /// further captures being available.
    Promoted(Board),
    /// The mover stands on `landing` and may be forced to continue
    Continuing(Board, (u8, u8)),
}

fn jump_step(
    board: &Board,
    from: (u8, u8),
    dir: (i8, i8),
    side: Color,
    is_king: bool,
) -> ChainStep {
    let (next, promoted) = board.apply_move(from, dir, true, side, is_king);
    if promoted {
        ChainStep::Promoted(next)
    } else {
        let landing = (
            (from.0 as i8 + 2 * dir.0) as u8,
            (from.1 as i8 + 2 * dir.1) as u8,
        );
        ChainStep::Continuing(next, landing)
    }
}

/// Depth-first expansion of one jump and everything it forces afterwards.
/// Returns the terminal board of every maximal branch; positions reached
/// mid-chain are never part of the result.
fn jump_chains(
    board: &Board,
    from: (u8, u8),
    dir: (i8, i8),
    side: Color,
    is_king: bool,
) -> Vec<Board> {
    match jump_step(board, from, dir, side, is_king) {
        ChainStep::Promoted(next) => vec![next],
        ChainStep::Continuing(next, landing) => {
            let mut leaves = Vec::new();
            for &(dx, dy) in directions(side, is_king) {
                if can_jump(&next, landing.0, landing.1, dx, dy, side) {
                    leaves.extend(jump_chains(&next, landing, (dx, dy), side, is_king));
                }
            }
            if leaves.is_empty() {
                // No further capture: the chain ends on this board.
                leaves.push(next);
            }
            leaves
        }
    }
}

/// Enumerate every legal next position for `side`.
///
/// Kings probe all four diagonals, basics only their two forward ones.
/// If any jump exists the jump set is the entire legal set for this ply;
/// otherwise the step set is.
pub fn legal_positions(board: &Board, side: Color) -> MoveSet {
    let mut jumps: Vec<Board> = Vec::new();
    let mut steps: Vec<Board> = Vec::new();

    let (kings, basics) = board.pieces_by_color(side);
    for (coords, is_king) in [(&kings, true), (&basics, false)] {
        for &(x, y) in coords {
            for &(dx, dy) in directions(side, is_king) {
                if can_jump(board, x, y, dx, dy, side) {
                    jumps.extend(jump_chains(board, (x, y), (dx, dy), side, is_king));
                } else if jumps.is_empty() && can_step(board, x, y, dx, dy) {
                    // Steps stop being collected once any capture exists;
                    // they could never be returned anyway.
                    let (next, _) = board.apply_move((x, y), (dx, dy), false, side, is_king);
                    steps.push(next);
                }
            }
        }
    }

    if jumps.is_empty() {
        MoveSet {
            boards: steps,
            jumped: false,
        }
    } else {
        MoveSet {
            boards: jumps,
            jumped: true,
        }
    }
}
