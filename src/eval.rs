//! Static evaluation.
//!
//! Fixed-point scoring with 700 = one basic piece; positive favors Red,
//! negative favors Black. The score doubles as the move-ordering key in
//! the search, so it must be cheap and fully deterministic.

use crate::board::{Board, Color, Rank};

/// Score of a position where the opponent has been wiped out. Chosen to
/// dominate any material total a 64-cell board can produce.
pub const WIN: i32 = 1_000_000;

// Per-piece terms (700 = 1.0 piece).
const KING_VALUE: i32 = 1050;
const BASIC_VALUE: i32 = 700;
const ADVANCE_STEP: i32 = 50;
const CENTRE_BONUS: i32 = 175;
const EDGE_BONUS: i32 = 7;
const FLANK_BONUS: i32 = 175;

// The four centre squares, as (x, y).
const CENTRE_SLOTS: [(u8, u8); 4] = [(2, 3), (3, 4), (4, 3), (5, 4)];

/// Tunable evaluation terms beyond the fixed material/position scoring.
///
/// `chase_weight` folds the board's average-distance-to-opponent helper
/// into the score for whichever side is ahead on material (the ahead side
/// prefers closing in to trade down). Off by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalParams {
    pub chase_weight: i32,
}

/// Evaluate with the default terms
pub fn evaluate(board: &Board) -> i32 {
    evaluate_with(board, EvalParams::default())
}

/// Static score of a position.
///
/// - `WIN` / `-WIN` when one side has no pieces left.
/// - King: 1050. Basic: 700 plus 50 per row travelled toward the far
///   rank, so a far-advanced basic approaches but never exceeds a king.
/// - Centre squares: +175. Board boundary: +7. Red's rightmost column
///   (and symmetrically Black's leftmost): +175.
///
/// All per-piece terms are summed with Red positive and Black negative.
pub fn evaluate_with(board: &Board, params: EvalParams) -> i32 {
    if !board.has_pieces(Color::Red) {
        return -WIN;
    }
    if !board.has_pieces(Color::Black) {
        return WIN;
    }

    let mut score = 0i32;
    for piece in board.pieces() {
        let mut value = match piece.rank {
            Rank::King => KING_VALUE,
            Rank::Basic => {
                let travelled = match piece.color {
                    Color::Red => 7 - piece.y as i32,
                    Color::Black => piece.y as i32,
                };
                BASIC_VALUE + ADVANCE_STEP * travelled
            }
        };
        if CENTRE_SLOTS.contains(&(piece.x, piece.y)) {
            value += CENTRE_BONUS;
        }
        if piece.x == 0 || piece.x == 7 || piece.y == 0 || piece.y == 7 {
            value += EDGE_BONUS;
        }
        let flank = match piece.color {
            Color::Red => 7,
            Color::Black => 0,
        };
        if piece.x == flank {
            value += FLANK_BONUS;
        }
        score += match piece.color {
            Color::Red => value,
            Color::Black => -value,
        };
    }

    if params.chase_weight != 0 {
        let red = board.count(Color::Red);
        let black = board.count(Color::Black);
        if red > black {
            if let Some(avg) = board.avg_distance_to_opponent(Color::Red) {
                score -= params.chase_weight * avg as i32;
            }
        } else if black > red {
            if let Some(avg) = board.avg_distance_to_opponent(Color::Black) {
                score += params.chase_weight * avg as i32;
            }
        }
    }

    score
}
