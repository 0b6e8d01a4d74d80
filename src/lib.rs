//! Damista — a checkers engine.
//!
//! Given a starting position and a side to move it plays the game out with
//! depth-limited alpha-beta search over mandatory-capture move generation,
//! keeping the full line of play for output.

pub mod board;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod search;

pub use board::{Board, Color, Piece, Rank};
pub use game::State;
pub use search::{Decision, Search, SearchParams};
