//! Game loop and the state chain used for path reconstruction.

use crate::board::{Board, Color};
use crate::search::{Decision, Search, SearchParams};

/// One accepted ply: a position, whose turn it is, and a link back to the
/// position it was played from. States are never mutated once built; the
/// chain from the final state back to the root is the game record.
#[derive(Debug)]
pub struct State {
    pub board: Board,
    pub parent: Option<Box<State>>,
    pub side_to_move: Color,
}

impl State {
    /// Root state with no history
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            parent: None,
            side_to_move,
        }
    }

    /// Consume this state and wrap the accepted next board into its child,
    /// with the side to move flipped.
    pub fn advance(self, board: Board) -> State {
        let side_to_move = self.side_to_move.opponent();
        State {
            board,
            parent: Some(Box::new(self)),
            side_to_move,
        }
    }

    /// The boards along the parent chain, oldest first
    pub fn line(&self) -> Vec<&Board> {
        let mut boards = Vec::new();
        let mut current = Some(self);
        while let Some(state) = current {
            boards.push(&state.board);
            current = state.parent.as_deref();
        }
        boards.reverse();
        boards
    }
}

impl Drop for State {
    fn drop(&mut self) {
        // Unlink the chain iteratively; a long game would otherwise
        // recurse once per ply when the final state goes away.
        let mut parent = self.parent.take();
        while let Some(mut state) = parent {
            parent = state.parent.take();
        }
    }
}

/// Drive repeated one-ply searches until one side is wiped out or the side
/// to move has no legal move. Returns the final state with its full parent
/// chain.
///
/// Known limitation carried over from the game rules as modelled: two
/// kings shuffling without captures never terminate, since there is no
/// draw detection.
pub fn play(initial: State, params: SearchParams) -> State {
    let mut search = Search::new(params);
    let mut state = initial;
    loop {
        if state.board.is_terminal() {
            return state;
        }
        match search.decide(state) {
            Decision::Play(next) => state = next,
            Decision::Stalemate(stuck) => return stuck,
        }
    }
}

/// Render every board along the line in the snapshot format, each followed
/// by a blank line — the output file layout.
pub fn render_line(state: &State) -> String {
    let mut out = String::new();
    for board in state.line() {
        out.push_str(&board.render());
        out.push('\n');
    }
    out
}
