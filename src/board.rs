// Coordinate mapping: x is the column (0 = leftmost), y is the row (0 = top).
// Red moves up the board (toward y = 0), Black moves down (toward y = 7).

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// The promotion row for this side (0 for Red, 7 for Black)
    pub fn far_rank(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Basic,
    King,
}

/// A single checker. Plain value type; a board owns its pieces outright and
/// simulated moves always work on a copied board, never a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
    pub x: u8,
    pub y: u8,
}

impl Piece {
    pub fn new(color: Color, rank: Rank, x: u8, y: u8) -> Self {
        Self { color, rank, x, y }
    }
}

/// Contents of one grid square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Color, Rank),
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color, _) => Some(color),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Color::Red, Rank::Basic) => 'r',
            Cell::Occupied(Color::Red, Rank::King) => 'R',
            Cell::Occupied(Color::Black, Rank::Basic) => 'b',
            Cell::Occupied(Color::Black, Rank::King) => 'B',
        }
    }

    /// Inverse of `as_char`. Unknown characters map to `None`; snapshot
    /// parsing drops them without complaint.
    pub fn from_char(ch: char) -> Option<(Color, Rank)> {
        match ch {
            'r' => Some((Color::Red, Rank::Basic)),
            'R' => Some((Color::Red, Rank::King)),
            'b' => Some((Color::Black, Rank::Basic)),
            'B' => Some((Color::Black, Rank::King)),
            _ => None,
        }
    }
}

pub const BOARD_SIZE: usize = 8;

// Upper bound on pieces a (possibly degenerate) snapshot can place.
const MAX_PIECES: usize = BOARD_SIZE * BOARD_SIZE;

/// Fixed-capacity piece storage so that copying a board for a trial move is
/// a flat memcpy with no heap traffic. Only `items[..len]` is meaningful.
#[derive(Debug, Clone, Copy)]
struct PieceList {
    items: [Piece; MAX_PIECES],
    len: u8,
}

impl PieceList {
    fn new() -> Self {
        Self {
            items: [Piece::new(Color::Red, Rank::Basic, 0, 0); MAX_PIECES],
            len: 0,
        }
    }

    fn push(&mut self, piece: Piece) {
        debug_assert!((self.len as usize) < MAX_PIECES);
        self.items[self.len as usize] = piece;
        self.len += 1;
    }

    fn as_slice(&self) -> &[Piece] {
        &self.items[..self.len as usize]
    }

    fn as_mut_slice(&mut self) -> &mut [Piece] {
        &mut self.items[..self.len as usize]
    }

    /// Removes the piece at `idx`, preserving the order of the rest so that
    /// iteration stays deterministic.
    fn remove(&mut self, idx: usize) {
        debug_assert!(idx < self.len as usize);
        self.items.copy_within(idx + 1..self.len as usize, idx);
        self.len -= 1;
    }
}

/// An 8x8 checkers position: a piece list plus the grid derived from it.
///
/// Invariant: the grid is always exactly the piece list projected onto
/// coordinates. Every mutation rebuilds the grid before the board is
/// returned to a caller.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    pieces: PieceList,
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        // Same position means same grid; piece list order is irrelevant.
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Board {
    /// Build a board from a piece list. Pieces outside the 8x8 range are a
    /// caller contract violation.
    pub fn new(pieces: impl IntoIterator<Item = Piece>) -> Self {
        let mut list = PieceList::new();
        for piece in pieces {
            list.push(piece);
        }
        let mut board = Self {
            pieces: list,
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        };
        board.rebuild_grid();
        board
    }

    /// Build a board from already-split snapshot rows (`r`/`R`/`b`/`B`/`.`).
    /// Malformed characters create no piece; rows and columns past the
    /// eighth are ignored.
    pub fn from_rows<S: AsRef<str>>(rows: impl IntoIterator<Item = S>) -> Self {
        let mut pieces = Vec::new();
        for (y, row) in rows.into_iter().take(BOARD_SIZE).enumerate() {
            for (x, ch) in row.as_ref().chars().take(BOARD_SIZE).enumerate() {
                if let Some((color, rank)) = Cell::from_char(ch) {
                    pieces.push(Piece::new(color, rank, x as u8, y as u8));
                }
            }
        }
        Self::new(pieces)
    }

    fn rebuild_grid(&mut self) {
        self.grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for piece in self.pieces.as_slice() {
            self.grid[piece.y as usize][piece.x as usize] =
                Cell::Occupied(piece.color, piece.rank);
        }
    }

    pub fn cell(&self, x: u8, y: u8) -> Cell {
        self.grid[y as usize][x as usize]
    }

    pub fn pieces(&self) -> &[Piece] {
        self.pieces.as_slice()
    }

    /// Coordinates of all pieces of `color`: kings first, then basics.
    /// Move generation iterates candidates in exactly this order.
    pub fn pieces_by_color(&self, color: Color) -> (Vec<(u8, u8)>, Vec<(u8, u8)>) {
        let mut kings = Vec::new();
        let mut basics = Vec::new();
        for piece in self.pieces.as_slice() {
            if piece.color != color {
                continue;
            }
            match piece.rank {
                Rank::King => kings.push((piece.x, piece.y)),
                Rank::Basic => basics.push((piece.x, piece.y)),
            }
        }
        (kings, basics)
    }

    pub fn has_pieces(&self, color: Color) -> bool {
        self.pieces.as_slice().iter().any(|p| p.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces
            .as_slice()
            .iter()
            .filter(|p| p.color == color)
            .count()
    }

    /// True once either side has no pieces left
    pub fn is_terminal(&self) -> bool {
        !(self.has_pieces(Color::Red) && self.has_pieces(Color::Black))
    }

    /// Apply a step or jump from `from` along `dir` and return the resulting
    /// board plus whether the mover was promoted by this move.
    ///
    /// A jump removes the piece at `from + dir` and relocates the mover by
    /// `2 * dir`; a step relocates by `1 * dir`. A mover that was not
    /// already a king and reaches `side`'s far rank becomes one; the caller
    /// uses the returned flag to cut a jump chain short.
    ///
    /// Legality is the caller's responsibility: this is only ever fed moves
    /// produced by move generation for this exact board.
    pub fn apply_move(
        &self,
        from: (u8, u8),
        dir: (i8, i8),
        is_jump: bool,
        side: Color,
        was_king: bool,
    ) -> (Board, bool) {
        let mut next = *self;
        let stride: i8 = if is_jump { 2 } else { 1 };

        if is_jump {
            let cx = (from.0 as i8 + dir.0) as u8;
            let cy = (from.1 as i8 + dir.1) as u8;
            if let Some(idx) = next
                .pieces
                .as_slice()
                .iter()
                .position(|p| p.x == cx && p.y == cy)
            {
                next.pieces.remove(idx);
            }
        }

        let tx = (from.0 as i8 + stride * dir.0) as u8;
        let ty = (from.1 as i8 + stride * dir.1) as u8;
        let mut became_king = false;
        if let Some(piece) = next
            .pieces
            .as_mut_slice()
            .iter_mut()
            .find(|p| p.x == from.0 && p.y == from.1)
        {
            piece.x = tx;
            piece.y = ty;
            if !was_king && ty == side.far_rank() {
                piece.rank = Rank::King;
                became_king = true;
            }
        }

        next.rebuild_grid();
        (next, became_king)
    }

    /// Canonical fixed-layout serialization of the position, used as the
    /// content-based tie-break key in move ordering.
    pub fn signature(&self) -> [u8; BOARD_SIZE * BOARD_SIZE] {
        let mut sig = [0u8; BOARD_SIZE * BOARD_SIZE];
        for (y, row) in self.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                sig[y * BOARD_SIZE + x] = cell.as_char() as u8;
            }
        }
        sig
    }

    /// Render the position in the snapshot text format, one row per line
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for row in &self.grid {
            for cell in row {
                out.push(cell.as_char());
            }
            out.push('\n');
        }
        out
    }

    /// Manhattan distance from `(x, y)` to the nearest piece of the color
    /// opposing `color`, or `None` when that side has no pieces left.
    pub fn closest_opponent_distance(&self, x: u8, y: u8, color: Color) -> Option<u32> {
        let opponent = color.opponent();
        self.pieces
            .as_slice()
            .iter()
            .filter(|p| p.color == opponent)
            .map(|p| {
                (x as i32 - p.x as i32).unsigned_abs() + (y as i32 - p.y as i32).unsigned_abs()
            })
            .min()
    }

    /// Average over `color`'s pieces of the distance to their nearest
    /// opponent. A chasing-heuristic ingredient; see `eval::EvalParams`.
    pub fn avg_distance_to_opponent(&self, color: Color) -> Option<u32> {
        let mut sum = 0u32;
        let mut count = 0u32;
        for piece in self.pieces.as_slice() {
            if piece.color == color {
                sum += self.closest_opponent_distance(piece.x, piece.y, color)?;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count)
        }
    }
}
