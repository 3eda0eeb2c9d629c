//! Move representation.

use crate::{Color, Piece, PieceKind, PromotionKind, Square};
use std::fmt;

/// The side of the board a castle goes towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Towards the h-file rook (O-O).
    KingSide,
    /// Towards the a-file rook (O-O-O).
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column step the king takes when castling to this side.
    #[inline]
    pub const fn king_step(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Home square of this side's rook for `color`.
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::H1,
            (Color::White, CastleSide::QueenSide) => Square::A1,
            (Color::Black, CastleSide::KingSide) => Square::H8,
            (Color::Black, CastleSide::QueenSide) => Square::A8,
        }
    }

    /// Square the rook lands on after castling.
    pub const fn rook_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::F1,
            (Color::White, CastleSide::QueenSide) => Square::D1,
            (Color::Black, CastleSide::KingSide) => Square::F8,
            (Color::Black, CastleSide::QueenSide) => Square::D8,
        }
    }
}

/// What a move does beyond relocating a piece, decided at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Non-capturing move.
    Quiet,
    /// Pawn advance of two squares from its starting row.
    DoublePush,
    /// Capture of the piece standing on the destination.
    Capture,
    /// Pawn capture onto the skipped square of a double push.
    EnPassant,
    /// Two-square king move with the matching rook hop.
    Castle(CastleSide),
    /// Pawn move onto the farthest row; the replacement is chosen later.
    Promotion,
}

/// A chess move.
///
/// Moves are immutable values. Equality covers every field, so a castle or
/// an en-passant capture never compares equal to a plain move between the
/// same squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            kind,
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the piece being moved.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Returns the captured piece, if any.
    ///
    /// For en passant this is the pawn beside the destination.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns the castle side if this is a castling move.
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_king_move(self) -> bool {
        matches!(self.piece.kind, PieceKind::King)
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// A placeholder value used to fill fixed-size move buffers.
    pub const NULL: Move = Move::new(
        Square::A8,
        Square::A8,
        Piece::new(Color::White, PieceKind::Pawn),
        None,
        MoveKind::Quiet,
    );
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?})", self.to_uci(), self.kind)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

/// A move as recorded in the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggedMove {
    /// The move that was applied.
    pub mov: Move,
    /// The replacement chosen for a promotion, once resolved.
    pub promoted_to: Option<PromotionKind>,
}

impl LoggedMove {
    /// Logs a move with no promotion choice yet.
    pub const fn new(mov: Move) -> Self {
        LoggedMove {
            mov,
            promoted_to: None,
        }
    }

    /// Returns the coordinate notation including any promotion suffix.
    pub fn to_uci(&self) -> String {
        match self.promoted_to {
            Some(kind) => format!("{}{}", self.mov.to_uci(), kind.piece_kind().to_char()),
            None => self.mov.to_uci(),
        }
    }
}
