//! Castling rights and eligibility.

use crate::board::Grid;
use crate::check::king_attacked;
use crate::BoardState;
use chess_core::{CastleSide, CastlingAvailability, Color, Direction, Move, Piece, PieceKind, Square};

/// Per-color "has moved" flags that gate castling.
///
/// Flags only ever go from `false` to `true`: a rook that leaves its home
/// square and comes back never regains the right to castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingFlags {
    king_moved: [bool; 2],
    king_side_rook_moved: [bool; 2],
    queen_side_rook_moved: [bool; 2],
}

impl CastlingFlags {
    /// Flags for a fresh game: nothing has moved.
    pub const fn new() -> Self {
        CastlingFlags {
            king_moved: [false; 2],
            king_side_rook_moved: [false; 2],
            queen_side_rook_moved: [false; 2],
        }
    }

    /// Builds flags from FEN castling letters; a missing letter marks that
    /// rook as moved.
    pub fn from_availability(rights: CastlingAvailability) -> Self {
        CastlingFlags {
            king_moved: [false; 2],
            king_side_rook_moved: [!rights.white_king_side, !rights.black_king_side],
            queen_side_rook_moved: [!rights.white_queen_side, !rights.black_queen_side],
        }
    }

    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.king_side_rook_moved[color.index()],
            CastleSide::QueenSide => self.queen_side_rook_moved[color.index()],
        }
    }

    /// Returns true if neither the king nor this side's rook has moved.
    #[inline]
    pub fn may_castle(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        match side {
            CastleSide::KingSide => self.king_side_rook_moved[color.index()] = true,
            CastleSide::QueenSide => self.queen_side_rook_moved[color.index()] = true,
        }
    }

    /// Records the effect of a committed move on the flags.
    ///
    /// Moving the king sets its flag, moving a rook off its home square sets
    /// that rook's flag, and capturing on an enemy rook's home square sets
    /// the enemy flag so a captured rook can never castle.
    pub fn record(&mut self, mov: Move) {
        let mover = mov.piece();
        match mover.kind {
            PieceKind::King => self.mark_king_moved(mover.color),
            PieceKind::Rook => {
                for side in CastleSide::BOTH {
                    if mov.from() == side.rook_home(mover.color) {
                        self.mark_rook_moved(mover.color, side);
                    }
                }
            }
            _ => {}
        }

        if mov.is_capture() {
            let them = mover.color.opposite();
            for side in CastleSide::BOTH {
                if mov.to() == side.rook_home(them) {
                    self.mark_rook_moved(them, side);
                }
            }
        }
    }
}

/// Home square of the king for `color`.
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}

/// Returns true if the side to move may castle towards `side` right now.
///
/// Requires unmoved king and rook, the rook still on its home square, every
/// square between them empty, and the king safe on its current square, the
/// square it passes and the square it lands on.
pub fn can_castle(state: &BoardState, side: CastleSide, in_check: bool) -> bool {
    let us = state.side_to_move();
    if in_check || !state.castling().may_castle(us, side) {
        return false;
    }

    let king = state.king_square(us);
    let rook_home = side.rook_home(us);
    if king != king_home(us) || state.piece_on(rook_home) != Some(Piece::new(us, PieceKind::Rook)) {
        return false;
    }

    let step = Direction::new(0, side.king_step());
    let path_clear = king
        .ray(step)
        .take_while(|&sq| sq != rook_home)
        .all(|sq| state.piece_on(sq).is_none());
    if !path_clear {
        return false;
    }

    (1..=2).all(|n| match king.offset(step, n) {
        Some(sq) => !king_attacked(&state.grid().with_relocation(king, sq), sq, us),
        None => false,
    })
}

/// Returns the king's destination when castling towards `side`.
pub fn king_target(color: Color, side: CastleSide) -> Square {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => Square::G1,
        (Color::White, CastleSide::QueenSide) => Square::C1,
        (Color::Black, CastleSide::KingSide) => Square::G8,
        (Color::Black, CastleSide::QueenSide) => Square::C8,
    }
}

/// Hops the rook over the king after a castle has moved the king.
pub fn relocate_rook(grid: &mut Grid, color: Color, side: CastleSide) {
    let rook = grid[side.rook_home(color)].take();
    grid[side.rook_target(color)] = rook;
}
