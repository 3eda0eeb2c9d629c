//! En-passant window tracking.

use crate::board::Grid;
use crate::check::king_attacked;
use chess_core::{Color, Direction, Move, MoveKind, Square};

/// The one-ply en-passant opportunity created by a double pawn push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassant {
    /// The skipped square a capturing pawn moves to.
    pub target: Square,
    /// The square of the pawn that gets removed.
    pub victim: Square,
}

/// Returns the record opened by `mov`, if it is a double push.
///
/// Called after every commit; the previous record is always replaced, so a
/// window lasts exactly one half-move.
pub fn record_for(mov: Move) -> Option<EnPassant> {
    if mov.kind() != MoveKind::DoublePush {
        return None;
    }
    let forward = Direction::new(mov.piece().color.pawn_direction(), 0);
    mov.from().offset(forward, 1).map(|target| EnPassant {
        target,
        victim: mov.to(),
    })
}

/// Square of the pawn removed by an en-passant capture.
///
/// It shares the capturing pawn's starting row and the destination column.
pub fn victim_square(mov: Move) -> Square {
    let dir = Direction::new(0, mov.to().col() as i8 - mov.from().col() as i8);
    mov.from().offset(dir, 1).unwrap_or(mov.to())
}

/// Returns true if capturing en passant from `from` would leave the king of
/// `color` attacked.
///
/// Both pawns leave the same row at once, which can open a rank onto the
/// king that the pin scan cannot see, so the capture is tried on a copy.
pub fn exposes_king(grid: &Grid, king: Square, color: Color, from: Square, record: EnPassant) -> bool {
    let mut trial = grid.with_relocation(from, record.target);
    trial[record.victim] = None;
    king_attacked(&trial, king, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardState;
    use chess_core::{Piece, PieceKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn double_push_opens_window() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let push = Move::new(sq("e2"), sq("e4"), pawn, None, MoveKind::DoublePush);
        assert_eq!(
            record_for(push),
            Some(EnPassant {
                target: sq("e3"),
                victim: sq("e4"),
            })
        );

        let black = Piece::new(Color::Black, PieceKind::Pawn);
        let push = Move::new(sq("c7"), sq("c5"), black, None, MoveKind::DoublePush);
        assert_eq!(record_for(push).map(|r| r.target), Some(sq("c6")));
    }

    #[test]
    fn single_push_opens_nothing() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let push = Move::new(sq("e2"), sq("e3"), pawn, None, MoveKind::Quiet);
        assert_eq!(record_for(push), None);
    }

    #[test]
    fn victim_beside_capturer() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black = Piece::new(Color::Black, PieceKind::Pawn);
        let capture = Move::new(sq("e5"), sq("d6"), pawn, Some(black), MoveKind::EnPassant);
        assert_eq!(victim_square(capture), sq("d5"));
    }

    #[test]
    fn horizontal_discovery_is_caught() {
        // Capturing exd6 would clear the fifth rank between Kh5 and the a5 rook.
        let state = BoardState::from_fen("8/8/8/r2pP2K/8/8/8/k7 w - d6 0 1").unwrap();
        let record = state.en_passant().unwrap();
        assert!(exposes_king(
            state.grid(),
            state.king_square(Color::White),
            Color::White,
            sq("e5"),
            record
        ));
    }
}
