//! Check resolution filter applied after generation.
//!
//! Pins are already honored by the generators. What remains is narrowing the
//! list when the king is attacked: with one checker a non-king move must
//! capture it or block its ray, with two only the king may move.

use crate::check::{Check, CheckInfo};
use crate::en_passant;
use crate::movegen::MoveList;
use chess_core::{MoveKind, Square};

/// Removes the moves that leave a checked king in check.
///
/// King steps were validated on a trial grid when generated, so they pass
/// through untouched. An en-passant capture also survives when the pawn it
/// removes is the checker.
pub(crate) fn filter(moves: &mut MoveList, king: Square, info: &CheckInfo) {
    match info.checks.as_slice() {
        [] => {}
        [check] => {
            let resolving = resolving_squares(king, check);
            moves.retain(|m| {
                m.is_king_move()
                    || resolving.contains(&m.to())
                    || (m.kind() == MoveKind::EnPassant
                        && en_passant::victim_square(*m) == check.attacker)
            });
        }
        _ => moves.retain(|m| m.is_king_move()),
    }
}

/// Squares on which a non-king move answers `check`: the checker itself,
/// plus the squares between it and the king when it slides.
fn resolving_squares(king: Square, check: &Check) -> Vec<Square> {
    if !check.sliding {
        return vec![check.attacker];
    }
    let mut squares = Vec::new();
    for sq in king.ray(check.direction) {
        squares.push(sq);
        if sq == check.attacker {
            break;
        }
    }
    squares
}
