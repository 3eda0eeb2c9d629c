//! Committing moves to a [`BoardState`].

use crate::castling::relocate_rook;
use crate::en_passant;
use crate::movegen::legal_moves;
use crate::BoardState;
use chess_core::{LoggedMove, Move, MoveKind, PieceKind};
use tracing::debug;

/// What happened to a move handed to [`apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was committed and the turn passed.
    Applied,
    /// A pawn reached the last rank; the turn waits for
    /// [`resolve_promotion`](crate::resolve_promotion).
    PromotionPending,
    /// The move is not legal here; nothing changed.
    Rejected,
}

/// Applies `mov` if it is a member of the current legal list.
///
/// Anything else, including every move while a promotion is pending, is
/// rejected with the state untouched.
pub fn apply_move(state: &mut BoardState, mov: Move) -> MoveOutcome {
    if state.pending_promotion.is_some() {
        debug!(mov = %mov.to_uci(), "rejected: promotion pending");
        return MoveOutcome::Rejected;
    }
    if !legal_moves(state).contains(&mov) {
        debug!(mov = %mov.to_uci(), side = %state.side_to_move, "rejected: not legal");
        return MoveOutcome::Rejected;
    }
    let outcome = commit(state, mov);
    debug!(mov = %mov.to_uci(), ?outcome, "applied");
    outcome
}

/// Commits a move already known to be legal.
pub(crate) fn commit(state: &mut BoardState, mov: Move) -> MoveOutcome {
    let us = mov.piece().color;
    let grid = &mut state.grid;

    grid[mov.from()] = None;
    if mov.kind() == MoveKind::EnPassant {
        grid[en_passant::victim_square(mov)] = None;
    }
    grid[mov.to()] = Some(mov.piece());
    if let MoveKind::Castle(side) = mov.kind() {
        relocate_rook(grid, us, side);
    }

    if mov.piece().kind == PieceKind::King {
        state.king_square[us.index()] = mov.to();
    }
    state.castling.record(mov);
    state.en_passant = en_passant::record_for(mov);
    state.move_log.push(LoggedMove::new(mov));

    if mov.kind() == MoveKind::Promotion {
        state.pending_promotion = Some(mov.to());
        return MoveOutcome::PromotionPending;
    }
    state.side_to_move = us.opposite();
    MoveOutcome::Applied
}
