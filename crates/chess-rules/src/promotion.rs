//! Pending promotions and their resolution.

use crate::{BoardState, MoveOutcome, RulesError};
use chess_core::{Piece, PieceKind, PromotionKind};
use tracing::debug;

/// Replaces the pawn waiting on the last rank with `kind` and passes the turn.
///
/// Fails without touching the state when nothing is pending or `kind` is a
/// pawn or a king.
pub fn resolve_promotion(state: &mut BoardState, kind: PieceKind) -> Result<MoveOutcome, RulesError> {
    if state.pending_promotion.is_none() {
        return Err(RulesError::InvalidPromotionChoice(
            "no promotion is pending".to_string(),
        ));
    }
    let choice = PromotionKind::from_piece_kind(kind).ok_or_else(|| {
        RulesError::InvalidPromotionChoice(format!("cannot promote to {}", kind))
    })?;
    promote(state, choice);
    Ok(MoveOutcome::Applied)
}

/// Completes a pending promotion with a choice already known to be valid.
pub(crate) fn promote(state: &mut BoardState, choice: PromotionKind) {
    let Some(square) = state.pending_promotion.take() else {
        return;
    };
    let us = state.side_to_move;
    state.grid[square] = Some(Piece::new(us, choice.piece_kind()));
    if let Some(last) = state.move_log.last_mut() {
        last.promoted_to = Some(choice);
    }
    state.side_to_move = us.opposite();
    debug!(square = %square, piece = %choice.piece_kind(), "promotion resolved");
}
