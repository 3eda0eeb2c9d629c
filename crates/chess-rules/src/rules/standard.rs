//! Standard chess rules implementation.

use super::RuleSet;
use crate::movegen::{is_in_check, legal_moves, MoveList};
use crate::{apply_move, BoardState, MoveOutcome};
use chess_core::Move;

/// Standard chess rules: the usual piece movement plus castling, en passant
/// and promotion, ending in checkmate or stalemate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_position(&self) -> BoardState {
        BoardState::new_game()
    }

    fn generate_moves(&self, state: &BoardState) -> MoveList {
        legal_moves(state)
    }

    fn apply(&self, state: &mut BoardState, m: Move) -> MoveOutcome {
        apply_move(state, m)
    }

    fn is_check(&self, state: &BoardState) -> bool {
        is_in_check(state)
    }
}
