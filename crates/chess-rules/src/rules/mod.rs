//! Game-end detection and the rule set seam.
//!
//! Only checkmate and stalemate end a game here. Repetition, the fifty-move
//! rule and insufficient material are left to whoever drives the session.

mod standard;

pub use standard::StandardChess;

use crate::movegen::{is_in_check, MoveList};
use crate::{BoardState, MoveOutcome};
use chess_core::{Color, Move};

/// State of the game as seen by the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The side to move still has a legal move, or owes a promotion choice.
    Ongoing,
    /// The side to move is checkmated; `winner` delivered the mate.
    Checkmate { winner: Color },
    /// No legal move and not in check.
    Stalemate,
}

impl GameResult {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }
}

/// Classifies the position from its legal-move list.
///
/// `moves` must be the list [`legal_moves`](crate::legal_moves) returned for
/// `state`. A pending promotion keeps the game going even though the list is
/// empty, since the mover still has a choice to make.
pub fn game_result(state: &BoardState, moves: &MoveList) -> GameResult {
    if state.pending_promotion().is_some() || !moves.is_empty() {
        return GameResult::Ongoing;
    }
    if is_in_check(state) {
        GameResult::Checkmate {
            winner: state.side_to_move().opposite(),
        }
    } else {
        GameResult::Stalemate
    }
}

/// Entry points a session driver needs, bundled so a driver can be written
/// against the trait rather than the free functions.
///
/// # Example
///
/// ```
/// use chess_rules::rules::{GameResult, RuleSet, StandardChess};
///
/// let state = StandardChess.initial_position();
/// assert_eq!(StandardChess.generate_moves(&state).len(), 20);
/// assert_eq!(StandardChess.result(&state), GameResult::Ongoing);
/// ```
pub trait RuleSet {
    /// Returns the position a new session starts from.
    fn initial_position(&self) -> BoardState;

    /// Generates all legal moves for the side to move.
    fn generate_moves(&self, state: &BoardState) -> MoveList;

    /// Commits `m` if legal.
    fn apply(&self, state: &mut BoardState, m: Move) -> MoveOutcome;

    /// Returns true if the side to move is in check.
    fn is_check(&self, state: &BoardState) -> bool;

    /// Returns true if `m` is in the current legal list.
    fn is_legal(&self, state: &BoardState, m: Move) -> bool {
        self.generate_moves(state).contains(&m)
    }

    /// Generates the legal list and classifies the position from it.
    fn result(&self, state: &BoardState) -> GameResult {
        game_result(state, &self.generate_moves(state))
    }
}
