//! Legal move generation and move application for one chess session.
//!
//! This crate provides:
//! - [`BoardState`] - the mutable 8x8 session state with per-side metadata
//! - [`legal_moves`] - pin-aware generation narrowed by the check filter
//! - [`apply_move`] and [`resolve_promotion`] - committing moves in place
//! - [`game_result`] - checkmate and stalemate detection
//! - [`perft`](movegen::perft::perft) - node counting for validation
//!
//! # Cycle
//!
//! Each turn the king's rays are scanned for checks and pins, every piece of
//! the side to move generates its moves, the list is narrowed when the king is
//! attacked, and the caller picks one move to apply.
//!
//! # Example
//!
//! ```
//! use chess_rules::{apply_move, game_result, legal_moves, new_game, GameResult, MoveOutcome};
//! use chess_core::Square;
//!
//! let mut state = new_game();
//! let moves = legal_moves(&state);
//! assert_eq!(moves.len(), 20);
//!
//! let e4 = moves
//!     .find(Square::from_algebraic("e2").unwrap(), Square::from_algebraic("e4").unwrap())
//!     .unwrap();
//! assert_eq!(apply_move(&mut state, e4), MoveOutcome::Applied);
//! assert_eq!(game_result(&state, &legal_moves(&state)), GameResult::Ongoing);
//! ```

mod apply;
mod board;
pub mod castling;
pub mod check;
pub mod en_passant;
mod error;
mod legality;
pub mod movegen;
mod promotion;
pub mod rules;

pub use apply::{apply_move, MoveOutcome};
pub use board::{BoardState, Grid};
pub use error::RulesError;
pub use movegen::{is_in_check, legal_moves, legal_moves_from, MoveList};
pub use promotion::resolve_promotion;
pub use rules::{game_result, GameResult, RuleSet, StandardChess};

/// Creates a session at the standard starting position.
pub fn new_game() -> BoardState {
    BoardState::new_game()
}
