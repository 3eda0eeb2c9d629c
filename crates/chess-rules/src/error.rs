//! Error types for rule operations.

use chess_core::{FenError, InvalidSquare};
use thiserror::Error;

/// Errors raised by the rules crate.
///
/// Illegal moves are not errors: they come back as
/// [`MoveOutcome::Rejected`](crate::MoveOutcome::Rejected).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinates outside the 8x8 board.
    #[error(transparent)]
    InvalidSquare(#[from] InvalidSquare),

    /// `resolve_promotion` with nothing pending, or with a pawn or king.
    #[error("invalid promotion choice: {0}")]
    InvalidPromotionChoice(String),

    /// The FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),

    /// The FEN parsed but does not describe a playable position.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Square;

    #[test]
    fn invalid_square_converts() {
        let err: RulesError = Square::new(9, 2).unwrap_err().into();
        assert!(matches!(err, RulesError::InvalidSquare(_)));
        assert!(err.to_string().contains("(9, 2)"));
    }

    #[test]
    fn display_messages() {
        let err = RulesError::InvalidPromotionChoice("no promotion is pending".to_string());
        assert_eq!(
            err.to_string(),
            "invalid promotion choice: no promotion is pending"
        );
        let err = RulesError::Fen(FenError::InvalidPartCount(2));
        assert!(err.to_string().starts_with("invalid FEN"));
    }
}
