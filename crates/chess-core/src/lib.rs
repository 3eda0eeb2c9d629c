//! Core types for chess.
//!
//! This crate provides the fundamental value types shared by the rules crate:
//! - [`Piece`], [`PieceKind`], [`PromotionKind`] and [`Color`] for piece representation
//! - [`Square`] and [`Direction`] for board coordinates and ray steps
//! - [`Move`], a tagged immutable move value, and [`LoggedMove`] for history
//! - FEN parsing for position setup

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{CastlingAvailability, Fen, FenError};
pub use mov::{CastleSide, LoggedMove, Move, MoveKind};
pub use piece::{Piece, PieceKind, PromotionKind};
pub use square::{Direction, InvalidSquare, Square};
