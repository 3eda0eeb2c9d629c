//! Board state for a single game session.

use crate::castling::CastlingFlags;
use crate::en_passant::EnPassant;
use crate::RulesError;
use chess_core::{Color, Direction, Fen, LoggedMove, Piece, PieceKind, Square};
use std::fmt;
use std::ops::{Index, IndexMut};

/// The 8x8 placement grid, indexed by [`Square`].
///
/// The grid is the only source of truth for where pieces stand. It is
/// `Copy` so trial relocations can run on a scratch copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid([[Option<Piece>; 8]; 8]);

impl Grid {
    /// Creates an empty grid.
    pub const fn empty() -> Self {
        Grid([[None; 8]; 8])
    }

    /// Returns the grid with the piece on `from` moved to `to`.
    pub fn with_relocation(mut self, from: Square, to: Square) -> Self {
        self[to] = self[from].take();
        self
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self[sq].map(|piece| (sq, piece)))
    }
}

impl Index<Square> for Grid {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.row() as usize][sq.col() as usize]
    }
}

impl IndexMut<Square> for Grid {
    #[inline]
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.0[sq.row() as usize][sq.col() as usize]
    }
}

/// Complete legality state of one game session.
///
/// Created once per session and mutated in place by
/// [`apply_move`](crate::apply_move) and
/// [`resolve_promotion`](crate::resolve_promotion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) king_square: [Square; 2],
    pub(crate) castling: CastlingFlags,
    pub(crate) en_passant: Option<EnPassant>,
    pub(crate) pending_promotion: Option<Square>,
    pub(crate) move_log: Vec<LoggedMove>,
}

impl BoardState {
    /// Creates the standard starting position with White to move.
    pub fn new_game() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut grid = Grid::empty();
        for sq in Square::all() {
            let col = sq.col() as usize;
            for color in Color::BOTH {
                if sq.row() == color.back_rank() {
                    grid[sq] = Some(Piece::new(color, BACK_RANK[col]));
                } else if sq.row() == color.pawn_start_row() {
                    grid[sq] = Some(Piece::new(color, PieceKind::Pawn));
                }
            }
        }

        BoardState {
            grid,
            side_to_move: Color::White,
            king_square: [Square::E1, Square::E8],
            castling: CastlingFlags::new(),
            en_passant: None,
            pending_promotion: None,
            move_log: Vec::new(),
        }
    }

    /// Creates a position from a FEN string.
    ///
    /// Missing castling letters mark the matching rook as moved; the
    /// en-passant field opens the one-ply capture window when an enemy pawn
    /// actually stands beyond the skipped square.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let parsed = Fen::parse(fen)?;

        let mut grid = Grid::empty();
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        for sq in Square::all() {
            let piece = parsed.placement[sq.row() as usize][sq.col() as usize];
            if let Some(p) = piece {
                if p.kind == PieceKind::King {
                    kings[p.color.index()].push(sq);
                }
            }
            grid[sq] = piece;
        }

        let mut king_square = [Square::E1, Square::E8];
        for color in Color::BOTH {
            match kings[color.index()].as_slice() {
                [sq] => king_square[color.index()] = *sq,
                found => {
                    return Err(RulesError::InvalidPosition(format!(
                        "expected one {} king, found {}",
                        color,
                        found.len()
                    )))
                }
            }
        }

        let us = parsed.side_to_move;
        let en_passant = parsed.en_passant.and_then(|target| {
            let victim = target.offset(Direction::new(-us.pawn_direction(), 0), 1)?;
            let enemy_pawn = Piece::new(us.opposite(), PieceKind::Pawn);
            (grid[victim] == Some(enemy_pawn)).then_some(EnPassant { target, victim })
        });

        Ok(BoardState {
            grid,
            side_to_move: us,
            king_square,
            castling: CastlingFlags::from_availability(parsed.castling),
            en_passant,
            pending_promotion: None,
            move_log: Vec::new(),
        })
    }

    /// Returns the piece at (row, col), failing for off-board coordinates.
    pub fn piece_at(&self, row: i32, col: i32) -> Result<Option<Piece>, RulesError> {
        let sq = Square::new(row, col)?;
        Ok(self.grid[sq])
    }

    /// Returns the piece on a square.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.grid[sq]
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the cached king location for `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    #[inline]
    pub fn castling(&self) -> &CastlingFlags {
        &self.castling
    }

    /// Returns the en-passant record valid for the current half-move.
    #[inline]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    /// Returns the square awaiting a promotion choice, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Returns every applied move, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[LoggedMove] {
        &self.move_log
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for sq in Square::all().filter(|sq| sq.row() == row) {
                let c = self.grid[sq].map_or('.', Piece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_game_layout() {
        let state = BoardState::new_game();
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(
            state.piece_on(Square::E1),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            state.piece_on(Square::D8),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            state.piece_on(sq("c7")),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(state.piece_on(sq("e4")), None);
        assert_eq!(state.grid().pieces().count(), 32);
        assert_eq!(state.king_square(Color::Black), Square::E8);
        assert!(state.move_log().is_empty());
    }

    #[test]
    fn startpos_fen_matches_new_game() {
        let state = BoardState::from_fen(Fen::STARTPOS).unwrap();
        assert_eq!(state, BoardState::new_game());
    }

    #[test]
    fn piece_at_rejects_off_board() {
        let state = BoardState::new_game();
        assert_eq!(
            state.piece_at(7, 4).unwrap(),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert!(matches!(
            state.piece_at(8, 4),
            Err(RulesError::InvalidSquare(_))
        ));
        assert!(matches!(
            state.piece_at(0, -1),
            Err(RulesError::InvalidSquare(_))
        ));
    }

    #[test]
    fn from_fen_requires_one_king_each() {
        assert!(matches!(
            BoardState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(RulesError::InvalidPosition(_))
        ));
        assert!(matches!(
            BoardState::from_fen("k7/8/8/8/8/8/8/K6K w - - 0 1"),
            Err(RulesError::InvalidPosition(_))
        ));
    }

    #[test]
    fn from_fen_reads_en_passant_window() {
        let state =
            BoardState::from_fen("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 1")
                .unwrap();
        assert_eq!(
            state.en_passant(),
            Some(EnPassant {
                target: sq("e6"),
                victim: sq("e5"),
            })
        );
    }

    #[test]
    fn from_fen_ignores_en_passant_without_victim() {
        let state = BoardState::from_fen("4k3/8/8/8/8/8/8/4K3 w - e6 0 1").unwrap();
        assert_eq!(state.en_passant(), None);
    }

    #[test]
    fn grid_relocation_is_a_copy() {
        let state = BoardState::new_game();
        let trial = state.grid().with_relocation(Square::E1, sq("e4"));
        assert_eq!(trial[Square::E1], None);
        assert!(trial[sq("e4")].is_some());
        assert!(state.grid()[Square::E1].is_some());
    }

    #[test]
    fn display_draws_board() {
        let text = BoardState::new_game().to_string();
        assert!(text.starts_with("8  r n b q k b n r"));
        assert!(text.ends_with("White to move"));
    }
}
