//! Move generation.
//!
//! Moves are produced by a row-major scan of the side to move's pieces, with
//! a closed `match` over the piece kind choosing the generator. Pins found by
//! [`check::detect`] are honored here; resolving a check is left to
//! [`legality::filter`](crate::legality::filter).

pub mod perft;

use crate::castling::{can_castle, king_target};
use crate::check::{self, CheckInfo};
use crate::{en_passant, legality, BoardState};
use chess_core::{CastleSide, Color, Direction, Move, MoveKind, Piece, PieceKind, Square};
use tracing::trace;

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of legal moves in any chess position.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Looks up the move between two squares.
    ///
    /// Within one legal list no two moves share both squares, so this is how
    /// an input loop turns two clicked squares into a move.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.as_slice()
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates every legal move for the side to move.
///
/// Returns an empty list while a promotion is waiting for its piece choice.
pub fn legal_moves(state: &BoardState) -> MoveList {
    let mut moves = MoveList::new();
    if state.pending_promotion().is_some() {
        return moves;
    }

    let us = state.side_to_move();
    let king = state.king_square(us);
    let info = check::detect(state.grid(), king, us);
    let generator = Generator {
        state,
        us,
        info: &info,
    };

    if info.is_double_check() {
        // Only the king can answer two checks at once.
        generator.king(king, Piece::new(us, PieceKind::King), &mut moves);
    } else {
        for (from, piece) in state.grid().pieces() {
            if piece.color == us {
                generator.piece(from, piece, &mut moves);
            }
        }
    }

    legality::filter(&mut moves, king, &info);
    trace!(
        side = %us,
        count = moves.len(),
        checks = info.checks.len(),
        pins = info.pins.len(),
        "generated legal moves"
    );
    moves
}

/// Returns the legal moves starting on `from`.
pub fn legal_moves_from(state: &BoardState, from: Square) -> Vec<Move> {
    legal_moves(state)
        .as_slice()
        .iter()
        .copied()
        .filter(|m| m.from() == from)
        .collect()
}

/// Returns true if the side to move's king is attacked.
pub fn is_in_check(state: &BoardState) -> bool {
    let us = state.side_to_move();
    check::king_attacked(state.grid(), state.king_square(us), us)
}

/// Per-query generation context: the position plus this turn's pins.
struct Generator<'a> {
    state: &'a BoardState,
    us: Color,
    info: &'a CheckInfo,
}

impl Generator<'_> {
    fn piece(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece.kind {
            PieceKind::Pawn => self.pawn(from, piece, moves),
            PieceKind::Knight => self.knight(from, piece, moves),
            PieceKind::Bishop => self.slider(from, piece, &Direction::DIAGONAL, moves),
            PieceKind::Rook => self.slider(from, piece, &Direction::ORTHOGONAL, moves),
            PieceKind::Queen => {
                self.slider(from, piece, &Direction::ORTHOGONAL, moves);
                self.slider(from, piece, &Direction::DIAGONAL, moves);
            }
            PieceKind::King => self.king(from, piece, moves),
        }
    }

    /// Returns true if the piece on `from` may step along `dir`.
    #[inline]
    fn pin_allows(&self, from: Square, dir: Direction) -> bool {
        self.info
            .pins
            .get(from)
            .map_or(true, |pin| pin.is_parallel(dir))
    }

    fn push(&self, piece: Piece, from: Square, to: Square, kind: MoveKind, moves: &mut MoveList) {
        let captured = self.state.piece_on(to);
        moves.push(Move::new(from, to, piece, captured, kind));
    }

    fn pawn(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let step = self.us.pawn_direction();
        let forward = Direction::new(step, 0);
        let arrival = |to: Square, otherwise: MoveKind| {
            if to.row() == self.us.promotion_row() {
                MoveKind::Promotion
            } else {
                otherwise
            }
        };

        if self.pin_allows(from, forward) {
            if let Some(one) = from.offset(forward, 1) {
                if self.state.piece_on(one).is_none() {
                    self.push(piece, from, one, arrival(one, MoveKind::Quiet), moves);
                    if from.row() == self.us.pawn_start_row() {
                        if let Some(two) = from.offset(forward, 2) {
                            if self.state.piece_on(two).is_none() {
                                self.push(piece, from, two, MoveKind::DoublePush, moves);
                            }
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            let dir = Direction::new(step, side);
            if !self.pin_allows(from, dir) {
                continue;
            }
            let Some(to) = from.offset(dir, 1) else {
                continue;
            };
            match self.state.piece_on(to) {
                Some(target) if target.color != self.us => {
                    self.push(piece, from, to, arrival(to, MoveKind::Capture), moves);
                }
                Some(_) => {}
                None => self.en_passant(from, piece, to, moves),
            }
        }
    }

    fn en_passant(&self, from: Square, piece: Piece, to: Square, moves: &mut MoveList) {
        let Some(record) = self.state.en_passant() else {
            return;
        };
        if record.target != to {
            return;
        }
        let king = self.state.king_square(self.us);
        if en_passant::exposes_king(self.state.grid(), king, self.us, from, record) {
            return;
        }
        let captured = self.state.piece_on(record.victim);
        moves.push(Move::new(
            from,
            to,
            piece,
            captured,
            MoveKind::EnPassant,
        ));
    }

    fn knight(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        // A pinned knight can never stay on its pin ray.
        if self.info.pins.get(from).is_some() {
            return;
        }
        for &jump in &Direction::KNIGHT {
            if let Some(to) = from.offset(jump, 1) {
                match self.state.piece_on(to) {
                    Some(p) if p.color == self.us => {}
                    Some(_) => self.push(piece, from, to, MoveKind::Capture, moves),
                    None => self.push(piece, from, to, MoveKind::Quiet, moves),
                }
            }
        }
    }

    fn slider(&self, from: Square, piece: Piece, directions: &[Direction], moves: &mut MoveList) {
        for &dir in directions {
            if !self.pin_allows(from, dir) {
                continue;
            }
            for to in from.ray(dir) {
                match self.state.piece_on(to) {
                    None => self.push(piece, from, to, MoveKind::Quiet, moves),
                    Some(p) => {
                        if p.color != self.us {
                            self.push(piece, from, to, MoveKind::Capture, moves);
                        }
                        break;
                    }
                }
            }
        }
    }

    fn king(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        for &dir in &Direction::KING {
            let Some(to) = from.offset(dir, 1) else {
                continue;
            };
            let kind = match self.state.piece_on(to) {
                Some(p) if p.color == self.us => continue,
                Some(_) => MoveKind::Capture,
                None => MoveKind::Quiet,
            };
            let trial = self.state.grid().with_relocation(from, to);
            if !check::king_attacked(&trial, to, self.us) {
                self.push(piece, from, to, kind, moves);
            }
        }

        let in_check = self.info.in_check();
        for side in CastleSide::BOTH {
            if can_castle(self.state, side, in_check) {
                let to = king_target(self.us, side);
                self.push(piece, from, to, MoveKind::Castle(side), moves);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Fen;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn moves_of(fen: &str) -> MoveList {
        legal_moves(&BoardState::from_fen(fen).unwrap())
    }

    fn uci(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|m| m.to_uci()).collect()
    }

    #[test]
    fn movelist_push_find_and_retain() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let m1 = Move::new(sq("e2"), sq("e3"), pawn, None, MoveKind::Quiet);
        let m2 = Move::new(sq("e2"), sq("e4"), pawn, None, MoveKind::DoublePush);
        let m3 = Move::new(sq("d2"), sq("d3"), pawn, None, MoveKind::Quiet);
        list.push(m1);
        list.push(m2);
        list.push(m3);

        assert_eq!(list.len(), 3);
        assert_eq!(list[1], m2);
        assert_eq!(list.find(sq("e2"), sq("e4")), Some(m2));
        assert_eq!(list.find(sq("e2"), sq("e5")), None);

        list.retain(|m| m.from() == sq("e2"));
        assert_eq!(list.len(), 2);
        assert!(!list.contains(&m3));
    }

    #[test]
    fn startpos_has_twenty_moves_in_scan_order() {
        let moves = legal_moves(&BoardState::new_game());
        assert_eq!(moves.len(), 20);
        // Row-major scan reaches the pawns on row 6 before the knights on row 7.
        assert_eq!(moves[0].to_uci(), "a2a3");
        assert_eq!(moves[1].to_uci(), "a2a4");
        assert_eq!(moves[1].kind(), MoveKind::DoublePush);
        assert_eq!(moves[16].to_uci(), "b1a3");
        assert_eq!(moves[18].to_uci(), "g1f3");
        assert_eq!(moves[19].to_uci(), "g1h3");
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let moves = moves_of("7k/8/8/b7/8/8/3N4/4K3 w - - 0 1");
        assert!(moves.as_slice().iter().all(|m| m.from() != sq("d2")));
    }

    #[test]
    fn pinned_rook_slides_along_pin() {
        let state = BoardState::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
        let moves = legal_moves(&state);
        let rook = uci(&legal_moves_from(&state, sq("e2")));
        assert_eq!(
            rook,
            vec!["e2e3", "e2e4", "e2e5", "e2e6", "e2e7", "e2e8"]
        );
        assert_eq!(moves.find(sq("e2"), sq("e8")).map(|m| m.kind()), Some(MoveKind::Capture));
    }

    #[test]
    fn pinned_pawn_captures_pinner_only() {
        // f2 pawn pinned by the g3 bishop: it may take the bishop but not push.
        let state = BoardState::from_fen("7k/8/8/8/8/6b1/5P2/4K3 w - - 0 1").unwrap();
        assert_eq!(uci(&legal_moves_from(&state, sq("f2"))), vec!["f2g3"]);
    }

    #[test]
    fn en_passant_generated_in_window() {
        let moves = moves_of("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 1");
        let ep = moves.find(sq("f5"), sq("e6")).unwrap();
        assert_eq!(ep.kind(), MoveKind::EnPassant);
        assert_eq!(
            ep.captured(),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn en_passant_rejected_when_it_exposes_king() {
        let moves = moves_of("8/8/8/r2pP2K/8/8/8/k7 w - d6 0 1");
        assert!(moves.find(sq("e5"), sq("d6")).is_none());
        assert!(moves.find(sq("e5"), sq("e6")).is_some());
    }

    #[test]
    fn promotion_is_one_move_per_destination() {
        let moves = moves_of("1n5k/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promos: Vec<Move> = moves
            .as_slice()
            .iter()
            .copied()
            .filter(|m| m.kind() == MoveKind::Promotion)
            .collect();
        assert_eq!(uci(&promos), vec!["a7a8", "a7b8"]);
        assert!(promos[1].is_capture());
    }

    #[test]
    fn king_does_not_step_into_attack() {
        // The rook on d8 covers the d-file.
        let state = BoardState::from_fen("3r3k/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let targets = uci(&legal_moves_from(&state, Square::E1));
        assert_eq!(targets, vec!["e1f1", "e1e2", "e1f2"]);
    }

    #[test]
    fn king_cannot_retreat_along_check_ray() {
        let state = BoardState::from_fen("4r2k/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let targets = uci(&legal_moves_from(&state, Square::E1));
        assert_eq!(targets, vec!["e1d1", "e1f1", "e1f2", "e1d2"]);
    }

    #[test]
    fn castling_listed_after_king_steps() {
        let moves = moves_of("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let castles: Vec<Move> = moves
            .as_slice()
            .iter()
            .copied()
            .filter(|m| m.castle_side().is_some())
            .collect();
        assert_eq!(uci(&castles), vec!["e1g1", "e1c1"]);
    }

    #[test]
    fn pending_promotion_blocks_generation() {
        let mut state = BoardState::from_fen("7k/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        state.pending_promotion = Some(Square::A8);
        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn in_check_query() {
        assert!(!is_in_check(&BoardState::from_fen(Fen::STARTPOS).unwrap()));
        assert!(is_in_check(
            &BoardState::from_fen("4r2k/8/8/8/8/8/8/4K3 w - - 0 1").unwrap()
        ));
    }
}
