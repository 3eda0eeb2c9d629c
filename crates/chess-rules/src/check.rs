//! Check and pin detection by ray casting from the king.
//!
//! From the king square, eight rays (four orthogonal, then four diagonal) are
//! walked outwards. The first friendly piece on a ray is a pin candidate; it
//! becomes a pin when the next piece is an enemy slider of the ray's
//! geometry. The first enemy piece on a ray gives check when it attacks along
//! that ray. Knight checks are found separately from the eight knight jumps.

use crate::board::Grid;
use chess_core::{Color, Direction, PieceKind, Square};

/// A friendly piece that shields the king from an enemy slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Ray direction from the king towards the pinned piece.
    pub direction: Direction,
}

/// An enemy piece attacking the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    /// Ray direction from the king, or the knight jump that reaches the attacker.
    pub direction: Direction,
    /// True when the check can be blocked on the squares in between.
    pub sliding: bool,
}

/// Read-only map from pinned square to pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pins {
    by_square: [[Option<Direction>; 8]; 8],
    len: usize,
}

impl Pins {
    fn new() -> Self {
        Pins {
            by_square: [[None; 8]; 8],
            len: 0,
        }
    }

    fn insert(&mut self, pin: Pin) {
        let slot = &mut self.by_square[pin.square.row() as usize][pin.square.col() as usize];
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(pin.direction);
    }

    /// Returns the pin direction if the piece on `sq` is pinned.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Direction> {
        self.by_square[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Result of one detection pass, recomputed before every legal-move query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInfo {
    pub pins: Pins,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    #[inline]
    pub fn in_check(&self) -> bool {
        !self.checks.is_empty()
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Scans for checks against, and pins around, a king of `color` on `king`.
///
/// `king` does not have to hold the king: castling and king-step tests call
/// this with a trial grid. A friendly king met on a ray is looked through.
pub fn detect(grid: &Grid, king: Square, color: Color) -> CheckInfo {
    let mut pins = Pins::new();
    let mut checks = Vec::new();

    let rays = Direction::ORTHOGONAL.iter().chain(Direction::DIAGONAL.iter());
    for &dir in rays {
        let mut candidate: Option<Square> = None;
        for (distance, sq) in king.ray(dir).enumerate() {
            let Some(piece) = grid[sq] else {
                continue;
            };
            if piece.color == color {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if candidate.is_some() {
                    break;
                }
                candidate = Some(sq);
                continue;
            }

            if attacks_along(piece.kind, piece.color, dir, distance + 1) {
                match candidate {
                    Some(square) => pins.insert(Pin {
                        square,
                        direction: dir,
                    }),
                    None => checks.push(Check {
                        attacker: sq,
                        direction: dir,
                        sliding: piece.kind.is_slider(),
                    }),
                }
            }
            break;
        }
    }

    for &jump in &Direction::KNIGHT {
        if let Some(sq) = king.offset(jump, 1) {
            if let Some(piece) = grid[sq] {
                if piece.color != color && piece.kind == PieceKind::Knight {
                    checks.push(Check {
                        attacker: sq,
                        direction: jump,
                        sliding: false,
                    });
                }
            }
        }
    }

    CheckInfo { pins, checks }
}

/// Returns true if an enemy piece found `distance` steps from the king along
/// `dir` attacks back down that ray.
fn attacks_along(kind: PieceKind, attacker: Color, dir: Direction, distance: usize) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => dir.is_orthogonal(),
        PieceKind::Bishop => dir.is_diagonal(),
        PieceKind::King => distance == 1,
        // A pawn hits the two squares diagonally in front of it, so seen from
        // the king it stands one step away against its own direction of travel.
        PieceKind::Pawn => {
            distance == 1 && dir.is_diagonal() && dir.row == -attacker.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

/// Returns true if a king of `color` would be attacked on `king`.
pub fn king_attacked(grid: &Grid, king: Square, color: Color) -> bool {
    detect(grid, king, color).in_check()
}

/// Returns true if `sq` is attacked by any piece of `by`.
pub fn is_square_attacked(grid: &Grid, sq: Square, by: Color) -> bool {
    king_attacked(grid, sq, by.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardState;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn detect_fen(fen: &str) -> CheckInfo {
        let state = BoardState::from_fen(fen).unwrap();
        let us = state.side_to_move();
        detect(state.grid(), state.king_square(us), us)
    }

    #[test]
    fn startpos_is_quiet() {
        let info = detect_fen(chess_core::Fen::STARTPOS);
        assert!(!info.in_check());
        assert!(info.pins.is_empty());
    }

    #[test]
    fn rook_check_on_file() {
        let info = detect_fen("4r2k/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            info.checks,
            vec![Check {
                attacker: sq("e8"),
                direction: Direction::new(-1, 0),
                sliding: true,
            }]
        );
    }

    #[test]
    fn rook_on_diagonal_does_not_check() {
        let info = detect_fen("7k/8/8/8/8/8/3r4/4K3 w - - 0 1");
        assert!(!info.in_check());
    }

    #[test]
    fn pawn_checks_only_forward_diagonally() {
        // Black pawn on d2 attacks e1.
        assert!(detect_fen("7k/8/8/8/8/8/3p4/4K3 w - - 0 1").in_check());
        // Black pawn on d1 beside the king does not.
        assert!(!detect_fen("7k/8/8/8/8/8/8/3pK3 w - - 0 1").in_check());
        // White pawn on f7 attacks e8, a black pawn on f7 does not.
        assert!(detect_fen("4k3/5P2/8/8/8/8/8/4K3 b - - 0 1").in_check());
        assert!(!detect_fen("4k3/5p2/8/8/8/8/8/4K3 b - - 0 1").in_check());
    }

    #[test]
    fn distant_pawn_and_king_do_not_check() {
        assert!(!detect_fen("7k/8/8/8/8/2p5/8/4K3 w - - 0 1").in_check());
        assert!(!detect_fen("8/8/8/8/8/4k3/8/4K3 w - - 0 1").in_check());
    }

    #[test]
    fn knight_check_is_not_sliding() {
        let info = detect_fen("7k/8/8/8/8/3n4/8/4K3 w - - 0 1");
        assert_eq!(info.checks.len(), 1);
        assert_eq!(info.checks[0].attacker, sq("d3"));
        assert!(!info.checks[0].sliding);
    }

    #[test]
    fn double_check() {
        let info = detect_fen("4r2k/8/8/8/8/3n4/8/4K3 w - - 0 1");
        assert!(info.is_double_check());
    }

    #[test]
    fn bishop_pins_knight() {
        let info = detect_fen("7k/8/8/b7/8/8/3N4/4K3 w - - 0 1");
        assert!(!info.in_check());
        assert_eq!(info.pins.len(), 1);
        assert_eq!(info.pins.get(sq("d2")), Some(Direction::new(-1, -1)));
    }

    #[test]
    fn two_friendly_pieces_break_the_pin() {
        let info = detect_fen("4r2k/8/8/8/4P3/8/4N3/4K3 w - - 0 1");
        assert!(info.pins.is_empty());
        assert!(!info.in_check());
    }

    #[test]
    fn wrong_geometry_does_not_pin() {
        // Bishop behind the knight on a file cannot pin it.
        let info = detect_fen("4b2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(info.pins.is_empty());
    }

    #[test]
    fn square_attack_query() {
        let state = BoardState::new_game();
        assert!(is_square_attacked(state.grid(), sq("e3"), Color::White));
        assert!(!is_square_attacked(state.grid(), sq("e4"), Color::White));
        assert!(is_square_attacked(state.grid(), sq("f6"), Color::Black));
    }
}
