//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! A promotion is one generated move but four leaves, one per piece choice,
//! so counts line up with published tables.

use super::legal_moves;
use crate::apply::commit;
use crate::promotion::promote;
use crate::{BoardState, MoveOutcome};
use chess_core::{Move, MoveKind, PromotionKind};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(state: &BoardState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(state);

    if depth == 1 {
        return moves.as_slice().iter().map(|m| leaves(*m)).sum();
    }

    let mut nodes = 0u64;
    for m in &moves {
        for (_, child) in children(state, *m) {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(state: &BoardState, depth: u32) -> Vec<(String, u64)> {
    let moves = legal_moves(state);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        for (uci, child) in children(state, *m) {
            let nodes = if depth > 1 {
                perft(&child, depth - 1)
            } else {
                1
            };
            results.push((uci, nodes));
        }
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[inline]
fn leaves(m: Move) -> u64 {
    if m.kind() == MoveKind::Promotion {
        PromotionKind::ALL.len() as u64
    } else {
        1
    }
}

/// Positions reached by `m`, one per promotion choice when it promotes.
fn children(state: &BoardState, m: Move) -> Vec<(String, BoardState)> {
    let mut next = state.clone();
    if commit(&mut next, m) != MoveOutcome::PromotionPending {
        return vec![(m.to_uci(), next)];
    }
    PromotionKind::ALL
        .iter()
        .map(|&choice| {
            let mut promoted = next.clone();
            promote(&mut promoted, choice);
            let uci = format!("{}{}", m.to_uci(), choice.piece_kind().to_char());
            (uci, promoted)
        })
        .collect()
}
